//! Project name validation against npm package naming rules

/// Maximum package name length accepted by the registry
pub const MAX_NAME_LENGTH: usize = 214;

/// Names the registry refuses outright
const BLOCKED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

/// Node.js core modules; a package cannot shadow them
const CORE_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// Outcome of validating a candidate name
///
/// Errors make the name unusable. Warnings are advisory and are shown
/// alongside errors, but never block project creation on their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl NameReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All messages, errors first
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .map(String::as_str)
    }
}

/// Validate a project name for use as a new package
pub fn validate_project_name(name: &str) -> NameReport {
    let mut report = NameReport::default();
    let errors = &mut report.errors;

    if name.is_empty() {
        errors.push("name length must be greater than zero".to_string());
    }
    if name.starts_with('.') {
        errors.push("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        errors.push("name cannot start with an underscore".to_string());
    }
    if name.trim() != name {
        errors.push("name cannot contain leading or trailing spaces".to_string());
    }

    let lower = name.to_lowercase();
    for blocked in BLOCKED_NAMES {
        if lower == *blocked {
            errors.push(format!("{} is a blacklisted name", blocked));
        }
    }
    for core in CORE_MODULES {
        if lower == *core {
            errors.push(format!("{} is a core module name", core));
        }
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        errors.push(format!(
            "name can no longer contain more than {} characters",
            MAX_NAME_LENGTH
        ));
    }
    if lower != name {
        errors.push("name can no longer contain capital letters".to_string());
    }

    let last_segment = name.rsplit('/').next().unwrap_or(name);
    if last_segment.chars().any(|c| "~'!()*".contains(c)) {
        errors.push("name can no longer contain special characters (\"~'!()*\")".to_string());
    }

    if !is_url_friendly(name) && !is_url_friendly_scoped(name) {
        errors.push("name can only contain URL-friendly characters".to_string());
    }

    for word in ["node", "js"] {
        if name_segments(name).any(|segment| segment.eq_ignore_ascii_case(word)) {
            report.warnings.push(format!(
                "name should not contain \"{}\", it is redundant for an npm package",
                word
            ));
        }
    }

    report
}

/// Characters left untouched by URI component encoding
fn is_url_friendly(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_.!~*'()".contains(c))
}

/// `@scope/name` where both halves are URL friendly on their own
fn is_url_friendly_scoped(name: &str) -> bool {
    let Some(rest) = name.strip_prefix('@') else {
        return false;
    };
    match rest.split_once('/') {
        Some((scope, pkg)) => {
            !scope.is_empty()
                && !pkg.is_empty()
                && !pkg.contains('/')
                && is_url_friendly(scope)
                && is_url_friendly(pkg)
        }
        None => false,
    }
}

fn name_segments(name: &str) -> impl Iterator<Item = &str> {
    let unscoped = name.rsplit('/').next().unwrap_or(name);
    unscoped.split(['-', '.', '_'])
}
