//! End-to-end scaffold orchestration
//!
//! The flow is strictly sequential:
//!
//! 1. validate the project name (nothing touches disk before this passes)
//! 2. create the destination directory
//! 3. scan it for conflicts, deleting stale logs
//! 4. if anything conflicts, show it and ask before going further
//! 5. ask for a template, resolve it, and materialize it
//!
//! All user interaction goes through [`Prompter`], so the flow can be driven
//! by a terminal UI or by a script in tests.

use crate::conflict::{self, DirectoryConflictReport};
use crate::error::{Result, ScaffoldError};
use crate::materialize::{materialize, Materialized};
use crate::name::{validate_project_name, NameReport};
use crate::templates::{Template, TemplateCatalog};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Message for the overwrite confirmation
pub const OVERWRITE_PROMPT: &str = "Remove existing files and continue?";

/// Message for the template selection
pub const TEMPLATE_PROMPT: &str = "Select a template";

/// The project the operator asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    input: String,
    name: String,
    destination: PathBuf,
}

impl ProjectRequest {
    /// Resolve `input` against `cwd`; the project name is the final path component
    pub fn new(input: &str, cwd: &Path) -> Result<Self> {
        let destination = normalize(&cwd.join(input));
        let name = match destination.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => {
                return Err(ScaffoldError::InvalidName {
                    name: input.to_string(),
                    report: validate_project_name(""),
                })
            }
        };

        Ok(Self {
            input: input.to_string(),
            name,
            destination,
        })
    }

    /// Resolve `input` against the process working directory
    pub fn from_arg(input: &str) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| ScaffoldError::io("read", ".", e))?;
        Self::new(input, &cwd)
    }

    /// The path exactly as the operator typed it
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// Lexically resolve `.` and `..` without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Interactive capabilities the orchestrator needs
///
/// `confirm` and `select_template` return [`ScaffoldError::Cancelled`] when
/// the operator aborts the prompt.
pub trait Prompter {
    /// Show the conflicting entries before asking to remove them
    fn show_conflicts(&mut self, project_dir: &str, report: &DirectoryConflictReport)
        -> Result<()>;

    /// Yes/no question
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Pick one template; returns its index in `templates`
    fn select_template(&mut self, message: &str, templates: &[Template]) -> Result<usize>;

    fn warn(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }
}

/// A finished scaffold
#[derive(Debug, Clone)]
pub struct Scaffolded {
    pub template: Template,
    /// Whether pre-existing entries were removed before copying
    pub purged: bool,
    pub materialized: Materialized,
}

/// Gate on the project name, returning the advisory report when it passes
pub fn check_name(request: &ProjectRequest) -> Result<NameReport> {
    let report = validate_project_name(request.name());
    if report.is_valid() {
        Ok(report)
    } else {
        Err(ScaffoldError::InvalidName {
            name: request.name().to_string(),
            report,
        })
    }
}

/// Run one scaffold from name check to copied template
pub fn scaffold<P: Prompter>(
    request: &ProjectRequest,
    catalog: &TemplateCatalog,
    prompter: &mut P,
) -> Result<Scaffolded> {
    let name_report = check_name(request)?;
    for warning in &name_report.warnings {
        prompter.warn(warning)?;
    }

    let destination = request.destination();
    fs::create_dir_all(destination)
        .map_err(|e| ScaffoldError::io("create directory", destination, e))?;

    let report = conflict::scan(destination)?;

    let purge = if report.has_conflicts() {
        prompter.show_conflicts(request.input(), &report)?;
        if !prompter.confirm(OVERWRITE_PROMPT, false)? {
            return Err(ScaffoldError::Cancelled);
        }
        true
    } else {
        false
    };

    let templates = catalog.list();
    if templates.is_empty() {
        return Err(ScaffoldError::NoTemplates);
    }
    let index = prompter.select_template(TEMPLATE_PROMPT, templates)?;
    let template = templates
        .get(index)
        .ok_or_else(|| ScaffoldError::UnknownTemplate {
            id: format!("#{}", index),
            available: templates
                .iter()
                .map(|t| t.id)
                .collect::<Vec<_>>()
                .join(", "),
        })?;

    let resolved = catalog.resolve(template.id)?;
    let materialized = materialize(destination, request.name(), &resolved, purge)?;

    if let Some(name) = materialized.manifest.name() {
        if name != request.name() {
            prompter.warn(&format!(
                "Template '{}' sets the package name to \"{}\"",
                template.id, name
            ))?;
        }
    }

    Ok(Scaffolded {
        template: *template,
        purged: purge,
        materialized,
    })
}
