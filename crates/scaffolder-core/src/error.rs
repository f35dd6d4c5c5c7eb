//! Error types for the scaffolding workflow

use crate::name::NameReport;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Everything that can stop a scaffold run
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The project name breaks package naming rules
    #[error("Cannot create a project named \"{name}\" because of npm naming restrictions")]
    InvalidName { name: String, report: NameReport },

    /// The operator declined the overwrite or aborted a prompt
    #[error("Operation cancelled")]
    Cancelled,

    /// The selected id is not part of the catalog
    #[error("Template '{id}' not found. Available templates: {available}")]
    UnknownTemplate { id: String, available: String },

    /// The product offers nothing to pick from
    #[error("No templates are available to choose from")]
    NoTemplates,

    /// The template root exists (or not) but its file tree is missing
    #[error("Could not locate supplied template: {}", path.display())]
    MissingTemplate { path: PathBuf },

    /// The template descriptor exists but has the wrong shape
    #[error("Invalid template descriptor {}: {reason}", path.display())]
    InvalidDescriptor { path: PathBuf, reason: String },

    /// A filesystem step failed
    #[error("Failed to {op} {}: {kind}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        kind: FsErrorKind,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    /// Wrap an io error with the operation and path that produced it
    pub fn io(op: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.as_ref().to_path_buf(),
            kind: FsErrorKind::classify(&source),
            source,
        }
    }

    /// Process exit code for this failure; cancellation is a graceful exit
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Cancelled => 0,
            _ => 1,
        }
    }
}

/// Coarse classification of filesystem failures for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsErrorKind {
    PermissionDenied,
    StorageFull,
    PathTooLong,
    NotFound,
    Other,
}

impl FsErrorKind {
    pub fn classify(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
                Self::PermissionDenied
            }
            io::ErrorKind::StorageFull => Self::StorageFull,
            io::ErrorKind::InvalidFilename => Self::PathTooLong,
            io::ErrorKind::NotFound => Self::NotFound,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for FsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::PermissionDenied => "permission denied",
            Self::StorageFull => "no space left on device",
            Self::PathTooLong => "path or file name too long",
            Self::NotFound => "no such file or directory",
            Self::Other => "unexpected filesystem error",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_permission_denied() {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(FsErrorKind::classify(&err), FsErrorKind::PermissionDenied);
    }

    #[test]
    fn test_classify_storage_full() {
        let err = io::Error::from(io::ErrorKind::StorageFull);
        assert_eq!(FsErrorKind::classify(&err), FsErrorKind::StorageFull);
    }

    #[test]
    fn test_classify_unknown_falls_back_to_other() {
        let err = io::Error::other("boom");
        assert_eq!(FsErrorKind::classify(&err), FsErrorKind::Other);
    }

    #[test]
    fn test_io_error_message_is_one_line() {
        let err = ScaffoldError::io(
            "write",
            "/tmp/app/package.json",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        let msg = err.to_string();
        assert_eq!(msg, "Failed to write /tmp/app/package.json: permission denied");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_no_templates_message_is_readable() {
        let err = ScaffoldError::NoTemplates;
        assert_eq!(err.to_string(), "No templates are available to choose from");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_cancelled_exits_cleanly() {
        assert_eq!(ScaffoldError::Cancelled.exit_code(), 0);
    }
}
