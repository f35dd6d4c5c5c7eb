//! Destination directory inspection before scaffolding
//!
//! Every entry in the destination lands in exactly one class: benign files
//! that may coexist with a new project, stale package-manager logs that are
//! deleted on sight, and everything else, which counts as a conflict.

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::Path;

/// Entries that can stay in the destination without prompting
pub const BENIGN_ENTRIES: &[&str] = &[
    ".DS_Store",
    ".git",
    ".gitignore",
    ".idea",
    ".vscode",
    "README.md",
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "yarn-lock.json",
];

/// Prefixes of package-manager error logs left behind by earlier runs
pub const STALE_LOG_PREFIXES: &[&str] = &["npm-debug.log", "yarn-error.log", "yarn-debug.log"];

/// How a single destination entry is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryClass {
    Benign,
    StaleLog,
    Conflicting,
}

/// Classify an entry by its file name alone
pub fn classify(file_name: &str) -> EntryClass {
    if BENIGN_ENTRIES.contains(&file_name) {
        EntryClass::Benign
    } else if STALE_LOG_PREFIXES
        .iter()
        .any(|prefix| file_name.starts_with(prefix))
    {
        EntryClass::StaleLog
    } else {
        EntryClass::Conflicting
    }
}

/// A conflicting entry found in the destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictEntry {
    pub name: String,
    pub is_dir: bool,
}

impl ConflictEntry {
    /// Directories get a trailing slash so they read differently from files
    pub fn display_name(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Result of scanning a destination directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryConflictReport {
    /// Conflicting entries in directory enumeration order
    pub entries: Vec<ConflictEntry>,
}

impl DirectoryConflictReport {
    pub fn has_conflicts(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// Scan the destination, deleting stale logs and collecting conflicts
///
/// Log deletion happens regardless of whether conflicts are found or the
/// run is later cancelled.
pub fn scan(destination: &Path) -> Result<DirectoryConflictReport> {
    let read_dir =
        fs::read_dir(destination).map_err(|e| ScaffoldError::io("read", destination, e))?;

    let mut report = DirectoryConflictReport::default();

    for entry in read_dir {
        let entry = entry.map_err(|e| ScaffoldError::io("read", destination, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();

        match classify(&name) {
            EntryClass::Benign => {}
            EntryClass::StaleLog => remove_entry(&path)?,
            EntryClass::Conflicting => {
                // An entry that vanished between listing and stat shows as a file
                let is_dir = fs::symlink_metadata(&path)
                    .map(|meta| meta.is_dir())
                    .unwrap_or(false);
                report.entries.push(ConflictEntry { name, is_dir });
            }
        }
    }

    Ok(report)
}

/// Delete every top-level entry of `dir`, leaving `dir` itself in place
pub fn purge(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    let read_dir = fs::read_dir(dir).map_err(|e| ScaffoldError::io("read", dir, e))?;
    for entry in read_dir {
        let entry = entry.map_err(|e| ScaffoldError::io("read", dir, e))?;
        remove_entry(&entry.path())?;
    }

    Ok(())
}

fn remove_entry(path: &Path) -> Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(ScaffoldError::io("inspect", path, e)),
    };

    let removed = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match removed {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ScaffoldError::io("remove", path, e)),
    }
}
