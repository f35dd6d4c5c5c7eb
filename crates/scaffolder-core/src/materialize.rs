//! Writing a resolved template into the destination directory

use crate::conflict;
use crate::error::{Result, ScaffoldError};
use crate::manifest::{ManifestDocument, MANIFEST_FILE};
use crate::templates::{copy_tree, ResolvedTemplate};
use std::fs;
use std::path::{Path, PathBuf};

/// What a successful materialization produced
#[derive(Debug, Clone)]
pub struct Materialized {
    pub manifest: ManifestDocument,
    /// Template files copied, relative to the destination
    pub files: Vec<PathBuf>,
}

/// Purge (if confirmed), write the manifest, then copy the template tree
///
/// Steps run in order with no rollback; a failure leaves whatever the
/// earlier steps produced.
pub fn materialize(
    destination: &Path,
    app_name: &str,
    template: &ResolvedTemplate,
    purge_existing: bool,
) -> Result<Materialized> {
    if purge_existing {
        conflict::purge(destination)?;
    }

    let manifest = ManifestDocument::with_overrides(app_name, &template.manifest_overrides);
    let manifest_path = destination.join(MANIFEST_FILE);
    fs::write(&manifest_path, manifest.to_pretty_json())
        .map_err(|e| ScaffoldError::io("write", &manifest_path, e))?;

    let files = copy_tree(&template.tree_dir, destination)?;

    Ok(Materialized { manifest, files })
}
