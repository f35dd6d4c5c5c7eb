//! Recursive template tree copying

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copy every file under `source` into `target`, overwriting same-named files
///
/// Returns the copied paths relative to `source`, in sorted walk order.
pub fn copy_tree(source: &Path, target: &Path) -> Result<Vec<PathBuf>> {
    if !source.is_dir() {
        return Err(ScaffoldError::io(
            "read",
            source,
            std::io::Error::from(std::io::ErrorKind::NotFound),
        ));
    }
    fs::create_dir_all(target).map_err(|e| ScaffoldError::io("create directory", target, e))?;

    let mut copied_files = Vec::new();

    for entry in WalkDir::new(source)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            ScaffoldError::io("read", path, e.into())
        })?;

        let relative = entry
            .path()
            .strip_prefix(source)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| PathBuf::from(entry.file_name()));
        let target_path = target.join(&relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)
                .map_err(|e| ScaffoldError::io("create directory", &target_path, e))?;
            continue;
        }

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ScaffoldError::io("create directory", parent, e))?;
        }
        fs::copy(entry.path(), &target_path)
            .map_err(|e| ScaffoldError::io("copy", entry.path(), e))?;

        copied_files.push(relative);
    }

    Ok(copied_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copies_nested_files() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("src/routes")).unwrap();
        fs::write(src.path().join("src/routes/index.tsx"), "routes").unwrap();
        fs::write(src.path().join("tsconfig.json"), "{}").unwrap();

        let copied = copy_tree(src.path(), dst.path()).unwrap();

        assert_eq!(
            copied,
            vec![
                PathBuf::from("src/routes/index.tsx"),
                PathBuf::from("tsconfig.json")
            ]
        );
        assert_eq!(
            fs::read_to_string(dst.path().join("src/routes/index.tsx")).unwrap(),
            "routes"
        );
    }

    #[test]
    fn test_overwrites_existing_files() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::write(src.path().join("README.md"), "template readme").unwrap();
        fs::write(dst.path().join("README.md"), "old readme").unwrap();
        fs::write(dst.path().join("keep.txt"), "untouched").unwrap();

        copy_tree(src.path(), dst.path()).unwrap();

        assert_eq!(
            fs::read_to_string(dst.path().join("README.md")).unwrap(),
            "template readme"
        );
        assert!(dst.path().join("keep.txt").exists());
    }

    #[test]
    fn test_empty_directories_are_created() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::create_dir(src.path().join("public")).unwrap();

        let copied = copy_tree(src.path(), dst.path()).unwrap();

        assert!(copied.is_empty());
        assert!(dst.path().join("public").is_dir());
    }

    #[test]
    fn test_missing_source_fails() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        let err = copy_tree(&src.path().join("absent"), dst.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }
}
