//! Per-template descriptor (`template.json`, `template.yaml` or `template.yml`)

use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Descriptor file names, in lookup order
pub const DESCRIPTOR_FILES: &[&str] = &["template.json", "template.yaml", "template.yml"];

/// Optional document at the root of a template directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateDescriptor {
    /// Fields merged over the generated package manifest
    #[serde(default, deserialize_with = "null_as_empty")]
    pub package: Map<String, Value>,
}

/// `package: null` (or a bare `package:` in YAML) means no overrides
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl TemplateDescriptor {
    /// Load the descriptor from a template root, or an empty one if absent
    pub fn load(template_root: &Path) -> Result<Self> {
        match Self::find(template_root) {
            Some(path) => Self::load_file(&path),
            None => Ok(Self::default()),
        }
    }

    fn find(template_root: &Path) -> Option<PathBuf> {
        DESCRIPTOR_FILES
            .iter()
            .map(|file| template_root.join(file))
            .find(|path| path.is_file())
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ScaffoldError::io("read", path, e))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let invalid = |reason: String| ScaffoldError::InvalidDescriptor {
            path: path.to_path_buf(),
            reason,
        };

        let is_yaml = path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml");
        if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| invalid(e.to_string()))
        } else {
            serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_absent_descriptor_is_empty() {
        let temp = TempDir::new().unwrap();
        let descriptor = TemplateDescriptor::load(temp.path()).unwrap();
        assert!(descriptor.package.is_empty());
    }

    #[test]
    fn test_json_descriptor() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("template.json"),
            r#"{ "package": { "scripts": { "dev": "vite" } } }"#,
        )
        .unwrap();

        let descriptor = TemplateDescriptor::load(temp.path()).unwrap();
        assert_eq!(
            descriptor.package.get("scripts"),
            Some(&json!({ "dev": "vite" }))
        );
    }

    #[test]
    fn test_yaml_descriptor() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("template.yaml"),
            "package:\n  type: module\n  private: false\n",
        )
        .unwrap();

        let descriptor = TemplateDescriptor::load(temp.path()).unwrap();
        assert_eq!(descriptor.package.get("type"), Some(&json!("module")));
        assert_eq!(descriptor.package.get("private"), Some(&json!(false)));
    }

    #[test]
    fn test_json_preferred_over_yaml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("template.json"), r#"{ "package": { "a": 1 } }"#).unwrap();
        fs::write(temp.path().join("template.yaml"), "package:\n  b: 2\n").unwrap();

        let descriptor = TemplateDescriptor::load(temp.path()).unwrap();
        assert!(descriptor.package.contains_key("a"));
        assert!(!descriptor.package.contains_key("b"));
    }

    #[test]
    fn test_descriptor_without_package_key() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("template.json"), "{}").unwrap();
        assert!(TemplateDescriptor::load(temp.path())
            .unwrap()
            .package
            .is_empty());
    }

    #[test]
    fn test_yml_extension_is_found() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("template.yml"), "package:\n  type: module\n").unwrap();

        let descriptor = TemplateDescriptor::load(temp.path()).unwrap();
        assert_eq!(descriptor.package.get("type"), Some(&json!("module")));
    }

    #[test]
    fn test_yaml_preferred_over_yml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("template.yaml"), "package:\n  a: 1\n").unwrap();
        fs::write(temp.path().join("template.yml"), "package:\n  b: 2\n").unwrap();

        let descriptor = TemplateDescriptor::load(temp.path()).unwrap();
        assert!(descriptor.package.contains_key("a"));
        assert!(!descriptor.package.contains_key("b"));
    }

    #[test]
    fn test_null_package_is_empty_in_both_formats() {
        let json_dir = TempDir::new().unwrap();
        fs::write(json_dir.path().join("template.json"), r#"{ "package": null }"#).unwrap();
        let from_json = TemplateDescriptor::load(json_dir.path()).unwrap();
        assert!(from_json.package.is_empty());

        let yaml_dir = TempDir::new().unwrap();
        fs::write(yaml_dir.path().join("template.yaml"), "package:\n").unwrap();
        let from_yaml = TemplateDescriptor::load(yaml_dir.path()).unwrap();
        assert!(from_yaml.package.is_empty());

        assert_eq!(from_json, from_yaml);
    }

    #[test]
    fn test_package_must_be_an_object() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("template.json"), r#"{ "package": "nope" }"#).unwrap();

        let err = TemplateDescriptor::load(temp.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidDescriptor { .. }));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("template.json"), r#"{ "pkg": {} }"#).unwrap();

        let err = TemplateDescriptor::load(temp.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidDescriptor { .. }));
    }
}
