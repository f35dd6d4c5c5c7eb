//! Generated `package.json` for a new project

use serde_json::{Map, Value};

/// File name of the generated manifest at the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Version every new project starts at
pub const INITIAL_VERSION: &str = "0.1.0";

/// Package manifest built from generated defaults and template overrides
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    fields: Map<String, Value>,
}

impl ManifestDocument {
    /// Defaults for a fresh project: `name`, `version`, `private`
    pub fn new(app_name: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::from(app_name));
        fields.insert("version".to_string(), Value::from(INITIAL_VERSION));
        fields.insert("private".to_string(), Value::Bool(true));
        Self { fields }
    }

    /// Defaults overlaid with template overrides; overrides win on collision
    pub fn with_overrides(app_name: &str, overrides: &Map<String, Value>) -> Self {
        let mut manifest = Self::new(app_name);
        manifest.overlay(overrides);
        manifest
    }

    /// Shallow overlay. Existing keys keep their position, new keys append.
    pub fn overlay(&mut self, overrides: &Map<String, Value>) {
        for (key, value) in overrides {
            self.fields.insert(key.clone(), value.clone());
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Two-space indented JSON with a trailing newline
    pub fn to_pretty_json(&self) -> String {
        // Serializing a map of JSON values cannot fail
        let mut out = serde_json::to_string_pretty(&self.fields).unwrap_or_default();
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn overrides(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_defaults() {
        let manifest = ManifestDocument::new("my-app");
        assert_eq!(manifest.name(), Some("my-app"));
        assert_eq!(manifest.get("version"), Some(&json!("0.1.0")));
        assert_eq!(manifest.get("private"), Some(&json!(true)));
    }

    #[test]
    fn test_overrides_merge_and_win() {
        let manifest = ManifestDocument::with_overrides(
            "my-app",
            &overrides(json!({
                "scripts": { "dev": "vite" },
                "private": false
            })),
        );
        assert_eq!(manifest.name(), Some("my-app"));
        assert_eq!(manifest.get("private"), Some(&json!(false)));
        assert_eq!(manifest.get("scripts"), Some(&json!({ "dev": "vite" })));
    }

    #[test]
    fn test_template_name_override_wins() {
        let manifest =
            ManifestDocument::with_overrides("my-app", &overrides(json!({ "name": "fixed" })));
        assert_eq!(manifest.name(), Some("fixed"));
    }

    #[test]
    fn test_key_order_is_stable() {
        let manifest = ManifestDocument::with_overrides(
            "my-app",
            &overrides(json!({ "scripts": {}, "version": "1.0.0" })),
        );
        let keys: Vec<&str> = manifest.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "version", "private", "scripts"]);
    }

    #[test]
    fn test_pretty_json_output() {
        let manifest = ManifestDocument::new("my-app");
        assert_eq!(
            manifest.to_pretty_json(),
            "{\n  \"name\": \"my-app\",\n  \"version\": \"0.1.0\",\n  \"private\": true\n}\n"
        );
    }
}
