//! The plugin manifest (`plugin.json`).
//!
//! Only the `modules` list is interpreted; every other field, at the top
//! level and inside module entries, is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use panelgen::PanelgenError;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Invalid plugin manifest: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Could not serialize plugin manifest: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl From<ManifestError> for PanelgenError {
    fn from(err: ManifestError) -> Self {
        PanelgenError::Manifest(err.to_string())
    }
}

/// One entry of the manifest's `modules` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleEntry {
    slug: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ModuleEntry {
    /// Creates an entry; `name` defaults to the slug and blank tags are dropped.
    pub fn new(
        slug: impl Into<String>,
        name: Option<String>,
        description: impl Into<String>,
        tags: impl IntoIterator<Item = String>,
    ) -> Self {
        let slug = slug.into();
        Self {
            name: name.unwrap_or_else(|| slug.clone()),
            slug,
            description: description.into(),
            tags: tags
                .into_iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
            extra: Map::new(),
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(flatten)]
    fields: Map<String, Value>,
    #[serde(default)]
    modules: Vec<ModuleEntry>,
}

impl Manifest {
    /// Default manifest for a new plugin.
    pub fn new(slug: &str) -> Self {
        let mut fields = Map::new();
        let text = |value: &str| Value::String(value.to_string());

        fields.insert("slug".into(), text(slug));
        fields.insert("name".into(), text(slug));
        fields.insert("version".into(), text("2.0.0"));
        fields.insert("license".into(), text("proprietary"));
        fields.insert("brand".into(), text(slug));
        for key in [
            "author",
            "authorEmail",
            "authorUrl",
            "pluginUrl",
            "manualUrl",
            "sourceUrl",
            "donateUrl",
            "changelogUrl",
        ] {
            fields.insert(key.into(), text(""));
        }

        Self {
            fields,
            modules: Vec::new(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(text).map_err(ManifestError::Parse)
    }

    /// Serializes with two-space indentation.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        let mut json = serde_json::to_string_pretty(self).map_err(ManifestError::Serialize)?;
        json.push('\n');
        Ok(json)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.modules.iter().any(|module| module.slug() == slug)
    }

    pub fn push(&mut self, entry: ModuleEntry) {
        self.modules.push(entry);
    }

    pub fn modules(&self) -> &[ModuleEntry] {
        &self.modules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_are_preserved() {
        let text = r#"{
  "slug": "sspo",
  "version": "2.1.0",
  "minRackVersion": "2.0.0",
  "modules": [
    {
      "slug": "Thru",
      "name": "Thru",
      "description": "",
      "tags": ["Utility"],
      "manualUrl": "https://example.com/thru"
    }
  ]
}"#;
        let mut manifest = Manifest::from_json(text).unwrap();
        manifest.push(ModuleEntry::new("Gain", None, "", Vec::new()));

        let json = manifest.to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["minRackVersion"], "2.0.0");
        assert_eq!(value["modules"][0]["manualUrl"], "https://example.com/thru");
        assert_eq!(value["modules"][1]["slug"], "Gain");
        assert_eq!(value["modules"][1]["name"], "Gain");
        assert!(json.contains("\n  \"slug\": \"sspo\""));
    }

    #[test]
    fn test_contains() {
        let mut manifest = Manifest::new("sspo");
        assert!(!manifest.contains("Gain"));

        manifest.push(ModuleEntry::new("Gain", Some("Gain Stage".into()), "", Vec::new()));
        assert!(manifest.contains("Gain"));
        assert_eq!(manifest.modules()[0].name(), "Gain Stage");
    }

    #[test]
    fn test_tags_are_trimmed() {
        let entry = ModuleEntry::new(
            "Gain",
            None,
            "",
            vec!["Utility".to_string(), " Attenuator ".to_string(), String::new()],
        );

        assert_eq!(entry.tags(), ["Utility", "Attenuator"]);
    }

    #[test]
    fn test_default_manifest() {
        let json = Manifest::new("sspo").to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["version"], "2.0.0");
        assert_eq!(value["brand"], "sspo");
        assert_eq!(value["modules"], Value::Array(Vec::new()));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Manifest::from_json("{"), Err(ManifestError::Parse(_))));
    }
}
