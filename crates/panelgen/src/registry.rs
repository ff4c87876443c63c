//! Persistent record of modules already spliced into aggregator files.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use panelgen_core::identifier::Identifier;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid registry: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize registry: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Ordered set of registered module identifiers.
///
/// Stored as TOML:
///
/// ```toml
/// modules = ["Gain", "Mixer"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    modules: Vec<Identifier>,
}

impl Registry {
    /// Parses a registry from its TOML text.
    ///
    /// # Examples
    ///
    /// ```
    /// use panelgen::{identifier::Identifier, registry::Registry};
    ///
    /// let registry = Registry::from_toml("modules = [\"Gain\"]").unwrap();
    /// assert!(registry.contains(&Identifier::sanitize("Gain")));
    /// ```
    pub fn from_toml(text: &str) -> Result<Self, RegistryError> {
        Ok(toml::from_str(text)?)
    }

    /// Serializes the registry to TOML.
    pub fn to_toml(&self) -> Result<String, RegistryError> {
        Ok(toml::to_string(self)?)
    }

    pub fn contains(&self, identifier: &Identifier) -> bool {
        self.modules.contains(identifier)
    }

    /// Records `identifier`. Returns `false` if it was already present.
    pub fn register(&mut self, identifier: Identifier) -> bool {
        if self.contains(&identifier) {
            return false;
        }
        self.modules.push(identifier);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identifier> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
