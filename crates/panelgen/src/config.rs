//! Configuration types for panelgen.
//!
//! This module provides configuration structures that control where files are
//! generated, which classes generated widgets default to, and which sentinel
//! comments mark the insertion points in aggregator files. All types implement
//! [`serde::Deserialize`] and every field has a default, so a configuration
//! file only needs to mention what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`PathsConfig`] - Project-relative locations of generated and patched files.
//! - [`GeneratorConfig`] - Default widget classes and parameter bounds.
//! - [`SentinelConfig`] - Sentinel comments in aggregator files.
//!
//! # Example
//!
//! ```
//! # use panelgen::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [generator]
//!     param_class = "RoundBlackKnob"
//! "#).unwrap();
//!
//! assert_eq!(config.generator().param_class(), "RoundBlackKnob");
//! assert_eq!(config.generator().input_class(), "sspo::PJ301MPort");
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use panelgen_core::component::Category;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// File locations.
    #[serde(default)]
    paths: PathsConfig,

    /// Code generation defaults.
    #[serde(default)]
    generator: GeneratorConfig,

    /// Aggregator sentinels.
    #[serde(default)]
    sentinels: SentinelConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(paths: PathsConfig, generator: GeneratorConfig, sentinels: SentinelConfig) -> Self {
        Self {
            paths,
            generator,
            sentinels,
        }
    }

    /// Returns the path configuration.
    pub fn paths(&self) -> &PathsConfig {
        &self.paths
    }

    /// Returns the generator configuration.
    pub fn generator(&self) -> &GeneratorConfig {
        &self.generator
    }

    /// Returns the sentinel configuration.
    pub fn sentinels(&self) -> &SentinelConfig {
        &self.sentinels
    }
}

/// Project-relative file locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    module_dir: PathBuf,
    composite_dir: PathBuf,
    test_dir: PathBuf,
    template_dir: PathBuf,
    plugin_source: PathBuf,
    plugin_header: PathBuf,
    test_main: PathBuf,
    manifest: PathBuf,
    registry: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            module_dir: PathBuf::from("src/modules"),
            composite_dir: PathBuf::from("src/composites"),
            test_dir: PathBuf::from("test"),
            template_dir: PathBuf::from("src/templates"),
            plugin_source: PathBuf::from("src/plugin.cpp"),
            plugin_header: PathBuf::from("src/plugin.hpp"),
            test_main: PathBuf::from("test/main.cpp"),
            manifest: PathBuf::from("plugin.json"),
            registry: PathBuf::from(".panelgen/registry.toml"),
        }
    }
}

impl PathsConfig {
    /// Directory receiving generated module sources.
    pub fn module_dir(&self) -> &Path {
        &self.module_dir
    }

    /// Directory receiving generated composite headers.
    pub fn composite_dir(&self) -> &Path {
        &self.composite_dir
    }

    /// Directory receiving generated test scaffolds.
    pub fn test_dir(&self) -> &Path {
        &self.test_dir
    }

    /// Directory searched for project templates.
    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Plugin source registering every model.
    pub fn plugin_source(&self) -> &Path {
        &self.plugin_source
    }

    /// Plugin header declaring every model.
    pub fn plugin_header(&self) -> &Path {
        &self.plugin_header
    }

    /// Test harness entry point.
    pub fn test_main(&self) -> &Path {
        &self.test_main
    }

    /// Plugin manifest.
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    /// Registry of identifiers already spliced into aggregator files.
    pub fn registry(&self) -> &Path {
        &self.registry
    }
}

/// Code generation defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    param_class: String,
    input_class: String,
    output_class: String,
    light_class: String,
    widget_class: String,
    param_min: f64,
    param_max: f64,
    param_default: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            param_class: "sspo::Knob".to_string(),
            input_class: "sspo::PJ301MPort".to_string(),
            output_class: "sspo::PJ301MPort".to_string(),
            light_class: "SmallLight<GreenLight>".to_string(),
            widget_class: "Widget".to_string(),
            param_min: 0.0,
            param_max: 1.0,
            param_default: 0.5,
        }
    }
}

impl GeneratorConfig {
    /// Default class of parameter widgets.
    pub fn param_class(&self) -> &str {
        &self.param_class
    }

    /// Default class of input ports.
    pub fn input_class(&self) -> &str {
        &self.input_class
    }

    /// Default class of output ports.
    pub fn output_class(&self) -> &str {
        &self.output_class
    }

    /// Default class of lights.
    pub fn light_class(&self) -> &str {
        &self.light_class
    }

    /// Default class of free-form widgets.
    pub fn widget_class(&self) -> &str {
        &self.widget_class
    }

    /// Returns the default class for `category`.
    pub fn default_class(&self, category: Category) -> &str {
        match category {
            Category::Param => self.param_class(),
            Category::Input => self.input_class(),
            Category::Output => self.output_class(),
            Category::Light => self.light_class(),
            Category::Widget => self.widget_class(),
        }
    }

    /// Returns `(min, max, default)` of generated parameter descriptors.
    pub fn param_bounds(&self) -> (f64, f64, f64) {
        (self.param_min, self.param_max, self.param_default)
    }
}

/// Sentinel comments marking insertion points in aggregator files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SentinelConfig {
    add_model: String,
    model_extern: String,
    test_extern: String,
    test_call: String,
}

impl Default for SentinelConfig {
    fn default() -> Self {
        Self {
            add_model: "// ADD ADDMODEL".to_string(),
            model_extern: "//ADD EXTERNS".to_string(),
            test_extern: "// ADD EXTERN".to_string(),
            test_call: "// ADD NEWTEST".to_string(),
        }
    }
}

impl SentinelConfig {
    /// Sentinel in the plugin source where `addModel` calls go.
    pub fn add_model(&self) -> &str {
        &self.add_model
    }

    /// Sentinel in the plugin header where model declarations go.
    pub fn model_extern(&self) -> &str {
        &self.model_extern
    }

    /// Sentinel in the test harness where test declarations go.
    pub fn test_extern(&self) -> &str {
        &self.test_extern
    }

    /// Sentinel in the test harness where test calls go.
    pub fn test_call(&self) -> &str {
        &self.test_call
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.paths().module_dir(), Path::new("src/modules"));
        assert_eq!(config.paths().test_main(), Path::new("test/main.cpp"));
        assert_eq!(config.generator().default_class(Category::Light), "SmallLight<GreenLight>");
        assert_eq!(config.generator().param_bounds(), (0.0, 1.0, 0.5));
        assert_eq!(config.sentinels().add_model(), "// ADD ADDMODEL");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [paths]
            module_dir = "src"

            [sentinels]
            test_call = "// RUN TESTS HERE"
            "#,
        )
        .unwrap();

        assert_eq!(config.paths().module_dir(), Path::new("src"));
        assert_eq!(config.paths().composite_dir(), Path::new("src/composites"));
        assert_eq!(config.sentinels().test_call(), "// RUN TESTS HERE");
        assert_eq!(config.sentinels().test_extern(), "// ADD EXTERN");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.generator().widget_class(), "Widget");
    }
}
