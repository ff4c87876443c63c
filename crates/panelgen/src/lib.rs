//! Panelgen - Generate plugin module source skeletons from SVG panels.
//!
//! A panel drawn in a vector editor carries a `components` layer with one
//! colored shape per knob, jack, light or custom widget. Panelgen reads that
//! layer, classifies the shapes by color, renders the module source,
//! composite header and test scaffold from templates, and splices the
//! module's registration lines into the plugin's aggregator files.
//!
//! Everything here works on in-memory text; reading and writing files is
//! left to the caller.

pub mod aggregator;
pub mod artifact;
pub mod config;
pub mod generate;
pub mod registry;
pub mod template;

mod error;

pub use panelgen_core::{catalog, component, geometry, identifier};

pub use error::PanelgenError;

use log::{debug, info, trace};

use aggregator::AggregatorPatcher;
use artifact::{GeneratedArtifact, TemplateSet};
use catalog::ComponentCatalog;
use config::AppConfig;
use identifier::{Identifier, Slug};

/// Builder for turning panels into module scaffolding.
///
/// # Examples
///
/// ```
/// use panelgen::{ScaffoldBuilder, identifier::Slug};
///
/// let panel = r##"
///     <svg xmlns="http://www.w3.org/2000/svg" height="128.5mm">
///         <g id="components">
///             <rect id="Gain" x="2" y="3" width="4" height="4" fill="#ff0000"/>
///         </g>
///     </svg>
/// "##;
///
/// let builder = ScaffoldBuilder::default();
/// let catalog = builder.extract(panel).expect("Failed to extract");
/// let slug = Slug::new("Gain").expect("Invalid slug");
/// let artifacts = builder.generate(&slug, 2026, &catalog);
///
/// assert_eq!(artifacts.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct ScaffoldBuilder {
    config: AppConfig,
    templates: TemplateSet,
}

impl ScaffoldBuilder {
    /// Create a new scaffold builder using the built-in templates.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including generator defaults and sentinels
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            templates: TemplateSet::default(),
        }
    }

    /// Replace the templates artifacts are rendered from.
    pub fn with_templates(mut self, templates: TemplateSet) -> Self {
        self.templates = templates;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Extract and classify the components drawn on a panel.
    ///
    /// Elements that cannot be used are skipped and logged; they never fail
    /// the extraction.
    ///
    /// # Errors
    ///
    /// Returns `PanelgenError::Parse` if the panel is not well-formed or has
    /// no components layer.
    pub fn extract(&self, source: &str) -> Result<ComponentCatalog, PanelgenError> {
        info!("Extracting panel components");

        let extraction = panelgen_parser::parse_panel(source)
            .map_err(|err| PanelgenError::new_parse_error(err, source))?;
        debug!(
            scale = extraction.scale(),
            skipped = extraction.warnings().len();
            "Panel parsed successfully"
        );

        let catalog = ComponentCatalog::classify(extraction.into_elements());
        trace!(catalog:?; "Classified components");

        Ok(catalog)
    }

    /// Render the module source, composite header and test scaffold for `slug`.
    ///
    /// `year` is substituted into copyright headers.
    pub fn generate(
        &self,
        slug: &Slug,
        year: i32,
        catalog: &ComponentCatalog,
    ) -> Vec<GeneratedArtifact> {
        let identifier = slug.identifier();
        info!(slug = slug.as_str(), identifier = identifier.as_str(); "Rendering artifacts");

        artifact::render_artifacts(
            &identifier,
            year,
            catalog,
            &self.templates,
            self.config.generator(),
        )
    }

    /// Patcher using the configured sentinels.
    pub fn patcher(&self) -> AggregatorPatcher {
        AggregatorPatcher::new(self.config.sentinels().clone())
    }
}

/// Instructions for registering a module by hand.
pub fn enable_hint(identifier: &Identifier) -> String {
    format!(
        "To enable the module, add\n\n\textern Model* model{identifier};\n\n\
         to plugin.hpp, and add\n\n\tp->addModel(model{identifier});\n\n\
         to the init() function in plugin.cpp."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_hint() {
        let hint = enable_hint(&Identifier::sanitize("gain"));

        assert!(hint.contains("extern Model* modelGain;"));
        assert!(hint.contains("p->addModel(modelGain);"));
    }

    #[test]
    fn test_extract_reports_parse_error_with_source() {
        let source = "<svg xmlns=\"http://www.w3.org/2000/svg\"><g id=\"panel\"/></svg>";
        let err = ScaffoldBuilder::default().extract(source).unwrap_err();

        match err {
            PanelgenError::Parse { err, src } => {
                assert_eq!(src, source);
                assert!(err.to_string().contains("Could not find \"components\" layer on panel"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
