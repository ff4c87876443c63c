//! Generated source artifacts and the templates they are rendered from.

use std::fmt;

use log::debug;

use panelgen_core::{catalog::ComponentCatalog, identifier::Identifier};

use crate::{
    config::GeneratorConfig,
    generate,
    template::{Slot, SlotValues, Template},
};

/// The kind of file generated for a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Module and widget implementation, `<Id>.cpp`.
    ModuleSource,
    /// Composite header with port enums and parameter descriptors, `<Id>.h`.
    CompositeHeader,
    /// Unit test scaffold, `test<Id>.cpp`.
    TestScaffold,
}

impl ArtifactKind {
    /// Every artifact kind, in the order they are generated.
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::ModuleSource,
        ArtifactKind::CompositeHeader,
        ArtifactKind::TestScaffold,
    ];

    /// File name of this artifact for `identifier`.
    pub fn file_name(self, identifier: &Identifier) -> String {
        match self {
            Self::ModuleSource => format!("{identifier}.cpp"),
            Self::CompositeHeader => format!("{identifier}.h"),
            Self::TestScaffold => format!("test{identifier}.cpp"),
        }
    }

    /// Slots filled when rendering this artifact.
    pub fn slots(self) -> &'static [Slot] {
        match self {
            Self::ModuleSource => &[
                Slot::Year,
                Slot::Slug,
                Slot::AddWidgets,
                Slot::ConfigWidgetName,
            ],
            Self::CompositeHeader => &[
                Slot::Year,
                Slot::Slug,
                Slot::PortEnums,
                Slot::CaseParamDescriptions,
            ],
            Self::TestScaffold => &[Slot::Year, Slot::Slug],
        }
    }

    /// File name of the project template overriding the built-in one.
    pub fn template_file_name(self) -> &'static str {
        match self {
            Self::ModuleSource => "templateModule.cpp",
            Self::CompositeHeader => "templateComposite.h",
            Self::TestScaffold => "templateTest.cpp",
        }
    }

    /// Template shipped with the library.
    pub fn builtin_template(self) -> &'static str {
        match self {
            Self::ModuleSource => include_str!("../templates/module.cpp.tmpl"),
            Self::CompositeHeader => include_str!("../templates/composite.h.tmpl"),
            Self::TestScaffold => include_str!("../templates/test.cpp.tmpl"),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ModuleSource => "module source",
            Self::CompositeHeader => "composite header",
            Self::TestScaffold => "test scaffold",
        };
        f.write_str(name)
    }
}

/// One rendered file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    kind: ArtifactKind,
    file_name: String,
    contents: String,
}

impl GeneratedArtifact {
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// The templates used for each artifact kind.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    module: Template,
    composite: Template,
    test: Template,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self {
            module: Template::new(ArtifactKind::ModuleSource.builtin_template()),
            composite: Template::new(ArtifactKind::CompositeHeader.builtin_template()),
            test: Template::new(ArtifactKind::TestScaffold.builtin_template()),
        }
    }
}

impl TemplateSet {
    /// Replaces the template for `kind`.
    pub fn with(mut self, kind: ArtifactKind, template: Template) -> Self {
        match kind {
            ArtifactKind::ModuleSource => self.module = template,
            ArtifactKind::CompositeHeader => self.composite = template,
            ArtifactKind::TestScaffold => self.test = template,
        }
        self
    }

    /// Returns the template for `kind`.
    pub fn get(&self, kind: ArtifactKind) -> &Template {
        match kind {
            ArtifactKind::ModuleSource => &self.module,
            ArtifactKind::CompositeHeader => &self.composite,
            ArtifactKind::TestScaffold => &self.test,
        }
    }
}

/// Computes the fragments substituted into the template of `kind`.
pub fn slot_values(
    kind: ArtifactKind,
    identifier: &Identifier,
    year: i32,
    catalog: &ComponentCatalog,
    config: &GeneratorConfig,
) -> SlotValues {
    let mut values = SlotValues::new();
    for slot in kind.slots() {
        let fragment = match slot {
            Slot::Year => year.to_string(),
            Slot::Slug => identifier.to_string(),
            Slot::PortEnums => generate::port_enums(catalog),
            Slot::AddWidgets => generate::add_widgets(catalog, config),
            Slot::ConfigWidgetName => generate::config_widget_names(catalog),
            Slot::CaseParamDescriptions => {
                generate::case_param_descriptions(identifier, catalog, config)
            }
        };
        values.insert(*slot, fragment);
    }
    values
}

/// Renders every artifact for one module.
pub fn render_artifacts(
    identifier: &Identifier,
    year: i32,
    catalog: &ComponentCatalog,
    templates: &TemplateSet,
    config: &GeneratorConfig,
) -> Vec<GeneratedArtifact> {
    ArtifactKind::ALL
        .into_iter()
        .map(|kind| {
            let template = templates.get(kind);
            let values = slot_values(kind, identifier, year, catalog, config);

            for slot in template.tokens_present() {
                if values.get(slot).is_none() {
                    debug!(artifact:% = kind, token = slot.token(); "Token left unsubstituted");
                }
            }

            GeneratedArtifact {
                kind,
                file_name: kind.file_name(identifier),
                contents: template.render(&values),
            }
        })
        .collect()
}
