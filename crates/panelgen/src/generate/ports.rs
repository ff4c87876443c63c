use panelgen_core::{catalog::ComponentCatalog, component::Category};

const SEPARATOR: &str = "\n            ";

fn config_call(category: Category) -> Option<&'static str> {
    match category {
        Category::Input => Some("configInput"),
        Category::Output => Some("configOutput"),
        Category::Light => Some("configLight"),
        Category::Param | Category::Widget => None,
    }
}

/// Renders the calls naming every input, output and light.
///
/// Parameters are named through their descriptors instead, and free-form
/// widgets have nothing to name.
pub fn config_widget_names(catalog: &ComponentCatalog) -> String {
    let mut lines = Vec::new();

    for (category, components) in catalog.iter() {
        let Some(call) = config_call(category) else {
            continue;
        };
        for component in components {
            if let Some(member) = component.enum_member(category) {
                lines.push(format!(
                    "module->{call} (Comp::{member}, \"{}\");",
                    component.name()
                ));
            }
        }
    }

    lines.join(SEPARATOR)
}
