use panelgen_core::catalog::ComponentCatalog;

const INDENT: &str = "    ";

/// Renders the `ParamId`, `InputId`, `OutputId` and `LightId` enums.
///
/// Every enum is emitted, even when its category is empty, so that the
/// `NUM_*` terminators always exist.
pub fn port_enums(catalog: &ComponentCatalog) -> String {
    let mut source = String::new();

    for (category, components) in catalog.iter() {
        let (Some(enum_name), Some(terminator)) =
            (category.enum_name(), category.count_terminator())
        else {
            continue;
        };

        source.push_str(&format!("\n{INDENT}enum {enum_name}\n{INDENT}{{"));
        for member in components.iter().filter_map(|c| c.enum_member(category)) {
            source.push_str(&format!("\n{INDENT}{INDENT}{member},"));
        }
        source.push_str(&format!("\n{INDENT}{INDENT}{terminator}\n{INDENT}}};"));
    }

    source
}
