use panelgen_core::{catalog::ComponentCatalog, component::Category, identifier::Identifier};

use super::float_literal;
use crate::config::GeneratorConfig;

const INDENT: &str = "        ";

/// Renders one `case` entry per parameter for the composite's descriptor switch.
///
/// Bounds and default value come from `config`; the display name is the
/// component name and the unit is left blank.
pub fn case_param_descriptions(
    identifier: &Identifier,
    catalog: &ComponentCatalog,
    config: &GeneratorConfig,
) -> String {
    let (min, max, default) = config.param_bounds();
    let (min, max, default) = (float_literal(min), float_literal(max), float_literal(default));
    let mut source = String::new();

    for component in catalog.params() {
        let Some(member) = component.enum_member(Category::Param) else {
            continue;
        };
        source.push_str(&format!(
            "case {identifier}Comp<TBase>::{member}:\n\
             {INDENT}    ret = {{{min}, {max}, {default}, \"{name}\", \" \", 0.0f, 1.0f, 0.0f }};\n\
             {INDENT}    break;\n\n{INDENT}",
            name = component.name(),
        ));
    }

    source
}
