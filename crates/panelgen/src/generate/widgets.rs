use panelgen_core::{
    catalog::ComponentCatalog,
    component::{Category, ComponentElement},
    geometry::Point,
};

use super::mm;
use crate::config::GeneratorConfig;

const INDENT: &str = "        ";

/// Returns the `(add, create)` call names used to place a component.
fn placement_calls(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Param => ("addParam", "createParam"),
        Category::Input => ("addInput", "createInput"),
        Category::Output => ("addOutput", "createOutput"),
        Category::Light => ("addChild", "createLight"),
        Category::Widget => ("addChild", "createWidget"),
    }
}

/// Renders the widget placement calls for every classified component.
///
/// Rectangles are positioned by their top-left corner, ellipses by their
/// center using the `Centered` factory. A blank line separates categories.
pub fn add_widgets(catalog: &ComponentCatalog, config: &GeneratorConfig) -> String {
    let mut source = String::new();

    for (category, components) in catalog.iter() {
        if components.is_empty() {
            continue;
        }
        source.push('\n');
        for component in components {
            placement(&mut source, category, component, config);
        }
    }

    source
}

fn placement(
    source: &mut String,
    category: Category,
    component: &ComponentElement,
    config: &GeneratorConfig,
) {
    let (add, create) = placement_calls(category);
    let class = component
        .override_class()
        .unwrap_or_else(|| config.default_class(category));
    let shape = component.shape();

    let (position, centered) = match shape.top_left() {
        Some(top_left) => (top_left, ""),
        None => (shape.center(), "Centered"),
    };
    let vec = vec_literal(position);

    match (component.enum_member(category), shape.size()) {
        (Some(member), _) => {
            source.push_str(&format!(
                "\n{INDENT}{add}({create}{centered}<{class}>({vec}, module, Comp::{member}));"
            ));
        }
        (None, size) => {
            if let Some((width, height)) = size {
                source.push_str(&format!("\n{INDENT}// mm2px(Vec({}, {}))", mm(width), mm(height)));
            }
            source.push_str(&format!("\n{INDENT}{add}({create}{centered}<{class}>({vec}));"));
        }
    }
}

fn vec_literal(point: Point) -> String {
    format!("mm2px(Vec({}, {}))", mm(point.x()), mm(point.y()))
}

#[cfg(test)]
mod tests {
    use panelgen_core::geometry::Shape;
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog(elements: Vec<ComponentElement>) -> ComponentCatalog {
        ComponentCatalog::classify(elements)
    }

    #[test]
    fn test_rect_param_uses_top_left() {
        let catalog = catalog(vec![ComponentElement::new(
            "Gain",
            None,
            Shape::rect(2.0, 3.0, 4.0, 4.0, 1.0),
            "#ff0000",
        )]);

        assert_eq!(
            add_widgets(&catalog, &GeneratorConfig::default()),
            "\n\n        addParam(createParam<sspo::Knob>(mm2px(Vec(2.0, 3.0)), module, Comp::GAIN_PARAM));"
        );
    }

    #[test]
    fn test_ellipse_uses_centered_form() {
        let catalog = catalog(vec![ComponentElement::new(
            "in",
            None,
            Shape::ellipse(7.5873, 26.3881, 1.0),
            "lime",
        )]);

        assert_eq!(
            add_widgets(&catalog, &GeneratorConfig::default()),
            "\n\n        addInput(createInputCentered<sspo::PJ301MPort>(mm2px(Vec(7.587, 26.388)), module, Comp::IN_INPUT));"
        );
    }

    #[test]
    fn test_override_class_wins() {
        let catalog = catalog(vec![ComponentElement::new(
            "level",
            Some("sspo::LargeKnob".to_string()),
            Shape::ellipse(1.0, 1.0, 1.0),
            "red",
        )]);

        let source = add_widgets(&catalog, &GeneratorConfig::default());
        assert!(source.contains("createParamCentered<sspo::LargeKnob>"));
    }

    #[test]
    fn test_lights_and_widgets() {
        let catalog = catalog(vec![
            ComponentElement::new("clip", None, Shape::ellipse(3.0, 4.0, 1.0), "magenta"),
            ComponentElement::new("screen", None, Shape::rect(1.0, 2.0, 20.0, 10.0, 1.0), "yellow"),
            ComponentElement::new("logo", None, Shape::ellipse(5.0, 100.0, 1.0), "#ff0"),
        ]);

        assert_eq!(
            add_widgets(&catalog, &GeneratorConfig::default()),
            "\n\
             \n        addChild(createLightCentered<SmallLight<GreenLight>>(mm2px(Vec(3.0, 4.0)), module, Comp::CLIP_LIGHT));\
             \n\
             \n        // mm2px(Vec(20.0, 10.0))\
             \n        addChild(createWidget<Widget>(mm2px(Vec(1.0, 2.0))));\
             \n        addChild(createWidgetCentered<Widget>(mm2px(Vec(5.0, 100.0))));"
        );
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(add_widgets(&ComponentCatalog::default(), &GeneratorConfig::default()), "");
    }
}
