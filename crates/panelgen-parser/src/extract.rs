//! Extraction of component placements from the components layer.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;
use roxmltree::Node;

use panelgen_core::{component::ComponentElement, geometry::Shape};

use crate::{
    document::{PanelDocument, element_label, is_svg_tag, node_span},
    error::{Diagnostic, ErrorCode},
};

/// Matches a six-digit hex color in a `fill:` style declaration.
static FILL_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"fill:\S*(#[0-9a-fA-F]{6})").expect("fill style pattern is a valid regex")
});

/// Result of extracting components from a panel.
///
/// Elements are in document order and not yet classified. Warnings describe
/// elements that were skipped.
#[derive(Debug)]
pub struct PanelExtraction {
    scale: f64,
    elements: Vec<ComponentElement>,
    warnings: Vec<Diagnostic>,
}

impl PanelExtraction {
    /// Returns the document unit to millimeter factor used for extraction.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the extracted components.
    pub fn elements(&self) -> &[ComponentElement] {
        &self.elements
    }

    /// Returns diagnostics for skipped elements.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Consumes the extraction, returning its components.
    pub fn into_elements(self) -> Vec<ComponentElement> {
        self.elements
    }
}

/// Walks the components layer and extracts every usable element.
///
/// # Errors
///
/// Returns a diagnostic if the document has no components layer. Problems
/// with individual elements are collected as warnings instead.
pub(crate) fn extract(document: &PanelDocument<'_>) -> Result<PanelExtraction, Diagnostic> {
    let layer = document.components_layer()?;
    let scale = document.scale();

    let mut elements = Vec::new();
    let mut warnings = Vec::new();

    for node in layer.children().filter(Node::is_element) {
        match extract_element(node, scale) {
            Ok(element) => {
                debug!(
                    name = element.name().as_str(),
                    color = element.color();
                    "Extracted component"
                );
                elements.push(element);
            }
            Err(diag) => {
                let diag = diag.with_secondary_label(node_span(layer), "in this layer");
                warn!("{diag}");
                warnings.push(diag);
            }
        }
    }

    Ok(PanelExtraction {
        scale,
        elements,
        warnings,
    })
}

/// Extracts one component, or explains why it was skipped.
fn extract_element(node: Node<'_, '_>, scale: f64) -> Result<ComponentElement, Diagnostic> {
    let label = element_label(node);
    let (name, override_class) = match label.split_once('#') {
        Some((name, class)) => (name, Some(class.to_string())),
        None => (label, None),
    };

    let shape = extract_shape(node, name, scale)?;

    let color = extract_color(node).ok_or_else(|| {
        Diagnostic::warning(format!("Cannot get color of component `{name}`"))
            .with_code(ErrorCode::W002)
            .with_label(node_span(node), "no fill color")
            .with_help("set a `fill` attribute or a `fill:#rrggbb` style")
    })?;

    Ok(ComponentElement::new(name, override_class, shape, color))
}

fn extract_shape(node: Node<'_, '_>, name: &str, scale: f64) -> Result<Shape, Diagnostic> {
    if is_svg_tag(node, "rect") {
        let [x, y, width, height] = numeric_attributes(node, name, ["x", "y", "width", "height"])?;
        Ok(Shape::rect(x, y, width, height, scale))
    } else if is_svg_tag(node, "circle") || is_svg_tag(node, "ellipse") {
        let [cx, cy] = numeric_attributes(node, name, ["cx", "cy"])?;
        Ok(Shape::ellipse(cx, cy, scale))
    } else {
        let tag = node.tag_name().name();
        Err(
            Diagnostic::warning(format!(
                "Element `{tag}` in components layer is not rect, circle, or ellipse"
            ))
            .with_code(ErrorCode::W001)
            .with_label(node_span(node), "skipped")
            .with_help("draw component placeholders as rectangles, circles, or ellipses"),
        )
    }
}

fn numeric_attributes<const N: usize>(
    node: Node<'_, '_>,
    name: &str,
    attributes: [&str; N],
) -> Result<[f64; N], Diagnostic> {
    let mut values = [0.0; N];
    for (value, attribute) in values.iter_mut().zip(attributes) {
        *value = node
            .attribute(attribute)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .ok_or_else(|| {
                Diagnostic::warning(format!(
                    "Component `{name}` has a missing or non-numeric `{attribute}` attribute"
                ))
                .with_code(ErrorCode::W003)
                .with_label(node_span(node), "invalid geometry")
            })?;
    }
    Ok(values)
}

/// Resolves the fill color from the `fill` attribute or the inline style.
fn extract_color(node: Node<'_, '_>) -> Option<String> {
    if let Some(fill) = node.attribute("fill").filter(|fill| !fill.is_empty()) {
        return Some(fill.to_lowercase());
    }

    let style = node.attribute("style")?;
    FILL_STYLE
        .captures(style)
        .and_then(|captures| captures.get(1))
        .map(|color| color.as_str().to_lowercase())
}
