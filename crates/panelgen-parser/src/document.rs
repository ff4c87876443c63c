//! Parsed panel documents.
//!
//! [`PanelDocument`] wraps the XML tree of a panel together with the scale
//! factor that converts document units into millimeters.

use log::{debug, warn};
use roxmltree::{Document, Node, ParsingOptions};

use panelgen_core::geometry;

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// Namespace of SVG elements.
pub(crate) const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Namespace of Inkscape editor attributes.
pub(crate) const INKSCAPE_NS: &str = "http://www.inkscape.org/namespaces/inkscape";

/// Label of the layer holding component placeholders.
pub const COMPONENTS_LAYER: &str = "components";

/// A parsed panel document.
///
/// Created once per extraction and never modified.
#[derive(Debug)]
pub struct PanelDocument<'input> {
    doc: Document<'input>,
    scale: f64,
}

impl<'input> PanelDocument<'input> {
    /// Parses panel source text.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorCode::E001`] diagnostic if the text is not well-formed XML.
    pub fn parse(source: &'input str) -> Result<Self, Diagnostic> {
        // Illustrator exports carry the SVG 1.1 DOCTYPE.
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(source, options).map_err(|err| {
            Diagnostic::error(format!("Could not parse panel: {err}"))
                .with_code(ErrorCode::E001)
                .with_help("make sure the panel file is a valid SVG document")
        })?;

        let height = doc.root_element().attribute("height");
        if height.is_none() {
            warn!("Panel root has no height attribute, assuming 75 units per inch");
        }
        let scale = geometry::scale_for_height(height);
        debug!(height:?, scale; "Panel scale resolved");

        Ok(Self { doc, scale })
    }

    /// Returns the document unit to millimeter factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the root `<svg>` element.
    pub fn root(&self) -> Node<'_, 'input> {
        self.doc.root_element()
    }

    /// Finds the group labeled `components`.
    ///
    /// The Inkscape label is tried first across the whole document, then
    /// Illustrator's `data-name`, then a plain `id`.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorCode::E100`] diagnostic if no group matches.
    pub fn components_layer(&self) -> Result<Node<'_, 'input>, Diagnostic> {
        let groups = || {
            self.root()
                .descendants()
                .filter(|node| node.is_element() && is_svg_tag(*node, "g"))
        };

        groups()
            .find(|g| g.attribute((INKSCAPE_NS, "label")) == Some(COMPONENTS_LAYER))
            .or_else(|| groups().find(|g| g.attribute("data-name") == Some(COMPONENTS_LAYER)))
            .or_else(|| groups().find(|g| g.attribute("id") == Some(COMPONENTS_LAYER)))
            .ok_or_else(|| {
                Diagnostic::error("Could not find \"components\" layer on panel")
                    .with_code(ErrorCode::E100)
                    .with_label(node_span(self.root()), "no components layer in this document")
                    .with_help(
                        "add a layer or group named `components` (Inkscape label, `data-name`, or `id`)",
                    )
            })
    }
}

/// Returns `true` if `node` is an SVG (or un-namespaced) element named `name`.
pub(crate) fn is_svg_tag(node: Node<'_, '_>, name: &str) -> bool {
    let tag = node.tag_name();
    tag.name() == name && matches!(tag.namespace(), None | Some(SVG_NS))
}

/// Resolves an element's label: Inkscape label, then `data-name`, then `id`.
pub(crate) fn element_label<'a>(node: Node<'a, '_>) -> &'a str {
    node.attribute((INKSCAPE_NS, "label"))
        .filter(|label| !label.is_empty())
        .or_else(|| node.attribute("data-name").filter(|label| !label.is_empty()))
        .or_else(|| node.attribute("id").filter(|label| !label.is_empty()))
        .unwrap_or("")
}

/// Returns the span of a node in the source.
pub(crate) fn node_span(node: Node<'_, '_>) -> Span {
    Span::new(node.range())
}
