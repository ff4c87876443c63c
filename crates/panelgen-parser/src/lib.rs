//! # Panelgen Parser
//!
//! Reads an SVG panel and extracts the component placeholders drawn on its
//! `components` layer.
//!
//! ## Usage
//!
//! ```
//! # use panelgen_parser::{parse_panel, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r##"
//!         <svg xmlns="http://www.w3.org/2000/svg" height="128.5mm">
//!             <g id="components">
//!                 <rect id="Gain" x="2" y="3" width="4" height="4" fill="#ff0000"/>
//!             </g>
//!         </svg>
//!     "##;
//!
//!     let extraction = parse_panel(source)?;
//!     assert_eq!(extraction.elements().len(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;

mod document;
mod extract;
mod span;

pub use document::{COMPONENTS_LAYER, PanelDocument};
pub use error::ParseError;
pub use extract::PanelExtraction;
pub use span::Span;

use log::info;

/// Parse panel source text into its raw component placements.
///
/// The pipeline is:
///
/// 1. **Parse** - Read the XML document and resolve the millimeter scale
/// 2. **Locate** - Find the `components` layer
/// 3. **Extract** - Read geometry, label and color of every direct child
///
/// Elements that cannot be used are skipped and reported through
/// [`PanelExtraction::warnings`].
///
/// # Errors
///
/// Returns a [`ParseError`] if the document is not well-formed XML or has no
/// components layer.
pub fn parse_panel(source: &str) -> Result<PanelExtraction, ParseError> {
    let document = PanelDocument::parse(source)?;
    let extraction = extract::extract(&document)?;

    info!(
        elements = extraction.elements().len(),
        skipped = extraction.warnings().len();
        "Panel extracted"
    );

    Ok(extraction)
}
