//! Error and diagnostic system for the panel parser.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the panel source
//! - Severity levels separating fatal errors from skipped elements
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning with an optional code, source locations, and
//! help text. Fatal diagnostics are wrapped in [`ParseError`]; warnings are
//! returned alongside a successful extraction.
//!
//! # Example
//!
//! ```
//! # use panelgen_parser::error::{Diagnostic, ErrorCode};
//! # use panelgen_parser::Span;
//!
//! let diag = Diagnostic::warning("element `path` is not a rect, circle, or ellipse")
//!     .with_code(ErrorCode::W001)
//!     .with_label(Span::new(120..164), "skipped")
//!     .with_help("draw components as rectangles, circles, or ellipses");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
