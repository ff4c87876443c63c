//! Error codes for the panel diagnostic system.
//!
//! Codes are organized by phase:
//! - `E0xx` - Document errors
//! - `E1xx` - Layer lookup errors
//! - `W0xx` - Per-element warnings

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Malformed XML.
    ///
    /// The panel file could not be parsed as an XML document.
    E001,

    // =========================================================================
    // Layer Errors (E1xx)
    // =========================================================================
    /// Components layer not found.
    ///
    /// No `<g>` element is labeled `components` by its Inkscape label,
    /// `data-name`, or `id` attribute.
    E100,

    // =========================================================================
    // Element Warnings (W0xx)
    // =========================================================================
    /// Unsupported shape.
    ///
    /// An element of the components layer is not a `rect`, `circle`, or `ellipse`.
    W001,

    /// Missing color.
    ///
    /// Neither a `fill` attribute nor a `fill:` style declaration with a
    /// six-digit hex color was found.
    W002,

    /// Invalid geometry.
    ///
    /// A required coordinate attribute is missing or is not a number.
    W003,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::W001 => "W001",
            ErrorCode::W002 => "W002",
            ErrorCode::W003 => "W003",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed panel document",
            ErrorCode::E100 => "components layer not found",
            ErrorCode::W001 => "unsupported shape",
            ErrorCode::W002 => "missing color",
            ErrorCode::W003 => "invalid geometry",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
