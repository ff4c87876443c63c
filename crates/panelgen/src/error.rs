//! Error types for panelgen operations.
//!
//! This module provides the main error type [`PanelgenError`] which wraps
//! the error conditions that can occur while scaffolding a module.

use std::{io, path::PathBuf};

use thiserror::Error;

use panelgen_core::identifier::SlugError;
use panelgen_parser::error::ParseError;

use crate::{aggregator::PatchError, registry::RegistryError};

/// The main error type for panelgen operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the panel source next to the structured
/// diagnostics so that callers can render labelled snippets.
#[derive(Debug, Error)]
pub enum PanelgenError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error(transparent)]
    Slug(#[from] SlugError),

    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Panel not found at {}.", .0.display())]
    PanelNotFound(PathBuf),
}

impl PanelgenError {
    /// Create a new `Parse` error with the associated panel source.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
