//! Panelgen Core Types and Definitions
//!
//! This crate provides the foundational types shared by the panel parser and
//! the source generator. It includes:
//!
//! - **Identifiers**: Source-safe names derived from arbitrary labels ([`identifier::Identifier`])
//! - **Geometry**: Millimeter-scaled shapes found on a panel ([`geometry`] module)
//! - **Components**: Classified control placements ([`component`] module)
//! - **Catalog**: The sorted, per-category component model ([`catalog::ComponentCatalog`])

pub mod catalog;
pub mod component;
pub mod geometry;
pub mod identifier;
