//! Schema normalization module
//!
//! Rewrites raw inferred schemas into OpenAPI-3.0-legal trees.
//!
//! # Rules
//!
//! - **Dialect Marker**: `$schema` is dropped (not valid in OpenAPI 3.0)
//! - **Union Cleanup**: bare `{"type": "object"}` placeholders are filtered out of `anyOf`
//! - **Union Collapse**: a single surviving alternative is spliced into its parent
//! - **Recursion**: `properties`, `items`, `additionalProperties`, and union members

mod cleaner;

pub use cleaner::normalize;
