//! # oas-infer
//!
//! Infer OpenAPI 3.0 schema definitions from directories of captured JSON
//! API response samples.
//!
//! ## Features
//!
//! - **Schema Inference**: Unify any number of JSON instances into one schema
//! - **OpenAPI Normalization**: Rewrite inferred schemas into OpenAPI-3.0-legal trees
//! - **Response Classification**: Tag each schema as pagination, error, message, array, or object
//! - **Stable Naming**: Deterministic PascalCase schema names derived from endpoint identifiers
//! - **Batch Output**: Per-endpoint schema files plus one combined document
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oas_infer::batch::BatchProcessor;
//! use oas_infer::samples;
//!
//! fn main() -> oas_infer::Result<()> {
//!     let groups = samples::discover("samples")?;
//!     let (document, tally) = BatchProcessor::new().process(&groups);
//!
//!     for entry in &document.entries {
//!         println!("{} -> {} ({})", entry.endpoint, entry.name, entry.response_type);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        BatchProcessor                           │
//! │  discover(dir) → EndpointGroups → SchemaDocument + TypeTally    │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │  Infer   │ Normalize │   Classify    │  Annotate │   Output    │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ Objects  │ $schema   │ Pagination    │ Describe  │ Per-endpoint│
//! │ Arrays   │ anyOf     │ Error         │ Provenance│ Combined    │
//! │ Scalars  │ Splice    │ Message       │ Tag       │             │
//! │ Formats  │ Recurse   │ Array/Object  │           │             │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for oas-infer
pub mod error;

/// JSON Schema inference from value instances
pub mod infer;

/// OpenAPI 3.0 schema normalization
pub mod normalize;

/// Response shape classification
pub mod classify;

/// Schema metadata annotation
pub mod annotate;

/// Schema name generation
pub mod naming;

/// Sample file discovery and grouping
pub mod samples;

/// Batch processing over endpoint groups
pub mod batch;

/// Schema file output
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

// Re-export commonly used types
pub use batch::{BatchProcessor, EndpointSchema, SchemaDocument, TypeTally};
pub use classify::ResponseType;
pub use infer::SchemaBuilder;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
