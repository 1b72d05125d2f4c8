//! Batch processing module
//!
//! Drives the full pipeline over endpoint groups: infer, normalize,
//! classify, annotate, name, and assemble the per-run [`SchemaDocument`]
//! with its [`TypeTally`].

mod processor;
mod types;

pub use processor::BatchProcessor;
pub use types::{EndpointSchema, SchemaDocument, TypeTally};

#[cfg(test)]
mod tests;
