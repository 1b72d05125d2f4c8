//! Schema output module
//!
//! Writes finalized schemas to disk: one pretty-printed file per endpoint
//! plus one combined document covering the whole run.

mod writer;

pub use writer::{SchemaWriter, COMBINED_FILE};
