//! Sample discovery module
//!
//! Finds JSON sample files on disk and groups them by endpoint identifier
//! (the file's base name with directory and extension stripped). Multiple
//! files sharing an identifier are multiple observed instances of the same
//! endpoint's response.

mod discovery;
mod types;

pub use discovery::{discover, read_sample};
pub use types::EndpointGroup;

#[cfg(test)]
mod tests;
