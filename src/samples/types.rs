//! Sample grouping types

use std::path::PathBuf;

/// All sample files observed for one endpoint identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointGroup {
    /// Endpoint identifier (sample file stem)
    pub endpoint: String,
    /// Sample files sharing the identifier, sorted by path
    pub files: Vec<PathBuf>,
}

impl EndpointGroup {
    /// Create a group from an identifier and its file paths
    pub fn new(endpoint: impl Into<String>, files: Vec<PathBuf>) -> Self {
        Self {
            endpoint: endpoint.into(),
            files,
        }
    }
}
