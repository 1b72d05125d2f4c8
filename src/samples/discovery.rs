//! Sample file discovery and reading

use super::types::EndpointGroup;
use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Scan a directory for `*.json` sample files, grouped by endpoint
/// identifier.
///
/// The scan is not recursive. Groups come back sorted by identifier and
/// files within a group sorted by path, so processing order is stable
/// across runs. File order only affects cosmetic field ordering, never the
/// inferred field set.
pub fn discover(dir: impl AsRef<Path>) -> Result<Vec<EndpointGroup>> {
    let mut groups: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let Some(endpoint) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        groups.entry(endpoint.to_string()).or_default().push(path);
    }

    Ok(groups
        .into_iter()
        .map(|(endpoint, mut files)| {
            files.sort();
            EndpointGroup { endpoint, files }
        })
        .collect())
}

/// Read and parse one JSON sample document
pub fn read_sample(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::sample_read(path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&contents)
        .map_err(|e| Error::sample_read(path.display().to_string(), e.to_string()))
}
