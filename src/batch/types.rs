//! Batch output types

use crate::classify::ResponseType;
use serde_json::Value;
use std::collections::BTreeMap;

/// One finalized per-endpoint schema
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointSchema {
    /// Endpoint identifier the schema was inferred from
    pub endpoint: String,
    /// Generated schema name
    pub name: String,
    /// Detected response shape
    pub response_type: ResponseType,
    /// Finalized (normalized and annotated) schema
    pub schema: Value,
}

/// The output of one batch run.
///
/// Built fresh each run and written to files as the terminal step. Every
/// entry also lands in the combined map; when two endpoints generate the
/// same schema name, the later entry overwrites the earlier one there
/// while both per-endpoint entries are kept (their file names differ).
#[derive(Debug, Clone, Default)]
pub struct SchemaDocument {
    /// Per-endpoint entries in processing order
    pub entries: Vec<EndpointSchema>,
    /// Combined schema name → schema map
    pub combined: BTreeMap<String, Value>,
}

impl SchemaDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry; returns true when the combined map already held
    /// the generated name
    pub fn record(&mut self, entry: EndpointSchema) -> bool {
        let replaced = self
            .combined
            .insert(entry.name.clone(), entry.schema.clone())
            .is_some();
        self.entries.push(entry);
        replaced
    }

    /// Number of per-endpoint entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no endpoint was processed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tally of response types across one run
#[derive(Debug, Clone, Default)]
pub struct TypeTally {
    counts: BTreeMap<ResponseType, usize>,
}

impl TypeTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of a response type
    pub fn bump(&mut self, response_type: ResponseType) {
        *self.counts.entry(response_type).or_insert(0) += 1;
    }

    /// Occurrences of one response type
    pub fn count(&self, response_type: ResponseType) -> usize {
        self.counts.get(&response_type).copied().unwrap_or(0)
    }

    /// Total occurrences across all types
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries ordered by count descending, ties by tag name ascending
    pub fn sorted(&self) -> Vec<(ResponseType, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(response_type, count)| (*response_type, *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
        entries
    }
}
