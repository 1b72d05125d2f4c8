//! Batch processing pipeline

use super::types::{EndpointSchema, SchemaDocument, TypeTally};
use crate::annotate::annotate;
use crate::classify::classify;
use crate::infer::SchemaBuilder;
use crate::naming::schema_name;
use crate::normalize::normalize;
use crate::samples::{read_sample, EndpointGroup};
use serde_json::json;
use tracing::{debug, warn};

/// Drives the inference pipeline over endpoint groups.
///
/// Each group is a pure function of its own sample set; the only
/// cross-group state is the append-only combined map in the document.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    detect_formats: bool,
}

impl BatchProcessor {
    /// Create a processor with format detection disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable string format detection during inference
    #[must_use]
    pub fn with_format_detection(mut self, enabled: bool) -> Self {
        self.detect_formats = enabled;
        self
    }

    /// Process every group, producing the run document and type tally.
    ///
    /// Groups are processed in the order given; `samples::discover`
    /// returns them sorted by endpoint identifier for determinism.
    /// Unreadable or malformed samples are skipped with a warning and
    /// never abort the batch.
    pub fn process(&self, groups: &[EndpointGroup]) -> (SchemaDocument, TypeTally) {
        let mut document = SchemaDocument::new();
        let mut tally = TypeTally::new();

        for group in groups {
            let entry = self.process_group(group);
            tally.bump(entry.response_type);

            let name = entry.name.clone();
            if document.record(entry) {
                debug!(
                    endpoint = %group.endpoint,
                    name = %name,
                    "schema name collision, combined entry overwritten"
                );
            }
        }

        (document, tally)
    }

    /// Infer, normalize, classify, annotate, and name one endpoint's
    /// schema.
    ///
    /// A group whose samples are all invalid still yields a schema, built
    /// from the generic object seed alone.
    pub fn process_group(&self, group: &EndpointGroup) -> EndpointSchema {
        let mut builder = SchemaBuilder::new().with_format_detection(self.detect_formats);
        builder.add_schema(&json!({ "type": "object" }));

        for path in &group.files {
            match read_sample(path) {
                Ok(value) => builder.add_value(&value),
                Err(e) => warn!("skipping sample: {e}"),
            }
        }

        let schema = normalize(builder.to_schema());
        let response_type = classify(&schema);
        let schema = annotate(schema, &group.endpoint, response_type);

        EndpointSchema {
            endpoint: group.endpoint.clone(),
            name: schema_name(&group.endpoint),
            response_type,
            schema,
        }
    }
}
