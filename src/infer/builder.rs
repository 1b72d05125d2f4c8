//! Incremental schema builder

use super::node::SchemaNode;
use serde_json::{json, Map, Value};

/// Marker inserted at the root of every emitted schema.
const SCHEMA_MARKER: &str = "http://json-schema.org/schema#";

/// Incremental JSON Schema builder.
///
/// Seed it with schema fragments, feed it JSON value instances, then call
/// [`to_schema`](Self::to_schema) to emit one schema describing the union of
/// everything observed. Incompatible structural alternatives come out as an
/// `anyOf` list; bare scalar alternatives collapse into a `type` list.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    root: SchemaNode,
    detect_formats: bool,
}

impl SchemaBuilder {
    /// Create an empty builder with format detection disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable string format detection
    #[must_use]
    pub fn with_format_detection(mut self, enabled: bool) -> Self {
        self.detect_formats = enabled;
        self
    }

    /// Seed the builder with an existing schema fragment.
    ///
    /// Supported keys: `type` (string or list), `properties`, `required`,
    /// `items`, `anyOf`, `format`. Anything else is ignored. Seeding
    /// `{"type": "object"}` activates the object shape with no observed
    /// fields.
    pub fn add_schema(&mut self, schema: &Value) {
        self.root.seed(schema);
    }

    /// Observe one JSON value instance
    pub fn add_value(&mut self, value: &Value) {
        self.root.observe(value, self.detect_formats);
    }

    /// Emit the unified schema observed so far.
    ///
    /// The root carries a `$schema` marker; an empty builder emits the
    /// marker alone.
    pub fn to_schema(&self) -> Value {
        match self.root.to_value() {
            Value::Object(map) => {
                let mut root = Map::new();
                root.insert("$schema".to_string(), json!(SCHEMA_MARKER));
                root.extend(map);
                Value::Object(root)
            }
            other => other,
        }
    }
}
