//! Schema metadata annotation
//!
//! Attaches descriptive metadata to a finalized schema: a human-readable
//! description, the endpoint the schema was inferred from, and the detected
//! response type. Pagination shapes additionally get field-level
//! descriptions on their `links`, `meta`, and `data` members.

use crate::classify::ResponseType;
use serde_json::{json, Value};

/// Field-level descriptions attached to pagination schemas
const PAGINATION_FIELDS: &[(&str, &str)] = &[
    ("links", "Navigation links for cursor-based pagination"),
    (
        "meta",
        "Pagination metadata including counts and field specifications",
    ),
    ("data", "Array of result objects"),
];

/// Description written onto every schema, keyed by response type
fn description_for(response_type: ResponseType) -> &'static str {
    match response_type {
        ResponseType::Pagination => "Paginated list response with cursor navigation",
        ResponseType::Error => "RFC 9457 Problem Details error response",
        ResponseType::Message => "Simple message response",
        ResponseType::Array => "Array response",
        ResponseType::Object => "Object response",
    }
}

/// Attach metadata to a normalized schema and return the annotated value.
///
/// The input is consumed; the return value is the authoritative schema.
/// Any description already present at the top level is overwritten. For
/// pagination shapes, sub-property descriptions are set where the property
/// exists; missing sub-properties are skipped, not an error.
pub fn annotate(mut schema: Value, endpoint: &str, response_type: ResponseType) -> Value {
    if let Some(map) = schema.as_object_mut() {
        map.insert(
            "description".to_string(),
            json!(description_for(response_type)),
        );
        map.insert("x-inferred-from".to_string(), json!(endpoint));
        map.insert("x-response-type".to_string(), json!(response_type.as_str()));

        if response_type == ResponseType::Pagination {
            if let Some(Value::Object(properties)) = map.get_mut("properties") {
                for (field, text) in PAGINATION_FIELDS {
                    if let Some(Value::Object(property)) = properties.get_mut(*field) {
                        property.insert("description".to_string(), json!(text));
                    }
                }
            }
        }
    }

    schema
}
