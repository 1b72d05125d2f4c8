//! Classification rules

use super::types::ResponseType;
use serde_json::{Map, Value};

/// Keys that mark a paginated list response
const PAGINATION_KEYS: [&str; 3] = ["data", "links", "meta"];

/// Keys that mark an RFC 9457 problem-details response
const ERROR_KEYS: [&str; 3] = ["type", "title", "status"];

/// Classify a normalized schema by its shape.
///
/// Pure function of the schema tree; endpoint names and sample contents
/// are never consulted. Rules are checked in precedence order because the
/// shapes overlap: a schema carrying both the pagination and the error
/// keys is pagination.
pub fn classify(schema: &Value) -> ResponseType {
    let no_properties = Map::new();
    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .unwrap_or(&no_properties);

    if PAGINATION_KEYS.iter().all(|key| properties.contains_key(*key)) {
        return ResponseType::Pagination;
    }

    if ERROR_KEYS.iter().all(|key| properties.contains_key(*key)) {
        return ResponseType::Error;
    }

    if properties.contains_key("message") && properties.len() <= 2 {
        return ResponseType::Message;
    }

    if schema.get("type").and_then(Value::as_str) == Some("array") {
        return ResponseType::Array;
    }

    ResponseType::Object
}
