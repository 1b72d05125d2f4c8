//! Classification tests

use super::*;
use serde_json::{json, Value};
use test_case::test_case;

fn object_with_keys(keys: &[&str]) -> Value {
    let properties: serde_json::Map<String, Value> = keys
        .iter()
        .map(|key| ((*key).to_string(), json!({ "type": "string" })))
        .collect();
    json!({ "type": "object", "properties": properties })
}

#[test_case(&["data", "links", "meta"], ResponseType::Pagination; "pagination shape")]
#[test_case(&["data", "links", "meta", "extra"], ResponseType::Pagination; "pagination with extras")]
#[test_case(&["type", "title", "status"], ResponseType::Error; "error shape")]
#[test_case(&["type", "title", "status", "detail", "instance"], ResponseType::Error; "full problem details")]
#[test_case(&["message"], ResponseType::Message; "bare message")]
#[test_case(&["message", "code"], ResponseType::Message; "message with code")]
#[test_case(&["message", "code", "hint"], ResponseType::Object; "too rich for message")]
#[test_case(&["id", "name"], ResponseType::Object; "plain object")]
#[test_case(&[], ResponseType::Object; "empty properties")]
fn test_classify_by_properties(keys: &[&str], expected: ResponseType) {
    assert_eq!(classify(&object_with_keys(keys)), expected);
}

#[test]
fn test_array_type() {
    let schema = json!({ "type": "array", "items": { "type": "integer" } });
    assert_eq!(classify(&schema), ResponseType::Array);
}

#[test]
fn test_missing_properties_falls_back_to_object() {
    assert_eq!(classify(&json!({ "type": "object" })), ResponseType::Object);
    assert_eq!(classify(&json!({})), ResponseType::Object);
}

#[test]
fn test_pagination_beats_error() {
    // Adversarial overlap: both pagination and error keys present.
    // Rule order, not just shape, decides the tag.
    let schema = object_with_keys(&["data", "links", "meta", "type", "title", "status"]);
    assert_eq!(classify(&schema), ResponseType::Pagination);
}

#[test]
fn test_array_with_message_property_is_message() {
    // Property rules run before the top-level type rule
    let schema = json!({
        "type": "array",
        "properties": { "message": { "type": "string" } }
    });
    assert_eq!(classify(&schema), ResponseType::Message);
}

#[test]
fn test_response_type_serde_tags() {
    for response_type in ResponseType::ALL {
        let tag = serde_json::to_value(response_type).unwrap();
        assert_eq!(tag, json!(response_type.as_str()));
    }
}
