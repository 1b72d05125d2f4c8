//! Batch processing tests

use super::*;
use crate::classify::ResponseType;
use crate::samples::EndpointGroup;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn write_sample(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_process_single_endpoint() {
    let dir = tempdir().unwrap();
    let path = write_sample(&dir, "users.json", r#"{"id": 1, "name": "a"}"#);
    let groups = vec![EndpointGroup::new("users", vec![path])];

    let (document, tally) = BatchProcessor::new().process(&groups);

    assert_eq!(document.len(), 1);
    let entry = &document.entries[0];
    assert_eq!(entry.endpoint, "users");
    assert_eq!(entry.name, "UsersResponse");
    assert_eq!(entry.response_type, ResponseType::Object);
    assert_eq!(entry.schema["x-inferred-from"], json!("users"));
    assert_eq!(tally.count(ResponseType::Object), 1);
}

#[test]
fn test_multiple_samples_unify() {
    let dir = tempdir().unwrap();
    let first = write_sample(&dir, "users.json", r#"{"id": 1, "name": "a"}"#);
    let second = write_sample(&dir, "users2.json", r#"{"id": 2}"#);
    let groups = vec![EndpointGroup::new("users", vec![first, second])];

    let (document, _) = BatchProcessor::new().process(&groups);
    let schema = &document.entries[0].schema;

    // id seen in every sample, name in only one
    assert_eq!(schema["required"], json!(["id"]));
    assert_eq!(schema["properties"]["id"], json!({ "type": "integer" }));
    assert!(schema["properties"]["name"].is_object());
}

#[test]
fn test_malformed_sample_skipped() {
    let dir = tempdir().unwrap();
    let good = write_sample(&dir, "a.json", r#"{"id": 1}"#);
    let bad = write_sample(&dir, "b.json", "{not json");
    let groups = vec![EndpointGroup::new("users", vec![bad, good])];

    let (document, _) = BatchProcessor::new().process(&groups);
    let schema = &document.entries[0].schema;
    assert_eq!(schema["required"], json!(["id"]));
}

#[test]
fn test_all_samples_invalid_yields_seed_schema() {
    let dir = tempdir().unwrap();
    let bad = write_sample(&dir, "a.json", "{not json");
    let missing = dir.path().join("missing.json");
    let groups = vec![EndpointGroup::new("ghost", vec![bad, missing])];

    let (document, tally) = BatchProcessor::new().process(&groups);

    let entry = &document.entries[0];
    assert_eq!(entry.response_type, ResponseType::Object);
    assert_eq!(entry.schema["type"], json!("object"));
    assert_eq!(tally.count(ResponseType::Object), 1);
}

#[test]
fn test_pagination_sample() {
    let dir = tempdir().unwrap();
    let path = write_sample(&dir, "list.json", r#"{"data": [], "links": {}, "meta": {}}"#);
    let groups = vec![EndpointGroup::new("list", vec![path])];

    let (document, tally) = BatchProcessor::new().process(&groups);

    let entry = &document.entries[0];
    assert_eq!(entry.response_type, ResponseType::Pagination);
    let props = &entry.schema["properties"];
    assert_eq!(props["data"]["description"], json!("Array of result objects"));
    assert!(props["links"]["description"].is_string());
    assert!(props["meta"]["description"].is_string());
    assert_eq!(tally.count(ResponseType::Pagination), 1);
}

#[test]
fn test_name_collision_later_entry_wins() {
    let dir = tempdir().unwrap();
    let get = write_sample(&dir, "users_GET.json", r#"{"from": "get"}"#);
    let post = write_sample(&dir, "users_POST.json", r#"{"from": "post"}"#);
    let groups = vec![
        EndpointGroup::new("users_GET", vec![get]),
        EndpointGroup::new("users_POST", vec![post]),
    ];

    let (document, _) = BatchProcessor::new().process(&groups);

    // Both entries retained, one combined slot
    assert_eq!(document.entries.len(), 2);
    assert_eq!(document.combined.len(), 1);
    let combined = &document.combined["UsersResponse"];
    assert_eq!(combined["x-inferred-from"], json!("users_POST"));
}

#[test]
fn test_format_detection_flag_threads_through() {
    let dir = tempdir().unwrap();
    let path = write_sample(&dir, "events.json", r#"{"at": "2024-01-15T10:30:00Z"}"#);
    let groups = vec![EndpointGroup::new("events", vec![path])];

    let (plain, _) = BatchProcessor::new().process(&groups);
    assert!(plain.entries[0].schema["properties"]["at"]
        .get("format")
        .is_none());

    let (detected, _) = BatchProcessor::new()
        .with_format_detection(true)
        .process(&groups);
    assert_eq!(
        detected.entries[0].schema["properties"]["at"]["format"],
        json!("date-time")
    );
}

#[test]
fn test_tally_ordering() {
    let mut tally = TypeTally::new();
    tally.bump(ResponseType::Object);
    tally.bump(ResponseType::Object);
    tally.bump(ResponseType::Error);
    tally.bump(ResponseType::Array);
    tally.bump(ResponseType::Array);

    assert_eq!(
        tally.sorted(),
        vec![
            (ResponseType::Array, 2),
            (ResponseType::Object, 2),
            (ResponseType::Error, 1),
        ]
    );
    assert_eq!(tally.total(), 5);
}
