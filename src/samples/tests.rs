//! Sample discovery tests

use super::*;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_discover_groups_by_stem() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("users.json"), "{}").unwrap();
    fs::write(dir.path().join("users.2.json"), "{}").unwrap();
    fs::write(dir.path().join("orders.json"), "{}").unwrap();

    let groups = discover(dir.path()).unwrap();

    assert_eq!(groups.len(), 3);
    // Sorted by identifier
    assert_eq!(groups[0].endpoint, "orders");
    assert_eq!(groups[1].endpoint, "users");
    assert_eq!(groups[2].endpoint, "users.2");
}

#[test]
fn test_discover_ignores_non_json() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("users.json"), "{}").unwrap();
    fs::write(dir.path().join("notes.txt"), "x").unwrap();
    fs::write(dir.path().join("README.md"), "x").unwrap();

    let groups = discover(dir.path()).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].endpoint, "users");
}

#[test]
fn test_discover_is_not_recursive() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("deep.json"), "{}").unwrap();
    fs::write(dir.path().join("top.json"), "{}").unwrap();

    let groups = discover(dir.path()).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].endpoint, "top");
}

#[test]
fn test_discover_empty_dir() {
    let dir = tempdir().unwrap();
    let groups = discover(dir.path()).unwrap();
    assert!(groups.is_empty());
}

#[test]
fn test_discover_missing_dir_errors() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(discover(&missing).is_err());
}

#[test]
fn test_read_sample() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("users.json");
    fs::write(&path, r#"{"id": 1}"#).unwrap();

    assert_eq!(read_sample(&path).unwrap(), json!({"id": 1}));
}

#[test]
fn test_read_sample_malformed_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{not json").unwrap();

    assert!(read_sample(&path).is_err());
}
