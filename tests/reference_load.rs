// tests/reference_load.rs
//
// Loader behaviour against files on disk.
//
mod common;

use std::fs;

use serde_json::Value;
use school_audit::reference::{self, Field};
use school_audit::AuditError;

use common::*;

#[test]
fn every_record_round_trips_unchanged() {
    let dir = tmp_dir("round_trip");
    let path = dir.join("export.json");
    let source = r#"{
        "a": { "phone": "123", "name": "A School", "ages": [3, 18], "verified": true },
        "b": { "ibAverage": "35.2", "website": "https://b.example" },
        "c": {}
    }"#;
    fs::write(&path, source).unwrap();

    let set = reference::load(&path).unwrap();
    let original: Value = serde_json::from_str(source).unwrap();
    let original = original.as_object().unwrap();

    assert_eq!(set.len(), original.len());
    for (slug, record) in &set {
        let back = serde_json::to_value(record).unwrap();
        assert_eq!(&back, &original[slug], "record {slug} changed");
    }
}

#[test]
fn known_fields_read_back() {
    let dir = tmp_dir("typed");
    let path = dir.join("export.json");
    fs::write(&path, REFERENCE).unwrap();

    let set = reference::load(&path).unwrap();
    assert_eq!(set["alpha-school"].text(Field::HeadName), Some("Ann Lee"));
    assert_eq!(set["gamma-school"].text(Field::IbPassRate), Some("97%"));
    assert_eq!(set["gamma-school"].0.len(), 3);
}

#[test]
fn absent_file_fails_without_partial_load() {
    let dir = tmp_dir("absent");
    let err = reference::load(&dir.join("nope.json")).unwrap_err();
    assert!(matches!(err, AuditError::Io { .. }));
}

#[test]
fn wrong_shape_is_parse_error() {
    let dir = tmp_dir("shape");
    let path = dir.join("export.json");
    fs::write(&path, r#"{ "a": "not an object" }"#).unwrap();
    let err = reference::load(&path).unwrap_err();
    assert!(matches!(err, AuditError::Parse { .. }));
    assert!(err.to_string().starts_with("malformed reference data in "));
}

#[test]
fn numbers_and_repeated_columns_load() {
    let dir = tmp_dir("lenient");
    let path = dir.join("export.json");
    fs::write(&path, r#"{ "a": { "phone": 62211234 }, "b": { "phone": "1", "phone": "2" } }"#).unwrap();

    let set = reference::load(&path).unwrap();
    assert_eq!(set["a"].get(Field::Phone), Some(&Value::from(62211234)));
    assert_eq!(set["b"].text(Field::Phone), Some("2"));
}
