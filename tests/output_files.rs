//! Output File Tests
//!
//! Tests for result serialization:
//! - Format follows the output file's extension
//! - Unknown diameters and absent names have fixed encodings
//! - Writers consume only what the limiter lets through

use std::fs;

use chrono::NaiveDateTime;
use neodb::catalog::Dataset;
use neodb::executor::{limit, query};
use neodb::filter::FilterSet;
use neodb::model::{ApproachEvent, AstroObject};
use neodb::write::{write_results, WriteError, CSV_FIELDS};
use serde_json::Value;

// =============================================================================
// Helper Functions
// =============================================================================

fn dataset() -> Dataset {
    let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
    Dataset::build(
        vec![
            AstroObject::new("433", Some("Eros".into()), Some(16.84), false),
            AstroObject::new("2020 BS", None, None, true),
        ],
        vec![
            ApproachEvent::new("433", at("2025-11-30 02:18"), 0.3976, 3.7289),
            ApproachEvent::new("2020 BS", at("2025-12-01 00:00"), 0.01, 12.5),
            ApproachEvent::new("433", at("2026-01-15 08:45"), 0.25, 4.0),
        ],
    )
    .unwrap()
}

// =============================================================================
// CSV Tests
// =============================================================================

/// CSV output has the fixed header and one row per result.
#[test]
fn test_write_csv_file() {
    let dataset = dataset();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");

    let all = FilterSet::new();
    let rows = write_results(query(&dataset, &all), &path).unwrap();
    assert_eq!(rows, 3);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, CSV_FIELDS);

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 3);
    assert_eq!(&records[1][3], "2020 BS");
    assert_eq!(&records[1][4], "");
    assert_eq!(&records[1][5], "nan");
    assert_eq!(&records[1][6], "True");
    assert_eq!(&records[2][0], "2026-01-15 08:45");
}

// =============================================================================
// JSON Tests
// =============================================================================

/// JSON output is an array of approaches with nested NEOs.
#[test]
fn test_write_json_file() {
    let dataset = dataset();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");

    let all = FilterSet::new();
    let rows = write_results(limit(query(&dataset, &all), Some(2)), &path).unwrap();
    assert_eq!(rows, 2);

    let parsed: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0]["datetime_utc"], "2025-11-30 02:18");
    assert_eq!(entries[0]["neo"]["name"], "Eros");
    assert_eq!(entries[0]["neo"]["diameter_km"], 16.84);
    assert_eq!(entries[0]["neo"]["potentially_hazardous"], false);

    assert_eq!(entries[1]["neo"]["name"], "");
    assert!(entries[1]["neo"]["diameter_km"].is_null());
}

/// An empty result set still produces a valid file.
#[test]
fn test_write_empty_results() {
    let dataset = Dataset::build(vec![], vec![]).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");

    let all = FilterSet::new();
    assert_eq!(write_results(query(&dataset, &all), &path).unwrap(), 0);

    let parsed: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, Value::Array(vec![]));
}

// =============================================================================
// Format Selection Tests
// =============================================================================

/// Unsupported extensions are rejected before any file is created.
#[test]
fn test_unsupported_extension() {
    let dataset = dataset();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.xml");

    let all = FilterSet::new();
    let err = write_results(query(&dataset, &all), &path).unwrap_err();
    assert!(matches!(err, WriteError::UnsupportedFormat(_)));
    assert!(!path.exists());
}
