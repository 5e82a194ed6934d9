//! Integration tests for reading CSV files from disk.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use tempgrid_ingest::{IngestError, read_csv_records};

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[test]
fn reads_all_data_rows() {
    let file = write_csv("Date,TMAX,TMIN\n2020-01-01,10,2\n2020-01-02,12,3\n");
    let records = read_csv_records(file.path()).expect("read csv");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].get("TMIN"), Some("3"));
}

#[test]
fn ragged_rows_are_tolerated() {
    let file = write_csv("Date,TMAX,TMIN\n2020-01-01,10\n2020-01-02,12,3,extra\n");
    let records = read_csv_records(file.path()).expect("read csv");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("TMIN"), Some(""));
    assert_eq!(records[1].len(), 3);
}

#[test]
fn header_only_file_is_empty() {
    let file = write_csv("Date,TMAX,TMIN\n");
    let err = read_csv_records(file.path()).expect_err("empty csv");
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
    assert!(err.to_string().starts_with("CSV file is empty"));
}

#[test]
fn zero_byte_file_is_empty() {
    let file = write_csv("");
    let err = read_csv_records(file.path()).expect_err("empty csv");
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}

#[test]
fn missing_file_is_reported() {
    let err = read_csv_records(Path::new("/nonexistent/weather.csv")).expect_err("missing");
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn non_utf8_bytes_in_unused_column_are_tolerated() {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(b"Date,NAME,TMAX,TMIN\n2020-01-01,LIMA,20,14\n2020-01-02,S\xC3O PAULO,12,3\n")
        .expect("write csv");
    let records = read_csv_records(file.path()).expect("read csv");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].get("TMAX"), Some("12"));
    assert!(records[1].get("NAME").is_some_and(|name| name.contains('\u{fffd}')));
}
