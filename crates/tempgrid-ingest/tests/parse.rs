//! Integration tests for row parsing.

use chrono::NaiveDate;

use tempgrid_ingest::{
    detect_columns, parse_date, parse_observation, parse_observations, parse_temperature,
};
use tempgrid_model::{ColumnMapping, RawRecord};

fn record(pairs: &[(&str, &str)]) -> RawRecord {
    pairs.iter().copied().collect()
}

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

#[test]
fn test_parse_date_formats() {
    assert_eq!(parse_date("2020-01-02"), ymd(2020, 1, 2));
    assert_eq!(parse_date(" 2020/01/02 "), ymd(2020, 1, 2));
    assert_eq!(parse_date("01/02/2020"), ymd(2020, 1, 2));
    assert_eq!(parse_date("2020-01-02T06:00:00"), ymd(2020, 1, 2));
    assert_eq!(parse_date("2020-01-02 06:00"), ymd(2020, 1, 2));
    assert_eq!(parse_date("2020-01-02T06:00:00Z"), ymd(2020, 1, 2));
    assert_eq!(parse_date("2 Jan 2020"), ymd(2020, 1, 2));
    assert_eq!(parse_date("January 2, 2020"), ymd(2020, 1, 2));
}

#[test]
fn test_parse_date_fallback_prefix() {
    assert_eq!(parse_date("2020-01-02 (provisional)"), ymd(2020, 1, 2));
}

#[test]
fn test_parse_date_rejects_garbage() {
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("not a date"), None);
    assert_eq!(parse_date("2020-02-30"), None);
}

#[test]
fn test_parse_temperature() {
    assert_eq!(parse_temperature(Some("12.5")), Some(12.5));
    assert_eq!(parse_temperature(Some(" -3 ")), Some(-3.0));
    assert_eq!(parse_temperature(Some("")), None);
    assert_eq!(parse_temperature(Some("N/A")), None);
    assert_eq!(parse_temperature(Some("NaN")), None);
    assert_eq!(parse_temperature(Some("inf")), None);
    assert_eq!(parse_temperature(None), None);
}

#[test]
fn max_min_columns_map_independently() {
    let row = record(&[("Date", "2020-01-01"), ("TMAX", "10"), ("TMIN", "")]);
    let mapping = detect_columns(&row);
    let obs = parse_observation(&row, &mapping).expect("valid row");
    assert_eq!(obs.year, 2020);
    assert_eq!(obs.month, 0);
    assert_eq!(obs.tmax, Some(10.0));
    assert_eq!(obs.tmin, None);
}

#[test]
fn single_column_feeds_both_series() {
    let row = record(&[("Date", "2020-06-15"), ("Temperature", "21.4")]);
    let mapping = detect_columns(&row);
    let obs = parse_observation(&row, &mapping).expect("valid row");
    assert_eq!(obs.month, 5);
    assert_eq!(obs.tmax, Some(21.4));
    assert_eq!(obs.tmin, Some(21.4));
}

#[test]
fn not_available_text_yields_null_temperatures() {
    let row = record(&[("Date", "2020-01-01"), ("Temperature", "N/A")]);
    let mapping = detect_columns(&row);
    let obs = parse_observation(&row, &mapping).expect("valid row");
    assert_eq!(obs.tmax, None);
    assert_eq!(obs.tmin, None);
}

#[test]
fn unresolved_mapping_yields_null_temperatures() {
    let row = record(&[("day", "2020-01-01"), ("station", "X1")]);
    let mapping = detect_columns(&row);
    let obs = parse_observation(&row, &mapping).expect("valid row");
    assert_eq!(obs.tmax, None);
    assert_eq!(obs.tmin, None);
}

#[test]
fn missing_date_key_drops_row() {
    let row = record(&[("Date", "2020-01-01")]);
    assert!(parse_observation(&row, &ColumnMapping::default()).is_none());
}

#[test]
fn bad_dates_are_dropped_silently() {
    let rows = vec![
        record(&[("Date", "2020-01-01"), ("TMAX", "1")]),
        record(&[("Date", "garbage"), ("TMAX", "2")]),
        record(&[("Date", "2020-01-03"), ("TMAX", "3")]),
    ];
    let mapping = detect_columns(&rows[0]);
    let observations = parse_observations(&rows, &mapping);
    assert_eq!(observations.len(), 2);
    assert_eq!(observations[1].tmax, Some(3.0));
}
