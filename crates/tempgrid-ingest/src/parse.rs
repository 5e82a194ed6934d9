//! Row parsing: raw text fields into [`DailyObservation`]s.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

use tempgrid_model::{ColumnMapping, DailyObservation, RawRecord};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %b %Y",
    "%b %d %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Length of the `YYYY-MM-DD` fallback pattern.
const ISO_DATE_LEN: usize = 10;

/// Parse a calendar date from loosely formatted text.
///
/// Tries RFC 3339, common date-time layouts, and common date layouts on the
/// whole text first. When none apply, falls back to a leading `YYYY-MM-DD`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_general_date(trimmed).or_else(|| parse_iso_prefix(trimmed))
}

fn parse_general_date(text: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|datetime| datetime.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        })
}

fn parse_iso_prefix(text: &str) -> Option<NaiveDate> {
    let prefix = text.get(..ISO_DATE_LEN)?;
    let shape_ok = prefix.bytes().enumerate().all(|(idx, byte)| match idx {
        4 | 7 => byte == b'-',
        _ => byte.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Parse a temperature cell. Blank, missing, or non-finite text yields `None`.
pub fn parse_temperature(text: Option<&str>) -> Option<f64> {
    let trimmed = text?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Convert one record, or `None` when its date cannot be read.
pub fn parse_observation(record: &RawRecord, mapping: &ColumnMapping) -> Option<DailyObservation> {
    let date_key = mapping.date_key.as_deref()?;
    let date = parse_date(record.get(date_key)?)?;
    let tmax = mapping
        .tmax_source()
        .and_then(|key| parse_temperature(record.get(key)));
    let tmin = mapping
        .tmin_source()
        .and_then(|key| parse_temperature(record.get(key)));
    Some(DailyObservation::new(date, tmax, tmin))
}

/// Convert all records, silently dropping rows with unreadable dates.
pub fn parse_observations(records: &[RawRecord], mapping: &ColumnMapping) -> Vec<DailyObservation> {
    let observations: Vec<DailyObservation> = records
        .iter()
        .filter_map(|record| parse_observation(record, mapping))
        .collect();
    let dropped = records.len() - observations.len();
    if dropped > 0 {
        debug!(dropped, "skipped rows with unparseable dates");
    }
    observations
}
