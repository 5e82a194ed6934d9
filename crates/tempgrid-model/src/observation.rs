//! Typed daily readings and their per-month summaries.

use chrono::{Datelike, Month, NaiveDate};
use serde::Serialize;

use crate::mode::AggregateMode;

/// One parsed input row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub year: i32,
    /// Zero-based month index (January = 0).
    pub month: u32,
    pub tmax: Option<f64>,
    pub tmin: Option<f64>,
}

impl DailyObservation {
    pub fn new(date: NaiveDate, tmax: Option<f64>, tmin: Option<f64>) -> Self {
        Self {
            date,
            year: date.year(),
            month: date.month0(),
            tmax,
            tmin,
        }
    }

    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }
}

/// One sparkline sample. `value` is `None` for a missing reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub day_of_month: u32,
    pub value: Option<f64>,
}

/// Summary of one (year, month) pair present in the data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCell {
    pub year: i32,
    /// Zero-based month index (January = 0).
    pub month: u32,
    /// Observations sorted by date ascending.
    pub days: Vec<DailyObservation>,
    pub month_max: Option<f64>,
    pub month_min: Option<f64>,
    pub max_series: Vec<SeriesPoint>,
    pub min_series: Vec<SeriesPoint>,
}

impl MonthCell {
    pub fn key(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    /// The statistic that drives the cell colour in `mode`.
    pub fn aggregate(&self, mode: AggregateMode) -> Option<f64> {
        match mode {
            AggregateMode::Max => self.month_max,
            AggregateMode::Min => self.month_min,
        }
    }

    /// Number of non-null samples across both series.
    pub fn defined_value_count(&self) -> usize {
        self.max_series
            .iter()
            .chain(&self.min_series)
            .filter(|point| point.value.is_some())
            .count()
    }
}

/// English month name for a zero-based month index.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_add(1)
        .and_then(|number| u8::try_from(number).ok())
        .and_then(|number| Month::try_from(number).ok())
        .map_or("Unknown", |month| month.name())
}
