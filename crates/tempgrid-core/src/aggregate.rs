//! Grouping daily observations into per-month cells.

use std::collections::BTreeMap;

use tempgrid_model::{DailyObservation, MonthCell, SeriesPoint};

fn fold_defined(values: impl Iterator<Item = Option<f64>>, pick: fn(f64, f64) -> f64) -> Option<f64> {
    values.flatten().reduce(pick)
}

fn build_cell(year: i32, month: u32, mut days: Vec<DailyObservation>) -> MonthCell {
    days.sort_by_key(|obs| obs.date);
    let month_max = fold_defined(days.iter().map(|obs| obs.tmax), f64::max);
    let month_min = fold_defined(days.iter().map(|obs| obs.tmin), f64::min);
    let series = |value: fn(&DailyObservation) -> Option<f64>| -> Vec<SeriesPoint> {
        days.iter()
            .map(|obs| SeriesPoint {
                day_of_month: obs.day_of_month(),
                value: value(obs),
            })
            .collect()
    };
    let max_series = series(|obs| obs.tmax);
    let min_series = series(|obs| obs.tmin);
    MonthCell {
        year,
        month,
        days,
        month_max,
        month_min,
        max_series,
        min_series,
    }
}

/// One cell per (year, month) with at least one observation.
///
/// Cells come back ordered by (year, month); callers place them by key.
pub fn aggregate_months(observations: &[DailyObservation]) -> Vec<MonthCell> {
    let mut groups: BTreeMap<(i32, u32), Vec<DailyObservation>> = BTreeMap::new();
    for obs in observations {
        groups
            .entry((obs.year, obs.month))
            .or_default()
            .push(obs.clone());
    }
    groups
        .into_iter()
        .map(|((year, month), days)| build_cell(year, month, days))
        .collect()
}
