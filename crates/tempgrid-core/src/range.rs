use std::collections::BTreeSet;

use tempgrid_model::DailyObservation;

/// Number of most recent calendar years kept on the horizontal axis.
pub const YEAR_WINDOW: usize = 10;

/// Distinct years present, ascending.
pub fn distinct_years(observations: &[DailyObservation]) -> Vec<i32> {
    observations
        .iter()
        .map(|obs| obs.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Keep only observations from the [`YEAR_WINDOW`] most recent years.
pub fn retain_recent_years(mut observations: Vec<DailyObservation>) -> Vec<DailyObservation> {
    let years = distinct_years(&observations);
    let Some(&first_kept) = years.iter().rev().take(YEAR_WINDOW).last() else {
        return observations;
    };
    observations.retain(|obs| obs.year >= first_kept);
    observations
}
