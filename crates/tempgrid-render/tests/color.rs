//! Integration tests for the color scale and legend.

use chrono::NaiveDate;
use proptest::prelude::*;

use tempgrid_core::aggregate_months;
use tempgrid_model::{AggregateMode, DailyObservation, MonthCell};
use tempgrid_render::ColorScale;

fn cells(readings: &[(u32, Option<f64>, Option<f64>)]) -> Vec<MonthCell> {
    let observations: Vec<_> = readings
        .iter()
        .map(|&(month, tmax, tmin)| {
            let date = NaiveDate::from_ymd_opt(2020, month, 1).expect("valid date");
            DailyObservation::new(date, tmax, tmin)
        })
        .collect();
    aggregate_months(&observations)
}

#[test]
fn domain_follows_active_mode() {
    let cells = cells(&[(1, Some(10.0), Some(-4.0)), (7, Some(31.0), Some(18.0))]);
    assert_eq!(
        ColorScale::for_mode(&cells, AggregateMode::Max).domain(),
        Some((10.0, 31.0))
    );
    assert_eq!(
        ColorScale::for_mode(&cells, AggregateMode::Min).domain(),
        Some((-4.0, 18.0))
    );
}

#[test]
fn undefined_aggregates_are_ignored() {
    let cells = cells(&[(1, None, None), (2, Some(5.0), None), (3, Some(9.0), None)]);
    let scale = ColorScale::for_mode(&cells, AggregateMode::Max);
    assert_eq!(scale.domain(), Some((5.0, 9.0)));
    assert_eq!(scale.fill(None, "#e0e0e0"), "#e0e0e0");
}

#[test]
fn values_outside_domain_are_clamped() {
    let scale = ColorScale::new(Some((0.0, 10.0)));
    assert_eq!(scale.color(-50.0), scale.color(0.0));
    assert_eq!(scale.color(50.0), scale.color(10.0));
    assert_ne!(scale.color(0.0), scale.color(10.0));
}

#[test]
fn degenerate_domain_still_produces_colors() {
    let cells = cells(&[(1, None, None)]);
    let scale = ColorScale::for_mode(&cells, AggregateMode::Min);
    assert_eq!(scale.domain(), None);
    let color = scale.color(12.0);
    assert_eq!(scale.color(-100.0), color);

    let legend = scale.legend(8);
    assert_eq!(legend.stops.len(), 8);
    assert!(legend.stops.iter().all(|stop| stop.color == color));
    assert!(legend.ticks.is_empty());
}

#[test]
fn single_value_domain_has_one_tick() {
    let scale = ColorScale::new(Some((7.0, 7.0)));
    let legend = scale.legend(4);
    assert_eq!(legend.ticks.len(), 1);
    assert_eq!(legend.ticks[0].label, "7.0");
    assert_eq!(legend.ticks[0].offset, 0.5);
}

#[test]
fn legend_spans_domain() {
    let scale = ColorScale::new(Some((2.0, 12.0)));
    let legend = scale.legend(32);
    assert_eq!(legend.stops.first().map(|stop| stop.offset), Some(0.0));
    assert_eq!(legend.stops.last().map(|stop| stop.offset), Some(1.0));
    assert_eq!(legend.stops[0].color, scale.color(2.0));
    assert_eq!(legend.stops[31].color, scale.color(12.0));
    let labels: Vec<&str> = legend.ticks.iter().map(|tick| tick.label.as_str()).collect();
    insta::assert_snapshot!(labels.join(" "), @"2.0 4.0 6.0 8.0 10.0 12.0");
    assert!(legend.ticks.iter().all(|tick| (0.0..=1.0).contains(&tick.offset)));
}

proptest! {
    #[test]
    fn normalize_is_monotonic(
        lo in -60.0f64..0.0,
        width in 0.1f64..80.0,
        a in -100.0f64..100.0,
        b in -100.0f64..100.0,
    ) {
        let scale = ColorScale::new(Some((lo, lo + width)));
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(scale.normalize(small) <= scale.normalize(large));
        prop_assert!((0.0..=1.0).contains(&scale.normalize(a)));
    }
}

#[test]
fn subnormal_domain_legend_is_bounded() {
    let scale = ColorScale::new(Some((0.0, 5e-324)));
    let legend = scale.legend(32);
    assert_eq!(legend.stops.len(), 32);
    let offsets: Vec<f64> = legend.ticks.iter().map(|tick| tick.offset).collect();
    assert_eq!(offsets, vec![0.0, 1.0]);
}
