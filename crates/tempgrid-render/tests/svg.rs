//! Integration tests for SVG and page output.

use proptest::prelude::*;

use tempgrid_core::build_chart_data;
use tempgrid_ingest::read_records;
use tempgrid_model::{AggregateMode, ChartData};
use tempgrid_render::{ChartOptions, render_error_page, render_page, render_svg};

fn chart(csv: &str) -> ChartData {
    build_chart_data(&read_records(csv.as_bytes()).expect("csv"))
}

fn sample() -> ChartData {
    chart(
        "Date,TMAX,TMIN\n\
         2019-01-01,1,-5\n2019-01-02,3,-2\n\
         2020-01-01,10,2\n2020-01-02,12,3\n\
         2020-03-01,,\n\
         2020-07-01,31,\n",
    )
}

#[test]
fn renders_one_group_per_cell() {
    let svg = render_svg(&sample(), AggregateMode::Max, &ChartOptions::default()).expect("svg");
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("data-year=").count(), 4);
    assert!(svg.contains("Monthly temperature, 2019–2020"));
    assert!(svg.contains("Colored by monthly maximum (click to toggle)"));
}

#[test]
fn absent_months_leave_empty_slots() {
    let svg = render_svg(&sample(), AggregateMode::Max, &ChartOptions::default()).expect("svg");
    assert!(!svg.contains(r#"data-year="2019" data-month="2""#));
    assert!(svg.contains(r#"data-year="2020" data-month="2""#));
    // All twelve month labels are drawn regardless of data.
    assert!(svg.contains(">February<"));
    assert!(svg.contains(">December<"));
}

#[test]
fn undefined_aggregate_uses_missing_fill() {
    let options = ChartOptions::default().with_missing_fill("#abcdef");
    let svg = render_svg(&sample(), AggregateMode::Min, &options).expect("svg");
    // March has no readings; July has no low.
    assert_eq!(svg.matches("cell cell-missing").count(), 2);
    assert_eq!(svg.matches(r##"fill="#abcdef""##).count(), 2);
}

#[test]
fn degenerate_cells_draw_no_sparkline() {
    let svg = render_svg(&sample(), AggregateMode::Max, &ChartOptions::default()).expect("svg");
    // Only the two January cells have two or more readings.
    assert_eq!(svg.matches("spark spark-max").count(), 2);
    assert_eq!(svg.matches("spark spark-min").count(), 2);
}

#[test]
fn canvas_width_tracks_year_count() {
    let options = ChartOptions::default().with_cell_size(50.0, 30.0);
    let svg = render_svg(&sample(), AggregateMode::Max, &options).expect("svg");
    let width = options.margins.left + 2.0 * 50.0 + options.margins.right;
    assert!(svg.contains(&format!(r#"width="{width}""#)));
}

#[test]
fn legend_gradient_is_mode_specific() {
    let data = sample();
    let options = ChartOptions::default();
    let max = render_svg(&data, AggregateMode::Max, &options).expect("svg");
    let min = render_svg(&data, AggregateMode::Min, &options).expect("svg");
    assert!(max.contains("legend-gradient-max"));
    assert!(min.contains("legend-gradient-min"));
    assert_ne!(max, min);
}

#[test]
fn empty_chart_still_renders() {
    let svg = render_svg(&ChartData::default(), AggregateMode::Max, &ChartOptions::default())
        .expect("svg");
    assert!(svg.contains(">Monthly temperature<"));
    assert_eq!(svg.matches("data-year=").count(), 0);
}

#[test]
fn page_hosts_both_modes() {
    let page = render_page(&sample(), AggregateMode::Min, &ChartOptions::default()).expect("page");
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains(r#"<div id="chart" data-mode="min">"#));
    assert!(page.contains(r#"<div class="mode-view" data-mode="max" hidden>"#));
    assert!(page.contains(r#"<div class="mode-view" data-mode="min">"#));
    assert!(page.contains(r#"<div id="tooltip" class="tooltip" hidden></div>"#));
    assert!(page.contains("pointer.x + 12"));
}

#[test]
fn error_page_replaces_chart() {
    let page = render_error_page("CSV file is empty: <data.csv>");
    assert!(page.contains(r#"class="load-error""#));
    assert!(page.contains("CSV file is empty: &lt;data.csv&gt;"));
    assert!(!page.contains("<svg"));
}

proptest! {
    #[test]
    fn toggling_twice_renders_identically(start_min in any::<bool>()) {
        let data = sample();
        let options = ChartOptions::default();
        let mode = if start_min { AggregateMode::Min } else { AggregateMode::Max };
        let before = render_svg(&data, mode, &options).expect("svg");
        let after = render_svg(&data, mode.toggled().toggled(), &options).expect("svg");
        prop_assert_eq!(before, after);
    }
}

#[test]
fn subnormal_temperature_spread_renders() {
    let data = chart("Date,TMAX,TMIN\n2020-01-01,0,0\n2020-02-01,5e-324,0\n");
    let svg = render_svg(&data, AggregateMode::Max, &ChartOptions::default()).expect("svg");
    assert_eq!(svg.matches("data-year=").count(), 2);
    assert!(svg.contains("legend-gradient-max"));
}
