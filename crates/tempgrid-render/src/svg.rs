//! SVG output for one aggregate mode.

use anyhow::{Context, Result};
use quick_xml::Writer;
use tracing::debug;

use tempgrid_model::{AggregateMode, ChartData, MonthCell, month_name};

use crate::color::{ColorScale, Legend};
use crate::common::{Attrs, num, write_empty, write_end, write_start, write_text_element};
use crate::layout::{ChartLayout, MONTH_ROWS};
use crate::options::ChartOptions;
use crate::sparkline::Sparkline;
use crate::tooltip::Tooltip;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const TEXT_COLOR: &str = "#333333";
const MUTED_TEXT_COLOR: &str = "#666666";
const MAX_STROKE: &str = "#1f1f1f";
const MIN_STROKE: &str = "#4d4d4d";

/// Chart title for the given year span.
pub fn chart_title(data: &ChartData) -> String {
    match data.year_span() {
        Some((first, last)) if first == last => format!("Monthly temperature, {first}"),
        Some((first, last)) => format!("Monthly temperature, {first}–{last}"),
        None => "Monthly temperature".to_string(),
    }
}

/// Subtitle naming the statistic that drives colors.
pub fn chart_subtitle(mode: AggregateMode) -> String {
    format!("Colored by monthly {} (click to toggle)", mode.label())
}

/// Render the grid colored by `mode`.
///
/// Output depends only on the arguments, so toggling twice reproduces the
/// same document byte for byte.
pub fn render_svg(
    data: &ChartData,
    mode: AggregateMode,
    options: &ChartOptions,
) -> Result<String> {
    let layout = ChartLayout::new(&data.years, options);
    let scale = ColorScale::for_mode(&data.cells, mode);
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    write_start(
        &mut xml,
        "svg",
        &[
            ("xmlns", SVG_NS.to_string()),
            ("width", num(layout.width)),
            ("height", num(layout.height)),
            (
                "viewBox",
                format!("0 0 {} {}", num(layout.width), num(layout.height)),
            ),
            ("class", "tempgrid".to_string()),
            ("data-mode", mode.as_str().to_string()),
            ("font-family", "sans-serif".to_string()),
        ],
    )?;
    write_text_element(&mut xml, "title", &[], &chart_title(data))?;
    write_header(&mut xml, data, mode, options)?;
    write_axes(&mut xml, &layout)?;
    write_cells(&mut xml, data, &layout, &scale, mode, options)?;
    let legend = scale.legend(options.legend_samples);
    write_legend(&mut xml, &layout, &legend, mode, options)?;
    write_end(&mut xml, "svg")?;

    debug!(mode = %mode, cells = data.cells.len(), "rendered svg");
    String::from_utf8(xml.into_inner()).context("svg output is not utf-8")
}

fn write_header(
    xml: &mut Writer<Vec<u8>>,
    data: &ChartData,
    mode: AggregateMode,
    options: &ChartOptions,
) -> Result<()> {
    let x = num(options.margins.left);
    write_text_element(
        xml,
        "text",
        &[
            ("class", "title".to_string()),
            ("x", x.clone()),
            ("y", "24".to_string()),
            ("font-size", "16".to_string()),
            ("font-weight", "bold".to_string()),
            ("fill", TEXT_COLOR.to_string()),
        ],
        &chart_title(data),
    )?;
    write_text_element(
        xml,
        "text",
        &[
            ("class", "subtitle".to_string()),
            ("x", x),
            ("y", "44".to_string()),
            ("font-size", "12".to_string()),
            ("fill", MUTED_TEXT_COLOR.to_string()),
        ],
        &chart_subtitle(mode),
    )
}

fn write_axes(xml: &mut Writer<Vec<u8>>, layout: &ChartLayout) -> Result<()> {
    write_start(xml, "g", &[("class", "axis axis-x".to_string())])?;
    for (index, year) in layout.years().iter().enumerate() {
        let Some(center) = layout.x.center(index) else {
            continue;
        };
        write_text_element(
            xml,
            "text",
            &[
                ("x", num(center)),
                ("y", num(layout.grid.y - 10.0)),
                ("text-anchor", "middle".to_string()),
                ("font-size", "11".to_string()),
                ("fill", TEXT_COLOR.to_string()),
            ],
            &year.to_string(),
        )?;
    }
    write_end(xml, "g")?;

    write_start(xml, "g", &[("class", "axis axis-y".to_string())])?;
    for row in 0..MONTH_ROWS {
        let Some(center) = layout.y.center(row) else {
            continue;
        };
        let month = u32::try_from(row).unwrap_or_default();
        write_text_element(
            xml,
            "text",
            &[
                ("x", num(layout.grid.x - 10.0)),
                ("y", num(center)),
                ("text-anchor", "end".to_string()),
                ("dominant-baseline", "middle".to_string()),
                ("font-size", "11".to_string()),
                ("fill", TEXT_COLOR.to_string()),
            ],
            month_name(month),
        )?;
    }
    write_end(xml, "g")
}

fn write_cells(
    xml: &mut Writer<Vec<u8>>,
    data: &ChartData,
    layout: &ChartLayout,
    scale: &ColorScale,
    mode: AggregateMode,
    options: &ChartOptions,
) -> Result<()> {
    write_start(xml, "g", &[("class", "cells".to_string())])?;
    for &year in layout.years() {
        for month in 0..MONTH_ROWS as u32 {
            // Months without data keep an empty slot.
            let Some(cell) = data.cell(year, month) else {
                continue;
            };
            write_cell(xml, cell, layout, scale, mode, options)?;
        }
    }
    write_end(xml, "g")
}

fn write_cell(
    xml: &mut Writer<Vec<u8>>,
    cell: &MonthCell,
    layout: &ChartLayout,
    scale: &ColorScale,
    mode: AggregateMode,
    options: &ChartOptions,
) -> Result<()> {
    let Some(rect) = layout.cell_rect(cell.year, cell.month) else {
        return Ok(());
    };
    let aggregate = cell.aggregate(mode);
    let tooltip = Tooltip::for_cell(cell, mode, &options.unit);
    let tooltip_json = serde_json::to_string(&tooltip.rows()).context("encode tooltip")?;
    let class = if aggregate.is_some() {
        "cell"
    } else {
        "cell cell-missing"
    };
    let group_attrs: Attrs<'_> = &[
        ("class", class.to_string()),
        ("data-year", cell.year.to_string()),
        ("data-month", cell.month.to_string()),
        ("data-tooltip", tooltip_json),
    ];
    write_start(xml, "g", group_attrs)?;
    write_empty(
        xml,
        "rect",
        &[
            ("x", num(rect.x)),
            ("y", num(rect.y)),
            ("width", num(rect.width)),
            ("height", num(rect.height)),
            ("rx", num(options.corner_radius)),
            ("fill", scale.fill(aggregate, &options.missing_fill)),
        ],
    )?;
    if let Some(sparkline) = Sparkline::for_cell(cell, rect.inset(options.sparkline_inset)) {
        write_path(xml, "spark spark-max", &sparkline.max_path, MAX_STROKE, None)?;
        write_path(xml, "spark spark-min", &sparkline.min_path, MIN_STROKE, Some("2 1"))?;
    }
    write_end(xml, "g")
}

fn write_path(
    xml: &mut Writer<Vec<u8>>,
    class: &str,
    data: &str,
    stroke: &str,
    dash: Option<&str>,
) -> Result<()> {
    if data.is_empty() {
        return Ok(());
    }
    let mut attrs = vec![
        ("class", class.to_string()),
        ("d", data.to_string()),
        ("fill", "none".to_string()),
        ("stroke", stroke.to_string()),
        ("stroke-width", "1.2".to_string()),
    ];
    if let Some(dash) = dash {
        attrs.push(("stroke-dasharray", dash.to_string()));
    }
    write_empty(xml, "path", &attrs)
}

fn write_legend(
    xml: &mut Writer<Vec<u8>>,
    layout: &ChartLayout,
    legend: &Legend,
    mode: AggregateMode,
    options: &ChartOptions,
) -> Result<()> {
    let (x, y) = layout.legend_origin();
    let gradient_id = format!("legend-gradient-{mode}");
    write_start(
        xml,
        "g",
        &[
            ("class", "legend".to_string()),
            ("transform", format!("translate({},{})", num(x), num(y))),
        ],
    )?;
    write_start(xml, "defs", &[])?;
    write_start(
        xml,
        "linearGradient",
        &[
            ("id", gradient_id.clone()),
            ("x1", "0".to_string()),
            ("x2", "1".to_string()),
            ("y1", "0".to_string()),
            ("y2", "0".to_string()),
        ],
    )?;
    for stop in &legend.stops {
        write_empty(
            xml,
            "stop",
            &[
                ("offset", format!("{}%", num(stop.offset * 100.0))),
                ("stop-color", stop.color.to_hex()),
            ],
        )?;
    }
    write_end(xml, "linearGradient")?;
    write_end(xml, "defs")?;

    write_text_element(
        xml,
        "text",
        &[
            ("class", "legend-title".to_string()),
            ("x", "0".to_string()),
            ("y", "-8".to_string()),
            ("font-size", "11".to_string()),
            ("fill", TEXT_COLOR.to_string()),
        ],
        &format!("Monthly {} ({})", mode.label(), options.unit),
    )?;
    write_empty(
        xml,
        "rect",
        &[
            ("width", num(options.legend_width)),
            ("height", num(options.legend_height)),
            ("fill", format!("url(#{gradient_id})")),
        ],
    )?;
    for tick in &legend.ticks {
        let tick_x = num(tick.offset * options.legend_width);
        write_empty(
            xml,
            "line",
            &[
                ("x1", tick_x.clone()),
                ("x2", tick_x.clone()),
                ("y1", num(options.legend_height)),
                ("y2", num(options.legend_height + 4.0)),
                ("stroke", TEXT_COLOR.to_string()),
            ],
        )?;
        write_text_element(
            xml,
            "text",
            &[
                ("x", tick_x),
                ("y", num(options.legend_height + 16.0)),
                ("text-anchor", "middle".to_string()),
                ("font-size", "10".to_string()),
                ("fill", TEXT_COLOR.to_string()),
            ],
            &tick.label,
        )?;
    }
    write_end(xml, "g")
}
