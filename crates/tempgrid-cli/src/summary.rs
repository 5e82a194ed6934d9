//! Terminal tables for `inspect` and the `render` summary.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tempgrid_model::{ChartData, ColumnMapping, month_name};
use tempgrid_render::format_value;

use crate::types::RenderOutcome;

pub fn print_render_summary(outcome: &RenderOutcome) {
    println!("Input: {}", outcome.input.display());
    println!("Output: {}", outcome.output.display());
    let years = match outcome.year_span {
        Some((first, last)) if first == last => first.to_string(),
        Some((first, last)) => format!("{first}-{last}"),
        None => "none".to_string(),
    };
    println!(
        "Rendered {} ({} first): {} cells over {years}, {} of {} rows usable",
        outcome.format.extension(),
        outcome.mode,
        outcome.cells,
        outcome.observations,
        outcome.records,
    );
}

pub fn print_inspect(data: &ChartData, unit: &str) {
    println!("{}", mapping_table(&data.mapping));
    println!(
        "Rows: {} read, {} kept in the last {} year(s)",
        data.record_count,
        data.observation_count,
        data.years.len()
    );
    if data.cells.is_empty() {
        println!("No month cells.");
    } else {
        println!("{}", cell_table(data, unit));
    }
}

/// Role → detected column name.
pub fn mapping_table(mapping: &ColumnMapping) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Role"), header_cell("Column")]);
    apply_table_style(&mut table);
    let rows = [
        ("Date", mapping.date_key.as_deref()),
        ("Daily max", mapping.max_key.as_deref()),
        ("Daily min", mapping.min_key.as_deref()),
        ("Single temperature", mapping.single_temp_key.as_deref()),
    ];
    for (role, key) in rows {
        table.add_row(vec![Cell::new(role), column_cell(key)]);
    }
    table
}

/// One row per month cell in year, month order.
pub fn cell_table(data: &ChartData, unit: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Year"),
        header_cell("Month"),
        header_cell("Days"),
        header_cell("Monthly max"),
        header_cell("Monthly min"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    let mut cells: Vec<_> = data.cells.iter().collect();
    cells.sort_by_key(|cell| cell.key());
    for cell in cells {
        table.add_row(vec![
            Cell::new(cell.year),
            Cell::new(month_name(cell.month)),
            Cell::new(cell.days.len()),
            value_cell(cell.month_max, unit, Color::Red),
            value_cell(cell.month_min, unit, Color::Blue),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn column_cell(key: Option<&str>) -> Cell {
    match key {
        Some(key) => Cell::new(key),
        None => dim_cell("-"),
    }
}

fn value_cell(value: Option<f64>, unit: &str, color: Color) -> Cell {
    match value {
        Some(_) => Cell::new(format_value(value, unit)).fg(color),
        None => dim_cell(format_value(value, unit)),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
