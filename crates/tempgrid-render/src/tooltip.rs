use tempgrid_model::{AggregateMode, MonthCell, month_name};

/// Marker shown in place of an undefined value.
pub const NOT_AVAILABLE: &str = "n/a";

/// One decimal place plus unit, or [`NOT_AVAILABLE`].
pub fn format_value(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{value:.1}{unit}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Hover text for one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub heading: String,
    pub lines: Vec<String>,
}

impl Tooltip {
    pub fn for_cell(cell: &MonthCell, mode: AggregateMode, unit: &str) -> Self {
        Self {
            heading: format!("{} {}", month_name(cell.month), cell.year),
            lines: vec![
                format!(
                    "Monthly {} (shown): {}",
                    mode.label(),
                    format_value(cell.aggregate(mode), unit)
                ),
                format!("Monthly max: {}", format_value(cell.month_max, unit)),
                format!("Monthly min: {}", format_value(cell.month_min, unit)),
            ],
        }
    }

    /// Heading followed by each line, newline separated.
    pub fn text(&self) -> String {
        self.rows().join("\n")
    }

    /// All rows, heading first.
    pub fn rows(&self) -> Vec<&str> {
        std::iter::once(self.heading.as_str())
            .chain(self.lines.iter().map(String::as_str))
            .collect()
    }
}
