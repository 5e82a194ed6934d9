//! Per-cell line charts of daily highs and lows.

use tempgrid_model::{MonthCell, SeriesPoint};

use crate::common::num;
use crate::layout::Rect;
use crate::scale::LinearScale;

/// SVG path data for both series of one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    pub max_path: String,
    pub min_path: String,
}

impl Sparkline {
    /// Build the two polylines inside `area`.
    ///
    /// Returns `None` when the cell has fewer than two defined values across
    /// both series. Both series share one vertical scale; missing readings
    /// break the line instead of being bridged.
    pub fn for_cell(cell: &MonthCell, area: Rect) -> Option<Self> {
        if cell.defined_value_count() < 2 {
            return None;
        }
        let days = cell.max_series.iter().chain(&cell.min_series).map(|p| p.day_of_month);
        let first_day = days.clone().min()?;
        let last_day = days.max()?;
        let values = cell
            .max_series
            .iter()
            .chain(&cell.min_series)
            .filter_map(|point| point.value);
        let lo = values.clone().fold(f64::INFINITY, f64::min);
        let hi = values.fold(f64::NEG_INFINITY, f64::max);

        let x = LinearScale::new(
            (f64::from(first_day), f64::from(last_day)),
            (area.x, area.x + area.width),
        );
        let y = LinearScale::new((lo, hi), (area.y + area.height, area.y));
        Some(Self {
            max_path: path_data(&cell.max_series, x, y),
            min_path: path_data(&cell.min_series, x, y),
        })
    }
}

fn path_data(series: &[SeriesPoint], x: LinearScale, y: LinearScale) -> String {
    let mut data = String::new();
    let mut in_segment = false;
    for point in series {
        let Some(value) = point.value else {
            in_segment = false;
            continue;
        };
        if !data.is_empty() {
            data.push(' ');
        }
        data.push(if in_segment { 'L' } else { 'M' });
        data.push_str(&num(x.map(f64::from(point.day_of_month))));
        data.push(',');
        data.push_str(&num(y.map(value)));
        in_segment = true;
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(day_of_month: u32, value: Option<f64>) -> SeriesPoint {
        SeriesPoint {
            day_of_month,
            value,
        }
    }

    #[test]
    fn gaps_start_new_segments() {
        let x = LinearScale::new((1.0, 3.0), (0.0, 20.0));
        let y = LinearScale::new((0.0, 10.0), (10.0, 0.0));
        let series = [point(1, Some(0.0)), point(2, None), point(3, Some(10.0))];
        assert_eq!(path_data(&series, x, y), "M0,10 M20,0");
    }

    #[test]
    fn empty_series_has_no_path() {
        let x = LinearScale::new((1.0, 2.0), (0.0, 1.0));
        let y = LinearScale::new((0.0, 1.0), (1.0, 0.0));
        assert_eq!(path_data(&[point(1, None)], x, y), "");
    }
}
