use serde::Serialize;

use crate::mapping::ColumnMapping;
use crate::observation::MonthCell;

/// Everything the renderer needs, computed once per load.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub mapping: ColumnMapping,
    /// Distinct years left after range filtering, ascending.
    pub years: Vec<i32>,
    pub cells: Vec<MonthCell>,
    pub record_count: usize,
    pub observation_count: usize,
}

impl ChartData {
    pub fn cell(&self, year: i32, month: u32) -> Option<&MonthCell> {
        self.cells
            .iter()
            .find(|cell| cell.year == year && cell.month == month)
    }

    pub fn year_span(&self) -> Option<(i32, i32)> {
        Some((*self.years.first()?, *self.years.last()?))
    }
}
