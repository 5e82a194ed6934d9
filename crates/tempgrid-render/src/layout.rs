//! Year × month grid geometry.

use crate::options::ChartOptions;
use crate::scale::BandScale;

/// Rows on the vertical axis, one per calendar month.
pub const MONTH_ROWS: usize = 12;

/// Axis-aligned rectangle in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Shrink by `amount` on every side, never below zero size.
    pub fn inset(self, amount: f64) -> Self {
        let dx = amount.min(self.width / 2.0);
        let dy = amount.min(self.height / 2.0);
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width - 2.0 * dx,
            height: self.height - 2.0 * dy,
        }
    }
}

/// Canvas size and band scales for a given set of years.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    years: Vec<i32>,
    pub x: BandScale,
    pub y: BandScale,
    pub width: f64,
    pub height: f64,
    pub grid: Rect,
}

impl ChartLayout {
    pub fn new(years: &[i32], options: &ChartOptions) -> Self {
        let margins = options.margins;
        let grid = Rect {
            x: margins.left,
            y: margins.top,
            width: years.len() as f64 * options.cell_width,
            height: MONTH_ROWS as f64 * options.cell_height,
        };
        Self {
            years: years.to_vec(),
            x: BandScale::new(years.len(), grid.x, grid.x + grid.width, options.cell_padding),
            y: BandScale::new(MONTH_ROWS, grid.y, grid.y + grid.height, options.cell_padding),
            width: margins.left + grid.width + margins.right,
            height: margins.top + grid.height + margins.bottom,
            grid,
        }
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn year_index(&self, year: i32) -> Option<usize> {
        self.years.iter().position(|&candidate| candidate == year)
    }

    /// Slot for (`year`, zero-based `month`), whether or not it holds data.
    pub fn cell_rect(&self, year: i32, month: u32) -> Option<Rect> {
        let column = self.year_index(year)?;
        let row = usize::try_from(month).ok()?;
        Some(Rect {
            x: self.x.position(column)?,
            y: self.y.position(row)?,
            width: self.x.bandwidth(),
            height: self.y.bandwidth(),
        })
    }

    /// Top-left corner of the legend bar, below the grid.
    pub fn legend_origin(&self) -> (f64, f64) {
        (self.grid.x, self.grid.y + self.grid.height + 40.0)
    }
}
