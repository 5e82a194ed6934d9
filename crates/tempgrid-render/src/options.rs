//! Rendering configuration.

/// Space reserved around the cell grid for labels, title and legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 72.0,
            right: 24.0,
            bottom: 96.0,
            left: 88.0,
        }
    }
}

/// Options for SVG and page output.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub cell_width: f64,
    pub cell_height: f64,
    pub margins: Margins,
    /// Fraction of each band left as a gap between cells.
    pub cell_padding: f64,
    pub corner_radius: f64,
    /// Inset of the sparkline area from the cell edge.
    pub sparkline_inset: f64,
    pub legend_width: f64,
    pub legend_height: f64,
    /// Number of gradient stops sampled for the legend.
    pub legend_samples: usize,
    /// Suffix appended to formatted temperatures.
    pub unit: String,
    /// Fill for cells whose active aggregate is undefined.
    pub missing_fill: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            cell_width: 64.0,
            cell_height: 40.0,
            margins: Margins::default(),
            cell_padding: 0.08,
            corner_radius: 4.0,
            sparkline_inset: 5.0,
            legend_width: 320.0,
            legend_height: 12.0,
            legend_samples: 32,
            unit: "°C".to_string(),
            missing_fill: "#e0e0e0".to_string(),
        }
    }
}

impl ChartOptions {
    /// Set the per-cell size.
    #[must_use]
    pub fn with_cell_size(mut self, width: f64, height: f64) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// Set the unit suffix.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Set the fill used for undefined aggregates.
    #[must_use]
    pub fn with_missing_fill(mut self, fill: impl Into<String>) -> Self {
        self.missing_fill = fill.into();
        self
    }
}
