use std::path::PathBuf;

use tempgrid_model::AggregateMode;

/// Document flavor written by `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Page hosting both modes with toggle and tooltip.
    Html,
    /// Standalone SVG of a single mode.
    Svg,
}

impl DocumentFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Svg => "svg",
        }
    }
}

#[derive(Debug)]
pub struct RenderOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: DocumentFormat,
    pub mode: AggregateMode,
    pub year_span: Option<(i32, i32)>,
    pub cells: usize,
    pub records: usize,
    pub observations: usize,
}
