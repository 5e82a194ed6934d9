//! Temperature grid rendering.
//!
//! This crate turns computed [`ChartData`](tempgrid_model::ChartData) into
//! presentation output:
//!
//! - **Color scale** and gradient legend for the active aggregate mode
//! - **Layout** of the year × month band grid
//! - **Sparklines** of daily highs and lows inside each cell
//! - **View state** for the click toggle and the hover tooltip
//! - **SVG** for one mode, and an **HTML** page hosting both modes

mod common;
pub mod color;
pub mod layout;
pub mod options;
pub mod page;
pub mod scale;
pub mod sparkline;
pub mod state;
pub mod svg;
pub mod tooltip;

pub use color::{ColorScale, GradientStop, Legend, LegendTick, Rgb};
pub use layout::{ChartLayout, MONTH_ROWS, Rect};
pub use options::{ChartOptions, Margins};
pub use page::{render_error_page, render_page};
pub use scale::{BandScale, LinearScale, nice_ticks};
pub use sparkline::Sparkline;
pub use state::{ChartEvent, Redraw, TOOLTIP_OFFSET, TooltipState, ViewState};
pub use svg::{chart_subtitle, chart_title, render_svg};
pub use tooltip::{Tooltip, format_value};
