//! Two-mode view state with hover tooltip.
//!
//! The state is plain data: events mutate it and report what needs
//! redrawing, and rendering reads it. Cell data is never touched here.

use tempgrid_model::{AggregateMode, ChartData};

use crate::tooltip::Tooltip;

/// Tooltip placement relative to the pointer.
pub const TOOLTIP_OFFSET: (f64, f64) = (12.0, -28.0);

/// Input events from the presentation host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    /// A click anywhere on the chart surface.
    Click,
    PointerEnter {
        year: i32,
        month: u32,
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerLeave,
}

/// What the host has to repaint after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Nothing,
    /// Colors, legend, title and subtitle.
    Full,
    Tooltip,
}

/// Visible tooltip anchored on a cell, already offset from the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipState {
    pub year: i32,
    pub month: u32,
    pub x: f64,
    pub y: f64,
}

impl TooltipState {
    fn at_pointer(year: i32, month: u32, x: f64, y: f64) -> Self {
        Self {
            year,
            month,
            x: x + TOOLTIP_OFFSET.0,
            y: y + TOOLTIP_OFFSET.1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewState {
    mode: AggregateMode,
    tooltip: Option<TooltipState>,
}

impl ViewState {
    pub fn new(mode: AggregateMode) -> Self {
        Self {
            mode,
            tooltip: None,
        }
    }

    pub fn mode(&self) -> AggregateMode {
        self.mode
    }

    pub fn tooltip(&self) -> Option<TooltipState> {
        self.tooltip
    }

    pub fn apply(&mut self, event: ChartEvent) -> Redraw {
        match event {
            ChartEvent::Click => {
                self.mode = self.mode.toggled();
                Redraw::Full
            }
            ChartEvent::PointerEnter { year, month, x, y } => {
                self.tooltip = Some(TooltipState::at_pointer(year, month, x, y));
                Redraw::Tooltip
            }
            ChartEvent::PointerMove { x, y } => match self.tooltip.as_mut() {
                Some(tooltip) => {
                    *tooltip = TooltipState::at_pointer(tooltip.year, tooltip.month, x, y);
                    Redraw::Tooltip
                }
                None => Redraw::Nothing,
            },
            ChartEvent::PointerLeave => {
                if self.tooltip.take().is_some() {
                    Redraw::Tooltip
                } else {
                    Redraw::Nothing
                }
            }
        }
    }

    /// Text for the visible tooltip in the current mode.
    ///
    /// `None` when hidden or when the hovered slot has no cell.
    pub fn tooltip_content(&self, data: &ChartData, unit: &str) -> Option<Tooltip> {
        let anchor = self.tooltip?;
        let cell = data.cell(anchor.year, anchor.month)?;
        Some(Tooltip::for_cell(cell, self.mode, unit))
    }
}
