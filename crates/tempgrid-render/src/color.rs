//! Continuous color scale and gradient legend.

use std::fmt;

use tempgrid_model::{AggregateMode, MonthCell};

use crate::scale::nice_ticks;

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        let channel = |a: u8, b: u8| -> u8 {
            let value = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            value.round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    /// `#rrggbb` notation.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Cold-to-hot ramp (ColorBrewer RdYlBu, reversed).
const RAMP: [Rgb; 11] = [
    Rgb::new(0x31, 0x36, 0x95),
    Rgb::new(0x45, 0x75, 0xb4),
    Rgb::new(0x74, 0xad, 0xd1),
    Rgb::new(0xab, 0xd9, 0xe9),
    Rgb::new(0xe0, 0xf3, 0xf8),
    Rgb::new(0xff, 0xff, 0xbf),
    Rgb::new(0xfe, 0xe0, 0x90),
    Rgb::new(0xfd, 0xae, 0x61),
    Rgb::new(0xf4, 0x6d, 0x43),
    Rgb::new(0xd7, 0x30, 0x27),
    Rgb::new(0xa5, 0x00, 0x26),
];

/// Approximate number of labeled legend ticks.
const LEGEND_TICKS: usize = 5;

/// Sample the ramp at `t` in `[0, 1]`. Out-of-range input is clamped.
pub fn interpolate(t: f64) -> Rgb {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
    let scaled = t * (RAMP.len() - 1) as f64;
    let index = (scaled.floor() as usize).min(RAMP.len() - 2);
    RAMP[index].lerp(RAMP[index + 1], scaled - index as f64)
}

/// Color scale calibrated on one mode's aggregate values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    domain: Option<(f64, f64)>,
}

impl ColorScale {
    /// `None` means no defined value existed; every color is then the ramp midpoint.
    pub fn new(domain: Option<(f64, f64)>) -> Self {
        Self { domain }
    }

    /// Domain spanning the defined `mode` aggregates of `cells`.
    pub fn for_mode(cells: &[MonthCell], mode: AggregateMode) -> Self {
        let domain = cells
            .iter()
            .filter_map(|cell| cell.aggregate(mode))
            .fold(None, |acc: Option<(f64, f64)>, value| match acc {
                Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
                None => Some((value, value)),
            });
        Self { domain }
    }

    pub fn domain(&self) -> Option<(f64, f64)> {
        self.domain
    }

    /// Position of `value` in the domain, clamped to `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        match self.domain {
            Some((lo, hi)) if hi > lo && value.is_finite() => {
                ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
            }
            _ => 0.5,
        }
    }

    pub fn color(&self, value: f64) -> Rgb {
        interpolate(self.normalize(value))
    }

    /// Fill for an optional aggregate.
    pub fn fill(&self, value: Option<f64>, missing: &str) -> String {
        value.map_or_else(|| missing.to_string(), |value| self.color(value).to_hex())
    }

    /// Gradient stops and labeled ticks spanning the domain.
    pub fn legend(&self, samples: usize) -> Legend {
        let samples = samples.max(2);
        let (lo, hi) = self.domain.unwrap_or((0.0, 0.0));
        let stops = (0..samples)
            .map(|idx| {
                let offset = idx as f64 / (samples - 1) as f64;
                GradientStop {
                    offset,
                    color: self.color(lo + offset * (hi - lo)),
                }
            })
            .collect();
        let ticks = match self.domain {
            Some((lo, hi)) if hi > lo => nice_ticks(lo, hi, LEGEND_TICKS)
                .into_iter()
                .map(|value| LegendTick::new(value, self.normalize(value)))
                .collect(),
            Some((value, _)) => vec![LegendTick::new(value, 0.5)],
            None => Vec::new(),
        };
        Legend { stops, ticks }
    }
}

/// One gradient color at a fractional position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgb,
}

/// One labeled value on the legend axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendTick {
    pub value: f64,
    pub offset: f64,
    pub label: String,
}

impl LegendTick {
    fn new(value: f64, offset: f64) -> Self {
        Self {
            value,
            offset,
            label: format!("{value:.1}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub stops: Vec<GradientStop>,
    pub ticks: Vec<LegendTick>,
}
