//! Chart layout: three stacked panels sharing one tick axis
//!
//! The layout is computed from a [`LogTable`] before any drawing happens so
//! that panel order, labels and axis ranges can be checked without decoding
//! an image.

use crate::log_table::{LogTable, Signal};
use plotters::style::{RGBColor, BLUE, RED};
use std::ops::Range;

/// Label drawn under the bottom panel
pub const TICK_AXIS_LABEL: &str = "Tick";

/// Default image size: 8x6 inches at 100 dpi
pub const DEFAULT_SIZE: (u32, u32) = (800, 600);

/// Relative padding added around each axis range
const AXIS_MARGIN: f64 = 0.05;

/// Half-height used when a range collapses to a single value
const FLAT_RANGE_PAD: f64 = 0.5;

/// One subplot of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub signal: Signal,
    pub title: String,
    pub y_label: String,
    pub legend: String,
    pub color: RGBColor,
    /// `(tick, value)`, one entry per log row
    pub samples: Vec<(f64, f64)>,
    pub y_range: Range<f64>,
    /// Only the bottom panel carries tick labels and the axis description
    pub shows_x_axis: bool,
}

impl Panel {
    pub fn point_count(&self) -> usize {
        self.samples.len()
    }
}

/// The full three-panel chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub size: (u32, u32),
    pub x_range: Range<f64>,
    pub panels: Vec<Panel>,
}

impl ChartLayout {
    /// Build the Data / Clock / Attention panels for a loaded log
    pub fn from_table(table: &LogTable, size: (u32, u32)) -> Self {
        let last_tick = table.len().saturating_sub(1) as f64;
        let x_range = padded_range(0.0, last_tick);

        let panels = Signal::ALL
            .iter()
            .map(|&signal| {
                let values = table.column(signal);
                let samples = crate::step_series::tick_samples(&values);
                let y_range = table
                    .value_range(signal)
                    .map(|(lo, hi)| padded_range(lo, hi))
                    .unwrap_or(padded_range(0.0, 0.0));

                Panel {
                    signal,
                    title: signal.name().to_string(),
                    y_label: y_label(signal).to_string(),
                    legend: signal.name().to_string(),
                    color: signal_color(signal),
                    samples,
                    y_range,
                    shows_x_axis: signal == Signal::Attention,
                }
            })
            .collect();

        Self {
            size,
            x_range,
            panels,
        }
    }

    pub fn panel(&self, signal: Signal) -> Option<&Panel> {
        self.panels.iter().find(|p| p.signal == signal)
    }
}

fn y_label(signal: Signal) -> &'static str {
    match signal {
        Signal::Data | Signal::Clock => "Value",
        Signal::Attention => "Attention",
    }
}

/// Line colour per signal: red, dark green, blue
pub fn signal_color(signal: Signal) -> RGBColor {
    match signal {
        Signal::Data => RED,
        Signal::Clock => RGBColor(0, 128, 0),
        Signal::Attention => BLUE,
    }
}

/// `lo..hi` widened by 5% of its span, or by ±0.5 when `lo == hi`
pub fn padded_range(lo: f64, hi: f64) -> Range<f64> {
    let span = hi - lo;
    let pad = if span > 0.0 {
        span * AXIS_MARGIN
    } else {
        FLAT_RANGE_PAD
    };
    (lo - pad)..(hi + pad)
}
