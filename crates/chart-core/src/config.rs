// File: crates/chart-core/src/config.rs
// Summary: Construction-time chart configuration: style, tick spacing, baseline, fixed bounds.

use serde::{Deserialize, Serialize};

use crate::axis::{check_tick, Axis, AxisBounds, Baseline};
use crate::error::Result;
use crate::theme::ChartStyle;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub style: ChartStyle,
    /// Tick spacing along x (data units).
    pub tick_x: f64,
    /// Tick spacing along y (data units).
    pub tick_y: f64,
    pub baseline: Baseline,
    /// When set, used instead of auto-ranging.
    pub bounds: Option<AxisBounds>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            style: ChartStyle::default(),
            tick_x: 10.0,
            tick_y: 15.0,
            baseline: Baseline::Zero,
            bounds: None,
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<()> {
        check_tick(Axis::X, self.tick_x)?;
        check_tick(Axis::Y, self.tick_y)
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_ticks(mut self, tick_x: f64, tick_y: f64) -> Self {
        self.tick_x = tick_x;
        self.tick_y = tick_y;
        self
    }

    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }
}
