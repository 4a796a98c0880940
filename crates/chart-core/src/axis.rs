// File: crates/chart-core/src/axis.rs
// Summary: Axis bounds, tick spacing, and auto-ranging from a point set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::grid::{stride_count, stride_through, MAX_TICKS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// How the lower y bound is chosen during auto-ranging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Baseline {
    /// Always start the y axis at 0, so price levels compare against zero.
    #[default]
    Zero,
    /// Round the data minimum down to a tick, like the x axis. Needed for negative data.
    Data,
}

/// Explicit bounds set by the host instead of auto-ranging.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Axis extents plus tick spacing.
/// Contract: min <= max on both axes, tick intervals positive and finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisConfig {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub tick_x: f64,
    pub tick_y: f64,
}

impl AxisConfig {
    /// Build from explicit bounds; rejects inverted or zero-width ranges.
    pub fn from_bounds(bounds: AxisBounds, tick_x: f64, tick_y: f64) -> Result<Self> {
        check_tick(Axis::X, tick_x)?;
        check_tick(Axis::Y, tick_y)?;
        check_span(Axis::X, bounds.x_min, bounds.x_max)?;
        check_span(Axis::Y, bounds.y_min, bounds.y_max)?;
        check_tick_count(Axis::X, bounds.x_min, bounds.x_max, tick_x)?;
        check_tick_count(Axis::Y, bounds.y_min, bounds.y_max, tick_y)?;
        Ok(Self {
            min_x: bounds.x_min,
            max_x: bounds.x_max,
            min_y: bounds.y_min,
            max_y: bounds.y_max,
            tick_x,
            tick_y,
        })
    }

    pub fn bounds(&self) -> AxisBounds {
        AxisBounds { x_min: self.min_x, x_max: self.max_x, y_min: self.min_y, y_max: self.max_y }
    }

    pub fn range(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.min_x, self.max_x),
            Axis::Y => (self.min_y, self.max_y),
        }
    }

    pub fn tick(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.tick_x,
            Axis::Y => self.tick_y,
        }
    }

    pub fn span(&self, axis: Axis) -> f64 {
        let (min, max) = self.range(axis);
        max - min
    }

    /// Tick positions from min to max inclusive.
    pub fn ticks(&self, axis: Axis) -> Vec<f64> {
        let (min, max) = self.range(axis);
        stride_through(min, max, self.tick(axis))
    }

    /// Where the perpendicular axis line crosses this axis: 0 clamped into range.
    pub fn origin(&self, axis: Axis) -> f64 {
        let (min, max) = self.range(axis);
        0f64.clamp(min, max)
    }

    /// Replace tick spacing, keeping bounds.
    pub fn with_ticks(self, tick_x: f64, tick_y: f64) -> Result<Self> {
        check_tick(Axis::X, tick_x)?;
        check_tick(Axis::Y, tick_y)?;
        check_tick_count(Axis::X, self.min_x, self.max_x, tick_x)?;
        check_tick_count(Axis::Y, self.min_y, self.max_y, tick_y)?;
        Ok(Self { tick_x, tick_y, ..self })
    }
}

/// Round the data extents outward to tick boundaries.
///
/// Returns `Ok(None)` for an empty point set so the caller keeps whatever
/// configuration it already has. The lower y bound follows `baseline`.
/// A single distinct x value has no horizontal extent and is reported as
/// [`ChartError::DegenerateRange`], as is any rounded range of zero width.
/// A range needing more than [`MAX_TICKS`] grid positions on either axis is
/// [`ChartError::TooManyTicks`].
pub fn compute_range(
    points: &[Point],
    tick_x: f64,
    tick_y: f64,
    baseline: Baseline,
) -> Result<Option<AxisConfig>> {
    check_tick(Axis::X, tick_x)?;
    check_tick(Axis::Y, tick_y)?;
    let Some(first) = points.first() else {
        return Ok(None);
    };

    let (mut x_lo, mut x_hi, mut y_lo, mut y_hi) = (first.x, first.x, first.y, first.y);
    for p in &points[1..] {
        x_lo = x_lo.min(p.x);
        x_hi = x_hi.max(p.x);
        y_lo = y_lo.min(p.y);
        y_hi = y_hi.max(p.y);
    }
    if x_hi == x_lo {
        return Err(ChartError::DegenerateRange { axis: Axis::X, min: x_lo, max: x_hi });
    }

    let max_x = (x_hi / tick_x).ceil() * tick_x;
    let min_x = (x_lo / tick_x).floor() * tick_x;
    let mut max_y = (y_hi / tick_y).ceil() * tick_y;
    let min_y = match baseline {
        Baseline::Zero => {
            max_y = max_y.max(0.0);
            0.0
        }
        Baseline::Data => (y_lo / tick_y).floor() * tick_y,
    };

    check_span(Axis::X, min_x, max_x)?;
    check_span(Axis::Y, min_y, max_y)?;
    check_tick_count(Axis::X, min_x, max_x, tick_x)?;
    check_tick_count(Axis::Y, min_y, max_y, tick_y)?;
    Ok(Some(AxisConfig { min_x, max_x, min_y, max_y, tick_x, tick_y }))
}

pub(crate) fn check_tick(axis: Axis, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidTickInterval { axis, value })
    }
}

pub(crate) fn check_span(axis: Axis, min: f64, max: f64) -> Result<()> {
    let span = max - min;
    if span.is_finite() && span > 0.0 {
        Ok(())
    } else {
        Err(ChartError::DegenerateRange { axis, min, max })
    }
}

/// Rejects ranges that would lay out more than [`MAX_TICKS`] positions.
pub(crate) fn check_tick_count(axis: Axis, min: f64, max: f64, tick: f64) -> Result<()> {
    match stride_count(min, max, tick) {
        Some(_) => Ok(()),
        None => Err(ChartError::TooManyTicks { axis, min, max, tick, max_ticks: MAX_TICKS }),
    }
}
