// File: crates/chart-core/src/error.rs
// Summary: Error type for range, transform and input validation failures.

use thiserror::Error;

use crate::axis::Axis;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Axis span is zero or not finite, so no scale factor exists.
    #[error("degenerate {axis} range: [{min}, {max}]")]
    DegenerateRange { axis: Axis, min: f64, max: f64 },

    /// A sample carried a NaN or infinite coordinate.
    #[error("invalid sample at index {index}: ({x}, {y})")]
    InvalidSample { index: usize, x: f64, y: f64 },

    #[error("invalid {axis} tick interval: {value}")]
    InvalidTickInterval { axis: Axis, value: f64 },

    /// The range holds more tick positions than [`MAX_TICKS`](crate::grid::MAX_TICKS).
    #[error("{axis} range [{min}, {max}] at interval {tick} exceeds {max_ticks} ticks")]
    TooManyTicks { axis: Axis, min: f64, max: f64, tick: f64, max_ticks: usize },

    /// Label gutters leave no room to plot in.
    #[error("viewport {width}x{height} too small for axis labels")]
    ViewportTooSmall { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, ChartError>;
