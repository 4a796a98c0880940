// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, label paddings).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: f64 = 320.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 240.0;

/// Gap between the y labels' right edge and the plot.
pub const Y_GUTTER_PAD: f64 = 5.0;
/// Gap between the x labels' top edge and the plot.
pub const X_GUTTER_PAD: f64 = 2.0;
/// Space kept free on the right/top so the last label is not clipped.
pub const EDGE_PAD: f64 = 2.0;
/// Offset of a tick label from its axis line.
pub const LABEL_PAD: f64 = 1.0;
/// Opacity of grid lines relative to the axis color.
pub const GRID_ALPHA: f32 = 0.5;

/// Width/height pair in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Straight-alpha RGBA color, independent of the painting backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same color with alpha scaled by `factor` (0..=1).
    pub fn with_alpha_factor(self, factor: f32) -> Self {
        let a = (self.a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    pub const GREEN: Self = Self::opaque(0, 255, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const BLACK: Self = Self::opaque(0, 0, 0);
}
