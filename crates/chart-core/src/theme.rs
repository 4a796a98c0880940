// File: crates/chart-core/src/theme.rs
// Summary: Chart style (colors, strokes, markers, labels) and named presets.

use serde::{Deserialize, Serialize};

use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub background: Rgba,
    pub line_color: Rgba,
    pub line_width: f64,
    pub show_points: bool,
    pub circle_color: Rgba,
    /// Marker diameter in multiples of `line_width`.
    pub circle_size_multiplier: f64,
    pub axis_color: Rgba,
    pub axis_line_width: f64,
    /// Full-span grid lines when true, short outward tick marks otherwise.
    pub show_inner_lines: bool,
    pub label_font_size: f64,
    pub tick_length: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::dark()
    }
}

impl ChartStyle {
    pub fn dark() -> Self {
        Self {
            background: Rgba::BLACK,
            line_color: Rgba::GREEN,
            line_width: 1.0,
            show_points: true,
            circle_color: Rgba::GREEN,
            circle_size_multiplier: 3.0,
            axis_color: Rgba::WHITE,
            axis_line_width: 1.0,
            show_inner_lines: true,
            label_font_size: 10.0,
            tick_length: 5.0,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Rgba::opaque(250, 250, 252),
            line_color: Rgba::opaque(32, 120, 200),
            circle_color: Rgba::opaque(32, 120, 200),
            axis_color: Rgba::opaque(60, 60, 70),
            ..Self::dark()
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            line_color: Rgba::opaque(0x00, 0xff, 0xff),
            circle_color: Rgba::opaque(0xff, 0xff, 0x00),
            line_width: 2.0,
            axis_line_width: 2.0,
            label_font_size: 12.0,
            ..Self::dark()
        }
    }

    pub fn marker_radius(&self) -> f64 {
        self.line_width * self.circle_size_multiplier / 2.0
    }

    /// Tick mark length actually reserved: none when grid lines span the plot.
    pub fn effective_tick_length(&self) -> f64 {
        if self.show_inner_lines { 0.0 } else { self.tick_length }
    }

    /// True when switching to `other` changes the label gutters, and so the transform.
    pub fn changes_gutter(&self, other: &ChartStyle) -> bool {
        self.label_font_size != other.label_font_size
            || self.effective_tick_length() != other.effective_tick_length()
    }
}

/// Built-in presets by name.
pub fn presets() -> Vec<(&'static str, ChartStyle)> {
    vec![
        ("dark", ChartStyle::dark()),
        ("light", ChartStyle::light()),
        ("high-contrast-dark", ChartStyle::high_contrast_dark()),
    ]
}

/// Find a preset by name (case-insensitive).
pub fn find(name: &str) -> Option<ChartStyle> {
    presets().into_iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, s)| s)
}
