// File: crates/chart-core/src/scale.rs
// Summary: Affine data-to-viewport transform with label gutters and a flipped Y axis.

use crate::axis::{check_span, Axis, AxisConfig};
use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::text::{format_tick, LabelMetrics};
use crate::types::{Size, EDGE_PAD, X_GUTTER_PAD, Y_GUTTER_PAD};

/// Affine map `screen = data * scale + translate`, per axis.
/// `scale_y` is negative: larger data values sit higher on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Transform {
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale_x + self.translate_x,
            p.y * self.scale_y + self.translate_y,
        )
    }

    /// Screen to data. Scales are never zero for a transform built by [`compute_transform`].
    #[inline]
    pub fn invert(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.translate_x) / self.scale_x,
            (p.y - self.translate_y) / self.scale_y,
        )
    }

    #[inline]
    pub fn x_to_px(&self, x: f64) -> f64 {
        x * self.scale_x + self.translate_x
    }

    #[inline]
    pub fn y_to_px(&self, y: f64) -> f64 {
        y * self.scale_y + self.translate_y
    }
}

/// Space reserved around the plot for tick labels and outward tick marks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gutter {
    /// Size of the label drawn at `max_x`.
    pub x_label: Size,
    /// Size of the wider of the `min_y` and `max_y` labels; negative labels can
    /// outgrow the one at `max_y`.
    pub y_label: Size,
    /// Length of outward tick marks; 0 when full grid lines are drawn.
    pub tick_length: f64,
}

impl Gutter {
    /// Measure the label at `max_x` and the widest label on the y axis.
    pub fn measure(
        axis: &AxisConfig,
        font_size: f64,
        tick_length: f64,
        metrics: &dyn LabelMetrics,
    ) -> Self {
        // endpoints carry the widest labels
        let low = metrics.measure(&format_tick(axis.min_y), font_size);
        let high = metrics.measure(&format_tick(axis.max_y), font_size);
        let y_label = Size::new(low.width.max(high.width), low.height.max(high.height));
        Self {
            x_label: metrics.measure(&format_tick(axis.max_x), font_size),
            y_label,
            tick_length,
        }
    }

    pub fn left(&self) -> f64 {
        self.y_label.width + Y_GUTTER_PAD + self.tick_length
    }

    pub fn bottom(&self) -> f64 {
        self.x_label.height + X_GUTTER_PAD + self.tick_length
    }
}

/// Map `axis` onto a `viewport`, leaving room for labels on the left and bottom
/// and half a label on the right and top.
pub fn compute_transform(axis: &AxisConfig, viewport: Size, gutter: &Gutter) -> Result<Transform> {
    check_span(Axis::X, axis.min_x, axis.max_x)?;
    check_span(Axis::Y, axis.min_y, axis.max_y)?;

    let left = gutter.left();
    let bottom = gutter.bottom();
    let plot_w = viewport.width - left - gutter.x_label.width / 2.0 - EDGE_PAD;
    let plot_h = viewport.height - bottom - gutter.y_label.height / 2.0 - EDGE_PAD;
    if !(plot_w > 0.0 && plot_h > 0.0) {
        return Err(ChartError::ViewportTooSmall {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let scale_x = plot_w / axis.span(Axis::X);
    let scale_y = -plot_h / axis.span(Axis::Y);
    Ok(Transform {
        scale_x,
        scale_y,
        translate_x: left - axis.min_x * scale_x,
        translate_y: viewport.height - bottom - axis.min_y * scale_y,
    })
}
