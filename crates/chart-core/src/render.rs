// File: crates/chart-core/src/render.rs
// Summary: Backend-agnostic geometry for one chart frame: axes, grid, labels, polyline, markers.

use log::trace;

use crate::axis::{Axis, AxisConfig};
use crate::geometry::{Circle, Point, Segment};
use crate::scale::Transform;
use crate::text::{format_tick, LabelMetrics};
use crate::theme::ChartStyle;
use crate::types::{Size, LABEL_PAD};

/// A positioned tick label. `origin` is the top-left corner in screen space.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub axis: Axis,
    pub value: f64,
    pub text: String,
    pub origin: Point,
    pub size: Size,
}

/// Everything a painter needs for one frame. Rebuilt from scratch on each update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderGeometry {
    /// The two axis lines, stroked at full weight.
    pub axis_lines: Vec<Segment>,
    /// Grid lines or tick marks, stroked at half weight and reduced opacity.
    pub grid_lines: Vec<Segment>,
    pub labels: Vec<Label>,
    /// Transformed data points in caller order.
    pub polyline: Vec<Point>,
    pub markers: Vec<Circle>,
}

impl RenderGeometry {
    pub fn is_empty(&self) -> bool {
        self.polyline.is_empty()
    }
}

pub fn build_geometry(
    points: &[Point],
    transform: &Transform,
    axis: &AxisConfig,
    style: &ChartStyle,
    metrics: &dyn LabelMetrics,
) -> RenderGeometry {
    let mut geometry = RenderGeometry::default();
    build_axes(&mut geometry, transform, axis, style, metrics);
    geometry.polyline = points.iter().map(|&p| transform.apply(p)).collect();
    if style.show_points {
        let radius = style.marker_radius();
        geometry.markers =
            geometry.polyline.iter().map(|&center| Circle { center, radius }).collect();
    }
    trace!(
        "built geometry: {} points, {} grid lines, {} labels, {} markers",
        geometry.polyline.len(),
        geometry.grid_lines.len(),
        geometry.labels.len(),
        geometry.markers.len()
    );
    geometry
}

fn build_axes(
    out: &mut RenderGeometry,
    t: &Transform,
    axis: &AxisConfig,
    style: &ChartStyle,
    metrics: &dyn LabelMetrics,
) {
    let x0 = axis.origin(Axis::X);
    let y0 = axis.origin(Axis::Y);
    let tick_len = style.effective_tick_length();
    let pad = LABEL_PAD + tick_len;

    out.axis_lines.push(Segment::new(
        t.apply(Point::new(axis.min_x, y0)),
        t.apply(Point::new(axis.max_x, y0)),
    ));
    out.axis_lines.push(Segment::new(
        t.apply(Point::new(x0, axis.min_y)),
        t.apply(Point::new(x0, axis.max_y)),
    ));

    let axis_px_y = t.y_to_px(y0);
    for x in axis.ticks(Axis::X) {
        let seg = if style.show_inner_lines {
            Segment::new(t.apply(Point::new(x, axis.min_y)), t.apply(Point::new(x, axis.max_y)))
        } else {
            let base = t.apply(Point::new(x, y0));
            Segment::new(base, base.offset(0.0, tick_len))
        };
        out.grid_lines.push(seg);

        if is_origin(x, x0, axis.tick_x) {
            continue;
        }
        let text = format_tick(x);
        let size = metrics.measure(&text, style.label_font_size);
        let origin = Point::new(t.x_to_px(x) - size.width / 2.0, axis_px_y + pad);
        out.labels.push(Label { axis: Axis::X, value: x, text, origin, size });
    }

    let axis_px_x = t.x_to_px(x0);
    for y in axis.ticks(Axis::Y) {
        let seg = if style.show_inner_lines {
            Segment::new(t.apply(Point::new(axis.min_x, y)), t.apply(Point::new(axis.max_x, y)))
        } else {
            let base = t.apply(Point::new(x0, y));
            Segment::new(base, base.offset(-tick_len, 0.0))
        };
        out.grid_lines.push(seg);

        if is_origin(y, y0, axis.tick_y) {
            continue;
        }
        let text = format_tick(y);
        let size = metrics.measure(&text, style.label_font_size);
        let origin = Point::new(axis_px_x - size.width - pad, t.y_to_px(y) - size.height / 2.0);
        out.labels.push(Label { axis: Axis::Y, value: y, text, origin, size });
    }
}

// The tick at the axis crossing gets no label; it would collide with the other axis.
fn is_origin(value: f64, origin: f64, step: f64) -> bool {
    (value - origin).abs() <= step * 1e-9
}
