// File: crates/chart-core/tests/transform.rs
// Purpose: Data-to-viewport mapping: gutters, y flip, inversion, and degenerate guards.

use ticker_chart_core::{
    compute_transform, Axis, AxisBounds, AxisConfig, ChartError, Gutter, LabelMetrics,
    MonospaceMetrics, Point, Size,
};

fn axis(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> AxisConfig {
    AxisConfig::from_bounds(AxisBounds { x_min, x_max, y_min, y_max }, 10.0, 15.0)
        .expect("valid bounds")
}

fn gutter(a: &AxisConfig) -> Gutter {
    Gutter::measure(a, 10.0, 0.0, &MonospaceMetrics::default())
}

#[test]
fn monospace_metrics_scale_with_font_size() {
    let m = MonospaceMetrics::default();
    let close = |a: Size, b: Size| {
        (a.width - b.width).abs() < 1e-9 && (a.height - b.height).abs() < 1e-9
    };
    assert!(close(m.measure("30", 10.0), Size::new(12.0, 12.0)));
    assert!(close(m.measure("100", 20.0), Size::new(36.0, 24.0)));
}

#[test]
fn gutters_reserve_label_space() {
    let a = axis(0.0, 10.0, 0.0, 30.0);
    let g = gutter(&a);
    // "10" and "30" at 10px: 12x12 each
    assert!((g.left() - 17.0).abs() < 1e-9);
    assert!((g.bottom() - 14.0).abs() < 1e-9);

    let t = compute_transform(&a, Size::new(300.0, 200.0), &g).unwrap();
    assert!((t.scale_x - 275.0 / 10.0).abs() < 1e-9);
    assert!((t.scale_y + 178.0 / 30.0).abs() < 1e-9);
    assert!((t.translate_x - 17.0).abs() < 1e-9);
    assert!((t.translate_y - 186.0).abs() < 1e-9);
}

#[test]
fn axis_minimum_lands_on_plot_corner_and_y_is_flipped() {
    let a = axis(20.0, 60.0, 100.0, 160.0);
    let g = gutter(&a);
    let vp = Size::new(400.0, 300.0);
    let t = compute_transform(&a, vp, &g).unwrap();

    let corner = t.apply(Point::new(20.0, 100.0));
    assert!((corner.x - g.left()).abs() < 1e-9);
    assert!((corner.y - (vp.height - g.bottom())).abs() < 1e-9);

    let low = t.apply(Point::new(30.0, 110.0));
    let high = t.apply(Point::new(30.0, 150.0));
    assert!(high.y < low.y, "larger values must be drawn higher");
}

#[test]
fn inverse_round_trips() {
    let a = axis(-10.0, 90.0, 0.0, 45.0);
    let t = compute_transform(&a, Size::new(640.0, 480.0), &gutter(&a)).unwrap();
    let samples = [
        Point::new(0.0, 0.0),
        Point::new(-7.25, 12.5),
        Point::new(88.0, 44.9),
        Point::new(1e3, -3.0),
    ];
    for p in samples {
        let back = t.invert(t.apply(p));
        assert!((back.x - p.x).abs() < 1e-9 && (back.y - p.y).abs() < 1e-9, "{p:?} -> {back:?}");
    }
}

#[test]
fn zero_width_range_is_rejected() {
    let flat =
        AxisConfig { min_x: 0.0, max_x: 10.0, min_y: 5.0, max_y: 5.0, tick_x: 10.0, tick_y: 15.0 };
    let err = compute_transform(&flat, Size::new(300.0, 200.0), &gutter(&flat)).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateRange { axis: Axis::Y, .. }), "{err}");
}

#[test]
fn tiny_viewport_is_rejected() {
    let a = axis(0.0, 10.0, 0.0, 30.0);
    let err = compute_transform(&a, Size::new(20.0, 20.0), &gutter(&a)).unwrap_err();
    assert!(matches!(err, ChartError::ViewportTooSmall { .. }));
}

#[test]
fn outward_ticks_widen_the_gutter() {
    let a = axis(0.0, 10.0, 0.0, 30.0);
    let m = MonospaceMetrics::default();
    let flush = Gutter::measure(&a, 10.0, 0.0, &m);
    let ticked = Gutter::measure(&a, 10.0, 5.0, &m);
    assert!((ticked.left() - flush.left() - 5.0).abs() < 1e-9);
    assert!((ticked.bottom() - flush.bottom() - 5.0).abs() < 1e-9);
}
