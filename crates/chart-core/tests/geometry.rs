// File: crates/chart-core/tests/geometry.rs
// Purpose: Grid, label, polyline, and marker construction for a single frame.

use ticker_chart_core::{
    build_geometry, compute_range, compute_transform, Axis, AxisConfig, Baseline, ChartStyle,
    Gutter, MonospaceMetrics, Point, RenderGeometry, Size, Transform,
};

fn price_points() -> Vec<Point> {
    vec![Point::new(0.0, 10.0), Point::new(1.0, 20.0), Point::new(2.0, 15.0)]
}

fn frame(
    points: &[Point],
    baseline: Baseline,
    style: &ChartStyle,
) -> (AxisConfig, Transform, RenderGeometry) {
    let m = MonospaceMetrics::default();
    let axis = compute_range(points, 10.0, 15.0, baseline).unwrap().unwrap();
    let gutter = Gutter::measure(&axis, style.label_font_size, style.effective_tick_length(), &m);
    let t = compute_transform(&axis, Size::new(300.0, 200.0), &gutter).unwrap();
    let g = build_geometry(points, &t, &axis, style, &m);
    (axis, t, g)
}

#[test]
fn building_twice_gives_identical_geometry() {
    let outward = ChartStyle { show_inner_lines: false, ..ChartStyle::light() };
    for style in [ChartStyle::dark(), outward] {
        let (axis, t, first) = frame(&price_points(), Baseline::Zero, &style);
        let m = MonospaceMetrics::default();
        let second = build_geometry(&price_points(), &t, &axis, &style, &m);
        assert_eq!(first, second);
    }
}

#[test]
fn polyline_keeps_caller_order() {
    let points = vec![
        Point::new(2.0, 15.0),
        Point::new(0.0, 10.0),
        Point::new(2.0, 15.0),
        Point::new(1.0, 20.0),
    ];
    let (_, t, g) = frame(&points, Baseline::Zero, &ChartStyle::default());
    assert_eq!(g.polyline.len(), 4);
    for (p, px) in points.iter().zip(&g.polyline) {
        assert_eq!(t.apply(*p), *px);
    }
}

#[test]
fn markers_follow_show_points() {
    let style = ChartStyle::default();
    let (_, _, g) = frame(&price_points(), Baseline::Zero, &style);
    assert_eq!(g.markers.len(), 3);
    for (c, p) in g.markers.iter().zip(&g.polyline) {
        assert_eq!(c.center, *p);
        assert_eq!(c.radius, 1.5); // line width 1 * multiplier 3 / 2
    }

    let hidden = ChartStyle { show_points: false, ..style };
    let many: Vec<Point> = (0..40).map(|i| Point::new(i as f64, (i % 7) as f64 + 1.0)).collect();
    let (_, _, g) = frame(&many, Baseline::Zero, &hidden);
    assert!(g.markers.is_empty());
    assert_eq!(g.polyline.len(), 40);
}

#[test]
fn inner_grid_spans_the_plot_and_skips_origin_labels() {
    let (axis, t, g) = frame(&price_points(), Baseline::Zero, &ChartStyle::default());
    assert_eq!(g.axis_lines.len(), 2);
    // x ticks 0,10 and y ticks 0,15,30
    assert_eq!(g.grid_lines.len(), 5);

    let x_span = t.x_to_px(axis.max_x) - t.x_to_px(axis.min_x);
    let y_span = t.y_to_px(axis.min_y) - t.y_to_px(axis.max_y);
    for s in &g.grid_lines[..2] {
        assert!((s.length() - y_span).abs() < 1e-9);
    }
    for s in &g.grid_lines[2..] {
        assert!((s.length() - x_span).abs() < 1e-9);
    }

    let texts: Vec<(Axis, &str)> = g.labels.iter().map(|l| (l.axis, l.text.as_str())).collect();
    assert_eq!(texts, vec![(Axis::X, "10"), (Axis::Y, "15"), (Axis::Y, "30")]);
}

#[test]
fn labels_sit_outside_the_axes() {
    let (_, t, g) = frame(&price_points(), Baseline::Zero, &ChartStyle::default());
    let axis_x_px = t.x_to_px(0.0);
    let axis_y_px = t.y_to_px(0.0);
    for l in &g.labels {
        match l.axis {
            Axis::X => {
                let center = l.origin.x + l.size.width / 2.0;
                assert!((center - t.x_to_px(l.value)).abs() < 1e-9);
                assert!(l.origin.y > axis_y_px);
            }
            Axis::Y => {
                let middle = l.origin.y + l.size.height / 2.0;
                assert!((middle - t.y_to_px(l.value)).abs() < 1e-9);
                assert!(l.origin.x + l.size.width < axis_x_px);
                assert!(l.origin.x >= 0.0, "y label clipped: {:?}", l);
            }
        }
    }
}

#[test]
fn tick_marks_point_outward_without_inner_lines() {
    let style = ChartStyle { show_inner_lines: false, ..ChartStyle::default() };
    let (_, _, g) = frame(&price_points(), Baseline::Zero, &style);
    assert_eq!(g.grid_lines.len(), 5);
    for s in &g.grid_lines[..2] {
        assert_eq!(s.from.x, s.to.x);
        assert!((s.to.y - s.from.y - style.tick_length).abs() < 1e-9, "x tick should extend down");
    }
    for s in &g.grid_lines[2..] {
        assert_eq!(s.from.y, s.to.y);
        assert!((s.from.x - s.to.x - style.tick_length).abs() < 1e-9, "y tick should extend left");
    }
}

#[test]
fn axes_cross_at_zero_when_data_is_negative() {
    let points = vec![Point::new(-5.0, -20.0), Point::new(5.0, 10.0)];
    let (_, t, g) = frame(&points, Baseline::Data, &ChartStyle::default());

    let x_axis = g.axis_lines[0];
    assert!((x_axis.from.y - t.y_to_px(0.0)).abs() < 1e-9);
    let y_axis = g.axis_lines[1];
    assert!((y_axis.from.x - t.x_to_px(0.0)).abs() < 1e-9);

    let texts = |axis: Axis| -> Vec<&str> {
        g.labels.iter().filter(|l| l.axis == axis).map(|l| l.text.as_str()).collect()
    };
    assert_eq!(texts(Axis::X), vec!["-10", "10"]);
    assert_eq!(texts(Axis::Y), vec!["-30", "-15", "15"]);
}

#[test]
fn negative_y_labels_fit_inside_the_viewport() {
    let points = vec![Point::new(0.0, -200.0), Point::new(10.0, 10.0)];
    let outward = ChartStyle { show_inner_lines: false, ..ChartStyle::default() };
    for style in [ChartStyle::default(), outward] {
        let (axis, t, g) = frame(&points, Baseline::Data, &style);
        assert_eq!((axis.min_y, axis.max_y), (-210.0, 15.0));

        let y_labels: Vec<_> = g.labels.iter().filter(|l| l.axis == Axis::Y).collect();
        assert!(y_labels.iter().any(|l| l.text == "-210"));
        for l in &y_labels {
            assert!(l.origin.x >= 0.0, "y label clipped: {:?}", l);
            assert!(l.origin.x + l.size.width < t.x_to_px(0.0));
        }

        // the gutter is sized by "-210", not by the label at max_y
        let m = MonospaceMetrics::default();
        let tick_len = style.effective_tick_length();
        let gutter = Gutter::measure(&axis, style.label_font_size, tick_len, &m);
        let widest = y_labels.iter().map(|l| l.size.width).fold(0.0, f64::max);
        assert_eq!(gutter.y_label.width, widest);
    }
}
