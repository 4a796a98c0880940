// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests (PNG file, PNG bytes, RGBA buffer).

use ticker_chart_core::{ChartConfig, ChartView, RenderOptions, Size};

fn plotted() -> ChartView {
    let mut view = ChartView::new(ChartConfig::default(), Size::new(300.0, 200.0)).unwrap();
    view.plot_xy(&[(0.0, 10.0), (1.0, 20.0), (2.0, 15.0), (3.0, 25.0), (4.0, 22.0)]).unwrap();
    view
}

#[test]
fn render_smoke_png() {
    let view = plotted();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    view.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = view.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let view = plotted();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = view.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (300, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);
    assert_eq!(px[3], 255);

    // marker for (1, 20) is painted last, in green
    let center = view.geometry().unwrap().markers[1].center;
    let i = center.y as usize * stride + center.x as usize * 4;
    let (r, g) = (px[i], px[i + 1]);
    assert!(
        g > 200 && r < 50,
        "expected marker green at {:?}, got rgb=({}, {}, {})",
        center,
        r,
        g,
        px[i + 2]
    );
}

#[test]
fn empty_view_renders_background_only() {
    let view = ChartView::new(ChartConfig::default(), Size::new(120.0, 80.0)).unwrap();
    let mut opts = RenderOptions::default();
    opts.draw_border = false;
    let (px, _, _, _) = view.render_to_rgba8(&opts).expect("rgba render");
    assert!(px.chunks(4).all(|c| c == [0, 0, 0, 255]));
}
