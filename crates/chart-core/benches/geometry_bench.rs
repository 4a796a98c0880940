use ticker_chart_core::{
    build_geometry, compute_range, compute_transform, Baseline, ChartStyle, Gutter,
    MonospaceMetrics, Point, Size,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_prices(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(i as f64, 100.0 + (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)))
        .collect()
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_geometry");
    let metrics = MonospaceMetrics::default();
    for &n in &[1_000usize, 10_000usize, 100_000usize] {
        let data = gen_prices(n);
        let tick_x = (n / 10) as f64;
        let axis = compute_range(&data, tick_x, 15.0, Baseline::Zero).unwrap().unwrap();
        for show_points in [false, true] {
            let style = ChartStyle { show_points, ..ChartStyle::default() };
            let tick_len = style.effective_tick_length();
            let gutter = Gutter::measure(&axis, style.label_font_size, tick_len, &metrics);
            let t = compute_transform(&axis, Size::new(1024.0, 640.0), &gutter).unwrap();
            let id = BenchmarkId::from_parameter(format!("n{n}_markers{show_points}"));
            group.bench_with_input(id, &data, |b, d| {
                b.iter(|| black_box(build_geometry(d, &t, &axis, &style, &metrics)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_geometry);
criterion_main!(benches);
