// File: crates/chart-core/src/chart.rs
// Summary: Headless painting of a ChartView's geometry using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::geometry::Segment;
use crate::render::RenderGeometry;
use crate::text::TextShaper;
use crate::theme::ChartStyle;
use crate::types::{Rgba, GRID_ALPHA};
use crate::view::ChartView;

pub struct RenderOptions {
    pub draw_labels: bool,
    /// One-pixel frame around the view in the axis color.
    pub draw_border: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true, draw_border: true }
    }
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(c: Rgba, width: f64) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width as f32);
    paint.set_color(color(c));
    paint
}

impl ChartView {
    /// Render the current frame to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster_surface()?;
        paint_frame(surface.canvas(), self.geometry(), self.style(), opts, self.surface_size());

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to an unpremultiplied RGBA8 buffer. Returns (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster_surface()?;
        paint_frame(surface.canvas(), self.geometry(), self.style(), opts, self.surface_size());

        let (w, h) = self.surface_size();
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back {}x{} surface", w, h);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn surface_size(&self) -> (i32, i32) {
        let vp = self.viewport();
        (vp.width.ceil() as i32, vp.height.ceil() as i32)
    }

    fn raster_surface(&self) -> Result<skia::Surface> {
        let (w, h) = self.surface_size();
        if w <= 0 || h <= 0 {
            anyhow::bail!("cannot render a {}x{} viewport", w, h);
        }
        skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
    }
}

/// Paint one frame. A missing geometry leaves only background and border;
/// geometry without a line still paints axes, grid and labels.
pub fn paint_frame(
    canvas: &skia::Canvas,
    geometry: Option<&RenderGeometry>,
    style: &ChartStyle,
    opts: &RenderOptions,
    (w, h): (i32, i32),
) {
    canvas.clear(color(style.background));

    if opts.draw_border {
        let border = stroke_paint(style.axis_color, 1.0);
        canvas.draw_rect(skia::Rect::from_ltrb(0.5, 0.5, w as f32 - 0.5, h as f32 - 0.5), &border);
    }

    let Some(g) = geometry else { return };
    draw_grid(canvas, g, style);
    if opts.draw_labels {
        draw_labels(canvas, g, style);
    }
    draw_polyline(canvas, g, style);
    draw_markers(canvas, g, style);
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, g: &RenderGeometry, style: &ChartStyle) {
    let grid_color = style.axis_color.with_alpha_factor(GRID_ALPHA);
    let thin = stroke_paint(grid_color, style.axis_line_width / 2.0);
    for s in &g.grid_lines {
        draw_segment(canvas, s, &thin);
    }

    let thick = stroke_paint(style.axis_color, style.axis_line_width);
    for s in &g.axis_lines {
        draw_segment(canvas, s, &thick);
    }
}

fn draw_segment(canvas: &skia::Canvas, s: &Segment, paint: &skia::Paint) {
    canvas.draw_line((s.from.x as f32, s.from.y as f32), (s.to.x as f32, s.to.y as f32), paint);
}

fn draw_labels(canvas: &skia::Canvas, g: &RenderGeometry, style: &ChartStyle) {
    let shaper = TextShaper::new();
    let size = style.label_font_size as f32;
    let ink = color(style.axis_color);
    for label in &g.labels {
        let (x, y) = (label.origin.x as f32, label.origin.y as f32);
        shaper.draw_top_left(canvas, &label.text, x, y, size, ink);
    }
}

fn draw_polyline(canvas: &skia::Canvas, g: &RenderGeometry, style: &ChartStyle) {
    let Some((first, rest)) = g.polyline.split_first() else { return };

    let mut path = skia::Path::new();
    path.move_to((first.x as f32, first.y as f32));
    for p in rest {
        path.line_to((p.x as f32, p.y as f32));
    }
    canvas.draw_path(&path, &stroke_paint(style.line_color, style.line_width));
}

fn draw_markers(canvas: &skia::Canvas, g: &RenderGeometry, style: &ChartStyle) {
    if g.markers.is_empty() {
        return;
    }
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color(style.circle_color));
    for c in &g.markers {
        canvas.draw_circle((c.center.x as f32, c.center.y as f32), c.radius as f32, &fill);
    }
}
