// File: crates/chart-core/src/text.rs
// Summary: Tick label formatting and measurement (fixed metrics + Skia textlayout shaper).

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::types::Size;

/// Measures rendered label text so the transform can reserve gutters.
pub trait LabelMetrics {
    fn measure(&self, text: &str, font_size: f64) -> Size;
}

/// Tick label text: the value rounded to an integer.
pub fn format_tick(value: f64) -> String {
    let rounded = value.round();
    // avoid "-0"
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded as i64)
    }
}

/// Fixed advance per character; platform independent, so used by default and in tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMetrics {
    /// Glyph advance as a fraction of the font size.
    pub advance: f64,
    /// Line height as a fraction of the font size.
    pub line_height: f64,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self { advance: 0.6, line_height: 1.2 }
    }
}

impl LabelMetrics for MonospaceMetrics {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        let chars = text.chars().count() as f64;
        Size::new(chars * font_size * self.advance, font_size * self.line_height)
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Tabular digits keep tick labels aligned
        ts.set_font_families(&[
            "Roboto Mono",
            "Consolas",
            "Menlo",
            "DejaVu Sans Mono",
            "monospace",
        ]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` with its top-left corner at (x, y).
    pub fn draw_top_left(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
    ) {
        let mut p = self.layout(text, size, color);
        p.paint(canvas, (x, y));
    }
}

impl LabelMetrics for TextShaper {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        let p = self.layout(text, font_size as f32, skia::Color::from_argb(0, 0, 0, 0));
        Size::new(p.longest_line() as f64, p.height() as f64)
    }
}
