// File: crates/grapher-render-skia/src/text.rs
// Summary: Tick label shaping with Skia textlayout; labels are drawn centered on their anchor.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

pub struct LabelShaper {
    fonts: FontCollection,
}

impl LabelShaper {
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
        // tick values are numeric; tabular digits keep columns aligned
        ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` so its box is centered on `(cx, cy)`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let h = p.height();
        p.paint(canvas, (cx - w * 0.5, cy - h * 0.5));
    }
}

impl Default for LabelShaper {
    fn default() -> Self {
        Self::new()
    }
}
