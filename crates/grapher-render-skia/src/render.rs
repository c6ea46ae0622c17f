// File: crates/grapher-render-skia/src/render.rs
// Summary: Headless rendering host: strokes a canvas scene onto a Skia CPU raster surface.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use grapher_core::{AxesStroke, LabelLayer, PlotCanvas, PlotStroke, Rgb, Scene, ScreenPoint};

use crate::text::LabelShaper;

pub struct RenderOptions {
    pub background: skia::Color,
    /// Draw tick labels when the canvas provides them. Off gives byte-stable output
    /// across platforms (no font lookup).
    pub draw_labels: bool,
    pub anti_alias: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: skia::Color::WHITE,
            draw_labels: true,
            anti_alias: true,
        }
    }
}

/// Render the canvas to a PNG at `output_png_path`.
pub fn render_to_png(
    canvas: &PlotCanvas,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(canvas, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

/// Render the canvas and return encoded PNG bytes.
pub fn render_to_png_bytes(canvas: &PlotCanvas, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = rasterize(canvas, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the canvas and return unpremultiplied RGBA8 pixels as `(pixels, width, height, stride)`.
pub fn render_to_rgba8(canvas: &PlotCanvas, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = rasterize(canvas, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("failed to read back {w}x{h} pixels");
    }
    Ok((pixels, w, h, stride))
}

fn rasterize(canvas: &PlotCanvas, opts: &RenderOptions) -> Result<skia::Surface> {
    let scene = canvas.scene();
    let w = scene.surface.width.ceil() as i32;
    let h = scene.surface.height.ceil() as i32;
    if w < 1 || h < 1 {
        anyhow::bail!("surface {w}x{h} has no pixels");
    }
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    draw_scene(surface.canvas(), &scene, opts);
    Ok(surface)
}

/// Stroke a scene onto any Skia canvas: axes, labels, then plots.
pub fn draw_scene(canvas: &skia::Canvas, scene: &Scene<'_>, opts: &RenderOptions) {
    canvas.clear(opts.background);

    if let Some(axes) = &scene.axes {
        draw_axes(canvas, axes, opts);
    }
    if opts.draw_labels {
        if let Some(layer) = &scene.labels {
            draw_labels(canvas, layer);
        }
    }
    for stroke in &scene.plots {
        draw_plot(canvas, stroke, opts);
    }
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgb) -> skia::Color {
    skia::Color::from_rgb(c.r, c.g, c.b)
}

fn pt(p: ScreenPoint) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn stroke_paint(c: Rgb, width: f32, anti_alias: bool) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(anti_alias);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color(c));
    paint
}

fn draw_axes(canvas: &skia::Canvas, axes: &AxesStroke, opts: &RenderOptions) {
    let paint = stroke_paint(axes.color, axes.width, opts.anti_alias);
    let g = &axes.geometry;
    canvas.draw_line(pt(g.vertical.from), pt(g.vertical.to), &paint);
    canvas.draw_line(pt(g.horizontal.from), pt(g.horizontal.to), &paint);
}

fn draw_labels(canvas: &skia::Canvas, layer: &LabelLayer) {
    let shaper = LabelShaper::new();
    for label in &layer.labels {
        let p = pt(label.position);
        shaper.draw_centered(canvas, &label.text, p.x, p.y, layer.font_size, color(layer.color));
    }
}

fn draw_plot(canvas: &skia::Canvas, stroke: &PlotStroke<'_>, opts: &RenderOptions) {
    let points = stroke.path.points();
    let Some((&first, rest)) = points.split_first() else {
        return;
    };

    let mut path = skia::Path::new();
    path.move_to(pt(first));
    for &p in rest {
        path.line_to(pt(p));
    }
    canvas.draw_path(&path, &stroke_paint(stroke.color, stroke.width, opts.anti_alias));
}
