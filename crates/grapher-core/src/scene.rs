// File: crates/grapher-core/src/scene.rs
// Summary: Drawable snapshot handed to a rendering host.

use crate::axes::{AxesGeometry, TickLabel};
use crate::path::ScreenPath;
use crate::plot::PlotId;
use crate::types::{Rgb, SurfaceSize};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxesStroke {
    pub geometry: AxesGeometry,
    pub width: f32,
    pub color: Rgb,
}

#[derive(Clone, Copy, Debug)]
pub struct PlotStroke<'a> {
    pub id: PlotId,
    pub path: &'a ScreenPath,
    pub color: Rgb,
    pub width: f32,
}

/// Tick labels plus the style they are drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelLayer {
    pub labels: Vec<TickLabel>,
    pub color: Rgb,
    pub font_size: f32,
}

/// Everything needed to draw one frame, borrowed from the canvas.
/// Draw order: axes, then labels, then plots in id order.
#[derive(Clone, Debug)]
pub struct Scene<'a> {
    pub surface: SurfaceSize,
    pub axes: Option<AxesStroke>,
    pub labels: Option<LabelLayer>,
    pub plots: Vec<PlotStroke<'a>>,
}
