// File: crates/grapher-core/src/plot.rs
// Summary: Plot handle and plot state (data-space polyline, cached screen path, color).

use std::fmt;

use crate::error::{CanvasError, Result};
use crate::path::ScreenPath;
use crate::types::{DataPoint, Rgb};

/// Stable handle for a plot. Handles are assigned in increasing order and never reused
/// within one canvas, even after the plot is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlotId(pub(crate) u64);

impl PlotId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plot#{}", self.0)
    }
}

/// One polyline owned by the canvas.
#[derive(Clone, Debug)]
pub struct Plot {
    xs: Vec<f64>,
    ys: Vec<f64>,
    path: ScreenPath,
    color: Rgb,
}

impl Plot {
    pub(crate) fn new(xs: Vec<f64>, ys: Vec<f64>, path: ScreenPath, color: Rgb) -> Self {
        Self { xs, ys, path, color }
    }

    pub fn xs(&self) -> &[f64] { &self.xs }
    pub fn ys(&self) -> &[f64] { &self.ys }
    pub fn color(&self) -> Rgb { self.color }

    /// Cached screen-space geometry, including any pan/zoom applied since the last rebuild.
    pub fn path(&self) -> &ScreenPath { &self.path }

    /// Number of vertices.
    pub fn len(&self) -> usize { self.xs.len() }

    pub fn is_empty(&self) -> bool { self.xs.is_empty() }

    pub fn points(&self) -> impl Iterator<Item = DataPoint> + '_ {
        self.xs.iter().zip(&self.ys).map(|(&x, &y)| DataPoint { x, y })
    }

    pub(crate) fn set_data(&mut self, xs: Vec<f64>, ys: Vec<f64>) {
        self.xs = xs;
        self.ys = ys;
    }

    pub(crate) fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    pub(crate) fn set_path(&mut self, path: ScreenPath) {
        self.path = path;
    }

    pub(crate) fn path_mut(&mut self) -> &mut ScreenPath {
        &mut self.path
    }
}

/// Check that `xs`/`ys` describe a drawable polyline: non-empty, same length, finite.
pub fn validate_data(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(CanvasError::LengthMismatch { xs: xs.len(), ys: ys.len() });
    }
    if xs.is_empty() {
        return Err(CanvasError::EmptyPlotData);
    }
    if let Some(index) = xs.iter().zip(ys).position(|(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(CanvasError::NonFiniteCoordinate { index });
    }
    Ok(())
}

/// Component-wise (min, max) of validated, non-empty data.
pub(crate) fn data_bounds(xs: &[f64], ys: &[f64]) -> (DataPoint, DataPoint) {
    let mut min = DataPoint::new(f64::INFINITY, f64::INFINITY);
    let mut max = DataPoint::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for (&x, &y) in xs.iter().zip(ys) {
        min.x = min.x.min(x);
        max.x = max.x.max(x);
        min.y = min.y.min(y);
        max.y = max.y.max(y);
    }
    (min, max)
}
