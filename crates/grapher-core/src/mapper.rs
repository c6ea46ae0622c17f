// File: crates/grapher-core/src/mapper.rs
// Summary: Data space -> screen space mapping (margin inset, flipped y, pan shift).

use crate::path::ScreenPath;
use crate::types::{DataPoint, Offset, ScreenPoint, SurfaceSize};
use crate::viewport::Viewport;

/// Linear mapping from the viewport onto the drawing surface.
///
/// `x_scale = (width - 2*margin) / (x_max - x_min)`, symmetric for y. Screen y is flipped
/// relative to data y. The pan shift is added after scaling. Since a [`Viewport`] always has
/// non-zero spans, construction cannot divide by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    x_min: f64,
    y_min: f64,
    y_span: f64,
    margin: f64,
    x_scale: f64,
    y_scale: f64,
    shift: Offset,
}

impl CoordinateMapper {
    pub fn new(viewport: &Viewport, margin: f64, surface: SurfaceSize, shift: Offset) -> Self {
        Self {
            x_min: viewport.x_min(),
            y_min: viewport.y_min(),
            y_span: viewport.y_span(),
            margin,
            x_scale: surface.drawable_width(margin) / viewport.x_span(),
            y_scale: surface.drawable_height(margin) / viewport.y_span(),
            shift,
        }
    }

    /// Screen units per data unit along x.
    pub fn x_scale(&self) -> f64 { self.x_scale }

    /// Screen units per data unit along y.
    pub fn y_scale(&self) -> f64 { self.y_scale }

    pub fn shift(&self) -> Offset { self.shift }

    #[inline]
    pub fn to_screen(&self, x: f64, y: f64) -> ScreenPoint {
        ScreenPoint {
            x: (x - self.x_min) * self.x_scale + self.margin + self.shift.x,
            y: (self.y_span - (y - self.y_min)) * self.y_scale + self.margin + self.shift.y,
        }
    }

    /// Inverse of [`to_screen`](Self::to_screen). `None` when the surface leaves no room
    /// for data on an axis (zero scale).
    pub fn from_screen(&self, p: ScreenPoint) -> Option<DataPoint> {
        if self.x_scale == 0.0 || self.y_scale == 0.0 {
            return None;
        }
        let x = (p.x - self.margin - self.shift.x) / self.x_scale + self.x_min;
        let y = self.y_min + self.y_span - (p.y - self.margin - self.shift.y) / self.y_scale;
        Some(DataPoint { x, y })
    }

    /// Map a whole polyline. Callers guarantee equal lengths.
    pub fn path_for(&self, xs: &[f64], ys: &[f64]) -> ScreenPath {
        xs.iter().zip(ys).map(|(&x, &y)| self.to_screen(x, y)).collect()
    }
}
