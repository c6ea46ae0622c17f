// File: crates/grapher-core/src/path.rs
// Summary: Screen-space polyline and line segment primitives.

use crate::types::ScreenPoint;

/// Polyline in screen space, stroked as connected segments in point order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScreenPath {
    points: Vec<ScreenPoint>,
}

impl ScreenPath {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { points: Vec::with_capacity(n) }
    }

    /// Append a vertex; the first one starts the path, later ones add a segment.
    pub fn line_to(&mut self, p: ScreenPoint) {
        self.points.push(p);
    }

    pub fn points(&self) -> &[ScreenPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            *p = p.translated(dx, dy);
        }
    }

    /// Scale every vertex about the surface origin.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        for p in &mut self.points {
            *p = p.scaled(sx, sy);
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment { from: w[0], to: w[1] })
    }
}

impl FromIterator<ScreenPoint> for ScreenPath {
    fn from_iter<I: IntoIterator<Item = ScreenPoint>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

/// A single straight line in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: ScreenPoint,
    pub to: ScreenPoint,
}

impl Segment {
    pub const fn new(from: ScreenPoint, to: ScreenPoint) -> Self {
        Self { from, to }
    }
}
