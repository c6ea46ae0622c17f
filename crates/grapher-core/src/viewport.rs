// File: crates/grapher-core/src/viewport.rs
// Summary: Visible data-space rectangle, tick spacing and autoscale expansion.

use crate::error::{CanvasError, Result};
use crate::types::{Axis, DataPoint};

/// Visible data-space rectangle plus tick spacing.
/// Contract: `x_max > x_min`, `y_max > y_min`, all values and both spans finite,
/// increments `> 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    x_increment: f64,
    y_increment: f64,
}

impl Viewport {
    /// Build a viewport with unit tick spacing.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        check_range(Axis::X, x_min, x_max)?;
        check_range(Axis::Y, y_min, y_max)?;
        Ok(Self { x_min, x_max, y_min, y_max, x_increment: 1.0, y_increment: 1.0 })
    }

    pub fn with_increments(mut self, x_increment: f64, y_increment: f64) -> Result<Self> {
        check_increment(Axis::X, x_increment)?;
        check_increment(Axis::Y, y_increment)?;
        self.x_increment = x_increment;
        self.y_increment = y_increment;
        Ok(self)
    }

    pub fn with_x_range(mut self, min: f64, max: f64) -> Result<Self> {
        check_range(Axis::X, min, max)?;
        self.x_min = min;
        self.x_max = max;
        Ok(self)
    }

    pub fn with_y_range(mut self, min: f64, max: f64) -> Result<Self> {
        check_range(Axis::Y, min, max)?;
        self.y_min = min;
        self.y_max = max;
        Ok(self)
    }

    pub fn x_min(&self) -> f64 { self.x_min }
    pub fn x_max(&self) -> f64 { self.x_max }
    pub fn y_min(&self) -> f64 { self.y_min }
    pub fn y_max(&self) -> f64 { self.y_max }
    pub fn x_increment(&self) -> f64 { self.x_increment }
    pub fn y_increment(&self) -> f64 { self.y_increment }
    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }

    /// Where the vertical axis sits: 0 when the x range straddles it, else `x_min`.
    pub fn vertical_axis_x(&self) -> f64 {
        if self.x_min > 0.0 || self.x_max < 0.0 { self.x_min } else { 0.0 }
    }

    /// Where the horizontal axis sits: 0 when the y range straddles it, else `y_min`.
    pub fn horizontal_axis_y(&self) -> f64 {
        if self.y_min > 0.0 || self.y_max < 0.0 { self.y_min } else { 0.0 }
    }

    /// Re-check the range contract after in-place growth.
    pub fn validate(&self) -> Result<()> {
        check_range(Axis::X, self.x_min, self.x_max)?;
        check_range(Axis::Y, self.y_min, self.y_max)
    }

    /// Grow bounds to the floor/ceil of a data extent. Never shrinks.
    /// Returns true when any bound moved. The grown bounds may break the range
    /// contract on extreme data; callers check with [`validate`](Self::validate).
    pub fn expand_to_fit(&mut self, min: DataPoint, max: DataPoint) -> bool {
        let mut changed = false;
        changed |= lower(&mut self.x_min, min.x.floor());
        changed |= raise(&mut self.x_max, max.x.ceil());
        changed |= lower(&mut self.y_min, min.y.floor());
        changed |= raise(&mut self.y_max, max.y.ceil());
        changed
    }

    /// Grow bounds to include a single point, flooring/ceiling only bounds the point
    /// actually falls outside of. Returns true when any bound moved.
    pub fn expand_to_include(&mut self, p: DataPoint) -> bool {
        let mut changed = false;
        if p.x < self.x_min { changed |= lower(&mut self.x_min, p.x.floor()); }
        if p.x > self.x_max { changed |= raise(&mut self.x_max, p.x.ceil()); }
        if p.y < self.y_min { changed |= lower(&mut self.y_min, p.y.floor()); }
        if p.y > self.y_max { changed |= raise(&mut self.y_max, p.y.ceil()); }
        changed
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { x_min: -1.0, x_max: 1.0, y_min: -1.0, y_max: 1.0, x_increment: 1.0, y_increment: 1.0 }
    }
}

pub(crate) fn check_range(axis: Axis, min: f64, max: f64) -> Result<()> {
    // `!(max > min)` also catches NaN; an overflowing span would zero the scale
    if !min.is_finite() || !max.is_finite() || !(max > min) || !(max - min).is_finite() {
        return Err(CanvasError::DegenerateViewport { axis, min, max });
    }
    Ok(())
}

pub(crate) fn check_increment(axis: Axis, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CanvasError::InvalidIncrement { axis, value });
    }
    Ok(())
}

fn lower(bound: &mut f64, candidate: f64) -> bool {
    if candidate < *bound { *bound = candidate; true } else { false }
}

fn raise(bound: &mut f64, candidate: f64) -> bool {
    if candidate > *bound { *bound = candidate; true } else { false }
}
