// File: crates/grapher-core/src/axes.rs
// Summary: Axis line geometry and tick label layout.

use tracing::debug;

use crate::mapper::CoordinateMapper;
use crate::path::Segment;
use crate::types::{Axis, ScreenPoint};
use crate::viewport::Viewport;

/// Fixed data-space nudge applied to x tick labels so they sit below-left of the tick.
pub const X_LABEL_NUDGE: f64 = 0.2;

/// Upper bound on ticks per axis; a tiny increment over a wide range stops here.
pub const MAX_TICKS: usize = 10_000;

/// The two axis lines in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxesGeometry {
    /// Runs from `y_min` to `y_max` at x = 0, or at `x_min` when 0 is out of range.
    pub vertical: Segment,
    /// Runs from `x_min` to `x_max` at y = 0, or at `y_min` when 0 is out of range.
    pub horizontal: Segment,
}

/// A positioned tick label. The host owns whatever text widget displays it.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    pub axis: Axis,
    pub value: f64,
    /// Center of the label in screen space.
    pub position: ScreenPoint,
    pub text: String,
}

pub fn axes_geometry(viewport: &Viewport, mapper: &CoordinateMapper) -> AxesGeometry {
    let ax = viewport.vertical_axis_x();
    let ay = viewport.horizontal_axis_y();
    AxesGeometry {
        vertical: Segment::new(
            mapper.to_screen(ax, viewport.y_min()),
            mapper.to_screen(ax, viewport.y_max()),
        ),
        horizontal: Segment::new(
            mapper.to_screen(viewport.x_min(), ay),
            mapper.to_screen(viewport.x_max(), ay),
        ),
    }
}

/// Lay out x labels then y labels, one per tick from min through max.
pub fn tick_labels(viewport: &Viewport, mapper: &CoordinateMapper, margin: f64) -> Vec<TickLabel> {
    let xs = ticks(viewport.x_min(), viewport.x_max(), viewport.x_increment());
    let ys = ticks(viewport.y_min(), viewport.y_max(), viewport.y_increment());
    let mut labels = Vec::with_capacity(xs.len() + ys.len());

    for value in xs {
        labels.push(TickLabel {
            axis: Axis::X,
            value,
            position: mapper.to_screen(value - X_LABEL_NUDGE, -X_LABEL_NUDGE),
            text: format_tick(value),
        });
    }
    for value in ys {
        let p = mapper.to_screen(0.0, value);
        labels.push(TickLabel {
            axis: Axis::Y,
            value,
            position: ScreenPoint::new(p.x - margin / 2.0, p.y),
            text: format_tick(value),
        });
    }
    labels
}

/// `start, start+step, ...` up to and including `end`. Values are computed by index to
/// avoid accumulated drift; `end` is kept when within a small tolerance. Values that do
/// not advance past the previous one (step below float precision) are skipped. At most
/// [`MAX_TICKS`] steps are taken.
pub fn ticks(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(end >= start) {
        return Vec::new();
    }
    let tolerance = step * 1e-9;
    let mut out: Vec<f64> = Vec::new();
    for i in 0..MAX_TICKS {
        let v = start + step * i as f64;
        if v > end + tolerance {
            return out;
        }
        if out.last().map_or(true, |&last| v > last) {
            out.push(v);
        }
    }
    debug!(start, end, step, max = MAX_TICKS, "tick count capped");
    out
}

/// One decimal place, e.g. `-1.0`, `2.5`.
pub fn format_tick(value: f64) -> String {
    format!("{value:.1}")
}
