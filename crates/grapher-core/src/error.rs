// File: crates/grapher-core/src/error.rs
// Summary: Error type for canvas operations.

use thiserror::Error;

use crate::types::Axis;

/// Result type alias for canvas operations.
pub type Result<T> = std::result::Result<T, CanvasError>;

/// Errors raised by the canvas model. A failed call leaves the canvas unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    /// Zero-width, inverted or non-finite data range on one axis.
    #[error("degenerate {axis} range: [{min}, {max}]")]
    DegenerateViewport { axis: Axis, min: f64, max: f64 },

    /// No vertices given for a plot.
    #[error("plot data is empty")]
    EmptyPlotData,

    /// x and y sequences of different lengths.
    #[error("x/y length mismatch: {xs} x values, {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },

    /// NaN or infinite coordinate at `index`.
    #[error("non-finite coordinate at index {index}")]
    NonFiniteCoordinate { index: usize },

    /// NaN or infinite pan/zoom argument.
    #[error("non-finite transform argument: ({x}, {y})")]
    NonFiniteTransform { x: f64, y: f64 },

    /// Tick spacing that is not a positive finite number.
    #[error("invalid {axis} tick increment: {value}")]
    InvalidIncrement { axis: Axis, value: f64 },

    /// Negative or non-finite margin.
    #[error("invalid margin: {0}")]
    InvalidMargin(f64),
}
