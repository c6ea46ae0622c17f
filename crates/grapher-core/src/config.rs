// File: crates/grapher-core/src/config.rs
// Summary: Canvas drawing configuration with widget defaults; serde-loadable.

use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, Result};
use crate::types::{Rgb, DEFAULT_MARGIN};

/// Drawing settings. Every field is independently settable on the canvas; only `margin`
/// affects the mapping and therefore forces a replot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub axes_stroke: f32,
    pub axes_color: Rgb,
    pub margin: f64,
    /// Color hosts use for data that arrives without one.
    pub plot_color: Rgb,
    pub plot_stroke: f32,
    pub show_axes: bool,
    pub show_labels: bool,
    pub autoscale: bool,
    pub label_font_size: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            axes_stroke: 1.0,
            axes_color: Rgb::BLUE,
            margin: DEFAULT_MARGIN,
            plot_color: Rgb::RED,
            plot_stroke: 1.0,
            show_axes: true,
            show_labels: false,
            autoscale: true,
            label_font_size: 5.0,
        }
    }
}

impl CanvasConfig {
    pub fn validate(&self) -> Result<()> {
        check_margin(self.margin)
    }
}

pub(crate) fn check_margin(margin: f64) -> Result<()> {
    if !margin.is_finite() || margin < 0.0 {
        return Err(CanvasError::InvalidMargin(margin));
    }
    Ok(())
}
