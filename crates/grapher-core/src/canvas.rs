// File: crates/grapher-core/src/canvas.rs
// Summary: Plot canvas model: owns plots, viewport and pan shift; keeps screen paths cached.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::axes::{self, AxesGeometry, TickLabel};
use crate::config::{check_margin, CanvasConfig};
use crate::error::{CanvasError, Result};
use crate::mapper::CoordinateMapper;
use crate::plot::{data_bounds, validate_data, Plot, PlotId};
use crate::scene::{AxesStroke, LabelLayer, PlotStroke, Scene};
use crate::types::{DataPoint, Offset, Rgb, SurfaceSize};
use crate::viewport::Viewport;

/// Owns every plot and the state that maps them to the screen.
///
/// Screen paths are an eagerly maintained cache. Anything that changes the mapping
/// (viewport bounds, margin, surface size) rebuilds all of them through [`replot`].
/// Appending a point, panning and zooming patch the cache in place instead.
///
/// Every mutation raises the redraw flag; hosts collect it with
/// [`take_redraw_request`](Self::take_redraw_request).
///
/// [`replot`]: Self::replot
#[derive(Clone, Debug)]
pub struct PlotCanvas {
    config: CanvasConfig,
    viewport: Viewport,
    surface: SurfaceSize,
    shift: Offset,
    plots: BTreeMap<PlotId, Plot>,
    next_id: u64,
    needs_redraw: bool,
}

impl PlotCanvas {
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            config: CanvasConfig::default(),
            viewport: Viewport::default(),
            surface,
            shift: Offset::ZERO,
            plots: BTreeMap::new(),
            next_id: 0,
            needs_redraw: true,
        }
    }

    pub fn with_config(surface: SurfaceSize, config: CanvasConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, ..Self::new(surface) })
    }

    pub fn config(&self) -> &CanvasConfig { &self.config }
    pub fn viewport(&self) -> &Viewport { &self.viewport }
    pub fn surface(&self) -> SurfaceSize { self.surface }
    pub fn shift(&self) -> Offset { self.shift }

    /// Mapping for the current viewport, margin, surface and shift.
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(&self.viewport, self.config.margin, self.surface, self.shift)
    }

    pub fn needs_redraw(&self) -> bool { self.needs_redraw }

    /// Returns whether a redraw was requested since the last call, and clears the flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    // ---- configuration ------------------------------------------------------

    pub fn set_axes_stroke(&mut self, width: f32) {
        self.config.axes_stroke = width;
        self.request_redraw();
    }

    pub fn set_axes_color(&mut self, color: Rgb) {
        self.config.axes_color = color;
        self.request_redraw();
    }

    pub fn set_plot_color(&mut self, color: Rgb) {
        self.config.plot_color = color;
        self.request_redraw();
    }

    pub fn set_plot_stroke(&mut self, width: f32) {
        self.config.plot_stroke = width;
        self.request_redraw();
    }

    pub fn set_show_axes(&mut self, show: bool) {
        self.config.show_axes = show;
        self.request_redraw();
    }

    pub fn set_show_labels(&mut self, show: bool) {
        self.config.show_labels = show;
        self.request_redraw();
    }

    pub fn set_autoscale(&mut self, enabled: bool) {
        self.config.autoscale = enabled;
    }

    pub fn set_label_font_size(&mut self, size: f32) {
        self.config.label_font_size = size;
        self.request_redraw();
    }

    pub fn set_margin(&mut self, margin: f64) -> Result<()> {
        check_margin(margin)?;
        self.config.margin = margin;
        self.replot();
        Ok(())
    }

    pub fn set_surface_size(&mut self, surface: SurfaceSize) {
        self.surface = surface;
        self.replot();
    }

    // ---- viewport -----------------------------------------------------------

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.replot();
    }

    pub fn set_x_range(&mut self, min: f64, max: f64) -> Result<()> {
        self.viewport = self.viewport.with_x_range(min, max)?;
        self.replot();
        Ok(())
    }

    pub fn set_y_range(&mut self, min: f64, max: f64) -> Result<()> {
        self.viewport = self.viewport.with_y_range(min, max)?;
        self.replot();
        Ok(())
    }

    pub fn set_x_min(&mut self, value: f64) -> Result<()> {
        self.set_x_range(value, self.viewport.x_max())
    }

    pub fn set_x_max(&mut self, value: f64) -> Result<()> {
        self.set_x_range(self.viewport.x_min(), value)
    }

    pub fn set_y_min(&mut self, value: f64) -> Result<()> {
        self.set_y_range(value, self.viewport.y_max())
    }

    pub fn set_y_max(&mut self, value: f64) -> Result<()> {
        self.set_y_range(self.viewport.y_min(), value)
    }

    /// Tick spacing only affects labels, so no replot.
    pub fn set_increments(&mut self, x_increment: f64, y_increment: f64) -> Result<()> {
        self.viewport = self.viewport.with_increments(x_increment, y_increment)?;
        self.request_redraw();
        Ok(())
    }

    // ---- plots --------------------------------------------------------------

    /// Add a polyline and return its handle. With autoscale on, the viewport grows to the
    /// floor/ceil of the data extent first.
    pub fn add_plot(&mut self, xs: Vec<f64>, ys: Vec<f64>, color: Rgb) -> Result<PlotId> {
        validate_data(&xs, &ys)?;

        if self.config.autoscale {
            let (min, max) = data_bounds(&xs, &ys);
            let mut grown = self.viewport;
            if grown.expand_to_fit(min, max) {
                grown.validate()?;
                self.viewport = grown;
                debug!(viewport = ?self.viewport, "autoscaled viewport for new plot");
                self.replot();
            }
        }

        let id = PlotId(self.next_id);
        self.next_id += 1;
        let path = self.mapper().path_for(&xs, &ys);
        debug!(plot = %id, points = xs.len(), "added plot");
        self.plots.insert(id, Plot::new(xs, ys, path, color));
        self.request_redraw();
        Ok(id)
    }

    /// Returns false when `id` is unknown.
    pub fn remove_plot(&mut self, id: PlotId) -> bool {
        let removed = self.plots.remove(&id).is_some();
        if removed {
            debug!(plot = %id, "removed plot");
            self.request_redraw();
        }
        removed
    }

    /// Append a vertex to an existing plot; unknown ids are ignored.
    ///
    /// If autoscale moves a bound, the whole canvas is replotted. Otherwise one segment is
    /// appended to the cached path with the current mapping, leaving earlier vertices as
    /// they are (including any pan/zoom already applied to them).
    pub fn add_point(&mut self, id: PlotId, x: f64, y: f64) -> Result<()> {
        let Some(plot) = self.plots.get(&id) else {
            return Ok(());
        };
        if !x.is_finite() || !y.is_finite() {
            return Err(CanvasError::NonFiniteCoordinate { index: plot.len() });
        }

        let mut grown = self.viewport;
        let regrow = self.config.autoscale && grown.expand_to_include(DataPoint::new(x, y));
        if regrow {
            grown.validate()?;
        }

        let mapper = self.mapper();
        let Some(plot) = self.plots.get_mut(&id) else {
            return Ok(());
        };
        plot.push(x, y);
        if regrow {
            self.viewport = grown;
            debug!(plot = %id, viewport = ?self.viewport, "autoscaled viewport for new point");
            self.replot();
        } else {
            plot.path_mut().line_to(mapper.to_screen(x, y));
            self.request_redraw();
        }
        Ok(())
    }

    /// Swap a plot's data and rebuild its path. No autoscale; unknown ids are ignored.
    pub fn replace_plot(&mut self, id: PlotId, xs: Vec<f64>, ys: Vec<f64>) -> Result<()> {
        validate_data(&xs, &ys)?;
        let mapper = self.mapper();
        if let Some(plot) = self.plots.get_mut(&id) {
            plot.set_path(mapper.path_for(&xs, &ys));
            plot.set_data(xs, ys);
            debug!(plot = %id, points = plot.len(), "replaced plot");
            self.request_redraw();
        }
        Ok(())
    }

    /// Drop every plot and reset the pan shift. Ids keep counting up.
    pub fn clear_all(&mut self) {
        debug!(count = self.plots.len(), "clearing all plots");
        self.plots.clear();
        self.shift = Offset::ZERO;
        self.request_redraw();
    }

    /// Rebuild every cached path from stored data with the current mapping. Pan shift is
    /// kept (the mapper layers it on), zoom distortion is discarded.
    pub fn replot(&mut self) {
        let mapper = self.mapper();
        for plot in self.plots.values_mut() {
            let path = mapper.path_for(plot.xs(), plot.ys());
            plot.set_path(path);
        }
        debug!(count = self.plots.len(), "replotted");
        self.request_redraw();
    }

    pub fn plot(&self, id: PlotId) -> Option<&Plot> {
        self.plots.get(&id)
    }

    /// Handles in ascending order.
    pub fn plot_ids(&self) -> impl Iterator<Item = PlotId> + '_ {
        self.plots.keys().copied()
    }

    pub fn len(&self) -> usize { self.plots.len() }

    pub fn is_empty(&self) -> bool { self.plots.is_empty() }

    // ---- pan / zoom ---------------------------------------------------------

    /// Translate every cached path by a data-space delta converted with the current
    /// per-axis scale, and accumulate it into the shift.
    pub fn pan(&mut self, dx: f64, dy: f64) -> Result<()> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(CanvasError::NonFiniteTransform { x: dx, y: dy });
        }
        let mapper = self.mapper();
        let sx = dx * mapper.x_scale();
        let sy = dy * mapper.y_scale();
        self.shift = Offset::new(self.shift.x + sx, self.shift.y + sy);
        for plot in self.plots.values_mut() {
            plot.path_mut().translate(sx, sy);
        }
        trace!(dx = sx, dy = sy, shift = ?self.shift, "panned");
        self.request_redraw();
        Ok(())
    }

    /// Undo all accumulated panning.
    pub fn unpan(&mut self) {
        let Offset { x, y } = self.shift;
        for plot in self.plots.values_mut() {
            plot.path_mut().translate(-x, -y);
        }
        self.shift = Offset::ZERO;
        trace!("unpanned");
        self.request_redraw();
    }

    /// Scale every cached path about the surface origin by `factor * per-axis scale`.
    /// Repeated calls compound; only a replot undoes them.
    pub fn zoom(&mut self, sx: f64, sy: f64) -> Result<()> {
        if !sx.is_finite() || !sy.is_finite() {
            return Err(CanvasError::NonFiniteTransform { x: sx, y: sy });
        }
        let mapper = self.mapper();
        let fx = sx * mapper.x_scale();
        let fy = sy * mapper.y_scale();
        for plot in self.plots.values_mut() {
            plot.path_mut().scale(fx, fy);
        }
        trace!(fx, fy, "zoomed");
        self.request_redraw();
        Ok(())
    }

    // ---- drawables ----------------------------------------------------------

    /// Axis lines, or `None` when axes are hidden.
    pub fn axes(&self) -> Option<AxesGeometry> {
        self.config
            .show_axes
            .then(|| axes::axes_geometry(&self.viewport, &self.mapper()))
    }

    /// Tick labels, empty when labels are hidden.
    pub fn tick_labels(&self) -> Vec<TickLabel> {
        if !self.config.show_labels {
            return Vec::new();
        }
        axes::tick_labels(&self.viewport, &self.mapper(), self.config.margin)
    }

    /// Plot strokes in id order.
    pub fn plot_strokes(&self) -> Vec<PlotStroke<'_>> {
        self.plots
            .iter()
            .map(|(&id, plot)| PlotStroke {
                id,
                path: plot.path(),
                color: plot.color(),
                width: self.config.plot_stroke,
            })
            .collect()
    }

    pub fn scene(&self) -> Scene<'_> {
        let axes = self.axes().map(|geometry| AxesStroke {
            geometry,
            width: self.config.axes_stroke,
            color: self.config.axes_color,
        });
        let labels = self.config.show_labels.then(|| LabelLayer {
            labels: self.tick_labels(),
            color: self.config.axes_color,
            font_size: self.config.label_font_size,
        });
        Scene { surface: self.surface, axes, labels, plots: self.plot_strokes() }
    }
}
