// File: crates/grapher-core/src/lib.rs
// Summary: Core library entry point; exports the plot canvas model and its geometry types.

pub mod axes;
pub mod canvas;
pub mod config;
pub mod error;
pub mod mapper;
pub mod path;
pub mod plot;
pub mod scene;
pub mod types;
pub mod viewport;

pub use axes::{AxesGeometry, TickLabel};
pub use canvas::PlotCanvas;
pub use config::CanvasConfig;
pub use error::{CanvasError, Result};
pub use mapper::CoordinateMapper;
pub use path::{ScreenPath, Segment};
pub use plot::{Plot, PlotId};
pub use scene::{AxesStroke, LabelLayer, PlotStroke, Scene};
pub use types::{Axis, DataPoint, Offset, Rgb, ScreenPoint, SurfaceSize};
pub use viewport::Viewport;
