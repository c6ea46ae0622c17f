// File: crates/grapher-render-skia/src/lib.rs
// Summary: Skia rendering host for grapher-core scenes (PNG / RGBA8 output).

pub mod render;
pub mod text;

pub use render::{draw_scene, render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions};
pub use text::LabelShaper;
