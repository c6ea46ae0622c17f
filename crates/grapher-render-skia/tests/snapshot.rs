// File: crates/grapher-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small canvas to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note; the rendered pixels are still checked for size and ink.

use grapher_core::{PlotCanvas, Rgb, SurfaceSize};
use grapher_render_skia::{render_to_png_bytes, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

const WIDTH: u32 = 240;
const HEIGHT: u32 = 160;

fn assert_has_ink(bytes: &[u8]) {
    let img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
    assert_eq!(img.dimensions(), (WIDTH, HEIGHT));
    let ink = img.pixels().filter(|p| p.0 != [255, 255, 255, 255]).count();
    assert!(ink > 0, "rendered canvas is blank");
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    assert_has_ink(bytes);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes<F: FnOnce(&mut PlotCanvas)>(build: F) -> Vec<u8> {
    let mut canvas = PlotCanvas::new(SurfaceSize::new(WIDTH as f64, HEIGHT as f64));
    build(&mut canvas);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    render_to_png_bytes(&canvas, &opts).expect("render bytes")
}

fn snap_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_two_plots() {
    let bytes = render_bytes(|c| {
        c.add_plot(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.0, 1.0, 0.0, 1.5, 1.0], Rgb::RED).unwrap();
        c.add_plot(vec![-1.0, 4.0], vec![2.0, -1.0], Rgb::new(0, 160, 80)).unwrap();
    });
    write_or_compare(&snap_path("two_plots.png"), &bytes);
}

#[test]
fn golden_offset_axes() {
    let bytes = render_bytes(|c| {
        c.set_autoscale(false);
        c.set_x_range(2.0, 5.0).unwrap();
        c.set_y_range(1.0, 4.0).unwrap();
        c.set_axes_stroke(2.0);
        c.add_plot(vec![2.0, 3.0, 4.0, 5.0], vec![1.0, 4.0, 2.0, 3.0], Rgb::BLUE).unwrap();
    });
    write_or_compare(&snap_path("offset_axes.png"), &bytes);
}

#[test]
fn golden_panned_and_zoomed() {
    let bytes = render_bytes(|c| {
        c.add_plot(vec![-1.0, -0.5, 0.0, 0.5, 1.0], vec![0.0, 0.8, -0.4, 0.6, 0.0], Rgb::RED).unwrap();
        c.pan(0.25, -0.25).unwrap();
        c.zoom(0.015, 0.015).unwrap();
    });
    write_or_compare(&snap_path("panned_zoomed.png"), &bytes);
}
