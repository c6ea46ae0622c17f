// File: crates/grapher-core/tests/transforms.rs
// Purpose: Pan/unpan/zoom over cached screen paths.

use grapher_core::{CanvasError, PlotCanvas, Rgb, ScreenPoint, SurfaceSize};

fn close(a: ScreenPoint, b: ScreenPoint) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

/// 100x100 surface, no margin, default viewport: 50 px per data unit.
fn canvas() -> PlotCanvas {
    let mut c = PlotCanvas::new(SurfaceSize::new(100.0, 100.0));
    c.set_margin(0.0).unwrap();
    c.set_autoscale(false);
    c
}

#[test]
fn pan_translates_by_scaled_delta() {
    let mut c = canvas();
    let id = c.add_plot(vec![0.0], vec![0.0], Rgb::RED).unwrap();
    c.pan(0.5, 0.5).unwrap();

    assert_eq!(c.shift().x, 25.0);
    assert_eq!(c.shift().y, 25.0);
    assert!(close(c.plot(id).unwrap().path().points()[0], ScreenPoint::new(75.0, 75.0)));

    c.pan(-0.1, 0.0).unwrap();
    assert!((c.shift().x - 20.0).abs() < 1e-9);
}

#[test]
fn pan_then_unpan_restores_paths() {
    let mut c = canvas();
    c.add_plot(vec![-1.0, 0.0, 0.7], vec![0.3, -0.9, 1.0], Rgb::RED).unwrap();
    c.add_plot(vec![0.2, 0.4], vec![0.2, -0.4], Rgb::BLUE).unwrap();
    let before: Vec<_> = c.plot_strokes().iter().map(|s| s.path.clone()).collect();

    c.pan(0.3, -0.7).unwrap();
    c.pan(-1.25, 2.0).unwrap();
    c.unpan();

    assert!(c.shift().is_zero());
    for (stroke, old) in c.plot_strokes().iter().zip(&before) {
        for (a, b) in stroke.path.points().iter().zip(old.points()) {
            assert!(close(*a, *b), "{a:?} != {b:?}");
        }
    }
}

#[test]
fn pan_never_touches_data() {
    let mut c = canvas();
    let id = c.add_plot(vec![0.1, 0.2], vec![0.3, 0.4], Rgb::RED).unwrap();
    c.pan(1.0, 1.0).unwrap();
    c.zoom(0.5, 0.5).unwrap();
    let plot = c.plot(id).unwrap();
    assert_eq!(plot.xs(), &[0.1, 0.2]);
    assert_eq!(plot.ys(), &[0.3, 0.4]);
}

#[test]
fn replot_keeps_shift_in_the_mapping() {
    let mut c = canvas();
    let id = c.add_plot(vec![0.0], vec![0.0], Rgb::RED).unwrap();
    c.pan(0.5, 0.5).unwrap();
    c.replot();
    assert!(close(c.plot(id).unwrap().path().points()[0], ScreenPoint::new(75.0, 75.0)));

    // points appended after a pan line up with the panned path
    c.add_point(id, 0.5, 0.0).unwrap();
    assert!(close(c.plot(id).unwrap().path().points()[1], ScreenPoint::new(100.0, 75.0)));
    c.unpan();
    assert!(close(c.plot(id).unwrap().path().points()[1], ScreenPoint::new(75.0, 50.0)));
}

#[test]
fn zoom_compounds_and_replot_discards_it() {
    let mut c = canvas();
    let id = c.add_plot(vec![0.0], vec![0.0], Rgb::RED).unwrap();
    let first = |c: &PlotCanvas| c.plot(id).unwrap().path().points()[0];

    // factor * 50 px/unit
    c.zoom(0.02, 0.02).unwrap();
    assert!(close(first(&c), ScreenPoint::new(50.0, 50.0)));
    c.zoom(0.04, 0.02).unwrap();
    assert!(close(first(&c), ScreenPoint::new(100.0, 50.0)));
    c.zoom(0.04, 0.02).unwrap();
    assert!(close(first(&c), ScreenPoint::new(200.0, 50.0)));

    c.replot();
    assert!(close(first(&c), ScreenPoint::new(50.0, 50.0)));
}

#[test]
fn non_finite_transforms_are_rejected() {
    let mut c = canvas();
    c.add_plot(vec![0.0], vec![0.0], Rgb::RED).unwrap();
    assert!(matches!(c.pan(f64::NAN, 0.0), Err(CanvasError::NonFiniteTransform { .. })));
    assert!(matches!(c.zoom(1.0, f64::INFINITY), Err(CanvasError::NonFiniteTransform { .. })));
    assert!(c.shift().is_zero());
}
