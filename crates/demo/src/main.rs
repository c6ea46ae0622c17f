// File: crates/demo/src/main.rs
// Summary: Demo loads XY CSV files into a plot canvas, applies optional view changes, renders a PNG.

mod load;

use anyhow::{Context, Result};
use clap::Parser;
use grapher_core::{CanvasConfig, PlotCanvas, Rgb, SurfaceSize};
use grapher_render_skia::{render_to_png, RenderOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Colors for the second and later inputs; the first uses the configured plot color.
const PALETTE: [Rgb; 5] = [
    Rgb::new(0, 120, 220),
    Rgb::new(40, 170, 90),
    Rgb::new(230, 140, 20),
    Rgb::new(150, 60, 200),
    Rgb::new(20, 20, 20),
];

#[derive(Parser, Debug)]
#[command(name = "grapher-demo")]
#[command(about = "Plot XY CSV files and render them to PNG", long_about = None)]
struct Args {
    /// CSV files with `x,y` columns (or the first two columns)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "target/out/grapher.png")]
    out: PathBuf,

    #[arg(long, default_value_t = 640.0)]
    width: f64,

    #[arg(long, default_value_t = 480.0)]
    height: f64,

    /// TOML file with canvas settings (margin, colors, strokes, flags)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show tick labels
    #[arg(long)]
    labels: bool,

    /// Keep the viewport fixed instead of growing it to fit the data
    #[arg(long)]
    no_autoscale: bool,

    /// Fixed x range as MIN,MAX
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    x_range: Option<(f64, f64)>,

    /// Fixed y range as MIN,MAX
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    y_range: Option<(f64, f64)>,

    /// Tick spacing as X,Y
    #[arg(long, value_parser = parse_pair)]
    increments: Option<(f64, f64)>,

    /// Pan by a data-space delta DX,DY before rendering
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    pan: Option<(f64, f64)>,

    /// Feed each input point by point instead of as a whole plot
    #[arg(long)]
    stream: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load::load_config(path)?,
        None => CanvasConfig::default(),
    };
    if args.labels {
        config.show_labels = true;
    }
    if args.no_autoscale {
        config.autoscale = false;
    }

    let mut canvas = PlotCanvas::with_config(SurfaceSize::new(args.width, args.height), config)
        .context("invalid canvas config")?;
    if let Some((min, max)) = args.x_range {
        canvas.set_x_range(min, max)?;
    }
    if let Some((min, max)) = args.y_range {
        canvas.set_y_range(min, max)?;
    }
    if let Some((x, y)) = args.increments {
        canvas.set_increments(x, y)?;
    }

    for (i, path) in args.inputs.iter().enumerate() {
        let series = load::load_xy_csv(path)?;
        if series.xs.is_empty() {
            tracing::warn!(path = %path.display(), "no data rows, skipping");
            continue;
        }
        let color = if i == 0 { canvas.config().plot_color } else { PALETTE[(i - 1) % PALETTE.len()] };
        let n = series.xs.len();

        let id = if args.stream {
            let id = canvas.add_plot(vec![series.xs[0]], vec![series.ys[0]], color)?;
            for (&x, &y) in series.xs.iter().zip(&series.ys).skip(1) {
                canvas.add_point(id, x, y)?;
            }
            id
        } else {
            canvas
                .add_plot(series.xs, series.ys, color)
                .with_context(|| format!("adding {}", path.display()))?
        };
        tracing::info!(plot = %id, points = n, path = %path.display(), "loaded");
    }

    if let Some((dx, dy)) = args.pan {
        canvas.pan(dx, dy)?;
    }

    let vp = canvas.viewport();
    tracing::info!(
        x_min = vp.x_min(), x_max = vp.x_max(), y_min = vp.y_min(), y_max = vp.y_max(),
        "viewport"
    );

    render_to_png(&canvas, &RenderOptions::default(), &args.out)?;
    println!("Wrote {}", args.out.display());
    Ok(())
}

fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (a, b) = s.split_once(',').ok_or_else(|| format!("expected A,B but got '{s}'"))?;
    let a = a.trim().parse::<f64>().map_err(|e| format!("'{a}': {e}"))?;
    let b = b.trim().parse::<f64>().map_err(|e| format!("'{b}': {e}"))?;
    Ok((a, b))
}
