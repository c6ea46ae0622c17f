// File: crates/demo/src/load.rs
// Summary: XY CSV loading and optional TOML canvas config.

use anyhow::{Context, Result};
use grapher_core::CanvasConfig;
use std::io::Read;
use std::path::Path;

/// Parallel x/y columns read from one CSV file.
#[derive(Debug, Default, PartialEq)]
pub struct XySeries {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

pub fn load_xy_csv(path: &Path) -> Result<XySeries> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_xy_csv(file).with_context(|| format!("reading {}", path.display()))
}

/// Columns named `x`/`y` are used when present, otherwise the first two columns.
/// Rows that do not parse as two numbers are skipped.
pub fn read_xy_csv<R: Read>(reader: R) -> Result<XySeries> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let find = |name: &str| headers.iter().position(|h| h == name);
    let (ix, iy) = match (find("x"), find("y")) {
        (Some(ix), Some(iy)) => (ix, iy),
        _ if headers.len() >= 2 => (0, 1),
        _ => anyhow::bail!("need at least two columns, found {:?}", headers),
    };

    let mut out = XySeries::default();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok()).filter(|v| v.is_finite());
        match (parse(ix), parse(iy)) {
            (Some(x), Some(y)) => {
                out.xs.push(x);
                out.ys.push(y);
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, "skipped rows without two finite numbers");
    }
    Ok(out)
}

pub fn load_config(path: &Path) -> Result<CanvasConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
    let config: CanvasConfig =
        toml::from_str(&text).with_context(|| format!("parsing canvas config {}", path.display()))?;
    Ok(config)
}
