use anyhow::{bail, Context, Result};
use rectgeom::{Point, Rect};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Corner list as written on the command line or in an input file: `[[x, y], ...]`.
pub type Corners = Vec<[f64; 2]>;

/// `--input` file layout.
#[derive(Debug, Deserialize)]
pub struct PairInput {
    pub inner: Corners,
    pub outer: Corners,
}

/// Resolve the two corner lists from either inline JSON or an input file.
pub fn load_pair(
    inner: Option<&str>,
    outer: Option<&str>,
    input: Option<&Path>,
) -> Result<PairInput> {
    match (inner, outer, input) {
        (Some(i), Some(o), None) => Ok(PairInput {
            inner: parse_corners(i).context("parsing --inner")?,
            outer: parse_corners(o).context("parsing --outer")?,
        }),
        (None, None, Some(path)) => read_pair_file(path),
        (_, _, Some(_)) => bail!("--input cannot be combined with --inner/--outer"),
        _ => bail!("need both --inner and --outer, or --input <file>"),
    }
}

pub fn parse_corners(text: &str) -> Result<Corners> {
    let corners: Corners = serde_json::from_str(text)?;
    Ok(corners)
}

fn read_pair_file(path: &Path) -> Result<PairInput> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Bounding rectangle of the corners (`Rect::default()` for an empty list).
pub fn to_rect(corners: &[[f64; 2]]) -> Rect {
    let pts: Vec<Point> = corners.iter().map(|&[x, y]| Point::new(x, y)).collect();
    Rect::from_points(&pts)
}
