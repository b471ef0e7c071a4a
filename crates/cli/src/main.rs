use anyhow::Result;
use clap::{Parser, Subcommand};
use rectgeom::{is_enclosed_by, Rect, DEFAULT_APPROX_EPS};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Rectangle enclosure checks")]
struct Cmd {
    /// Tolerance for approximate equality
    #[arg(long, global = true, default_value_t = DEFAULT_APPROX_EPS)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Check whether the inner corner set's bounding box is enclosed by the outer one
    Enclosure {
        /// JSON corner list, e.g. '[[2,4],[3,6]]'
        #[arg(long)]
        inner: Option<String>,
        /// JSON corner list, e.g. '[[1,2],[5,7]]'
        #[arg(long)]
        outer: Option<String>,
        /// JSON file with {"inner": [...], "outer": [...]}
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Print crate name and version
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Enclosure {
            inner,
            outer,
            input,
        } => enclosure(inner, outer, input, cmd.eps),
        Action::Report => report(),
    }
}

fn enclosure(
    inner: Option<String>,
    outer: Option<String>,
    input: Option<PathBuf>,
    eps: f64,
) -> Result<()> {
    let doc = enclosure_report(inner.as_deref(), outer.as_deref(), input.as_deref(), eps)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn enclosure_report(
    inner: Option<&str>,
    outer: Option<&str>,
    input: Option<&Path>,
    eps: f64,
) -> Result<Value> {
    tracing::info!(inner = ?inner, outer = ?outer, input = ?input, eps, "enclosure");
    let pair = input::load_pair(inner, outer, input)?;
    let a = input::to_rect(&pair.inner);
    let b = input::to_rect(&pair.outer);
    tracing::debug!(inner = ?a, outer = ?b, "rects");
    let doc = enclosure_doc(&a, &b, eps);
    tracing::info!(enclosed = ?doc["enclosed"].as_bool(), "done");
    Ok(doc)
}

fn rect_doc(r: &Rect) -> Value {
    json!({
        "x": [r.x.lo, r.x.hi],
        "y": [r.y.lo, r.y.hi],
        "empty": r.is_empty()
    })
}

fn enclosure_doc(inner: &Rect, outer: &Rect, eps: f64) -> Value {
    json!({
        "inner": rect_doc(inner),
        "outer": rect_doc(outer),
        "enclosed": is_enclosed_by(inner, outer),
        "reverse": is_enclosed_by(outer, inner),
        "intersects": inner.intersects(outer),
        "approx_equal": inner.approx_equal_eps(outer, eps)
    })
}

fn report() -> Result<()> {
    let obj = json!({
        "name": "rectgeom",
        "version": rectgeom::VERSION
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn inline_corners_reference_pair() {
        let pair = input::load_pair(
            Some("[[2,4],[2,6],[3,4],[3,6]]"),
            Some("[[1,2],[1,7],[5,2],[5,7]]"),
            None,
        )
        .unwrap();
        let doc = enclosure_doc(
            &input::to_rect(&pair.inner),
            &input::to_rect(&pair.outer),
            DEFAULT_APPROX_EPS,
        );
        assert_eq!(doc["enclosed"], json!(true));
        assert_eq!(doc["reverse"], json!(false));
        assert_eq!(doc["intersects"], json!(true));
        assert_eq!(doc["inner"]["x"], json!([2.0, 3.0]));
        assert_eq!(doc["outer"]["y"], json!([2.0, 7.0]));
    }

    #[test]
    fn input_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pair.json");
        fs::write(
            &path,
            r#"{"inner": [[0, 0], [1, 1]], "outer": [[0, 0], [1, 1.00000000000001]]}"#,
        )
        .unwrap();
        let pair = input::load_pair(None, None, Some(path.as_path())).unwrap();
        let a = input::to_rect(&pair.inner);
        let b = input::to_rect(&pair.outer);
        let doc = enclosure_doc(&a, &b, 1e-12);
        assert_eq!(doc["enclosed"], json!(true));
        assert_eq!(doc["reverse"], json!(false));
        assert_eq!(doc["approx_equal"], json!(true));
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(input::load_pair(Some("[[0,0]]"), None, None).is_err());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = input::load_pair(None, None, Some(path.as_path())).unwrap_err();
        assert!(format!("{err:#}").contains("reading"));
        assert!(input::load_pair(Some("[[0,0]]"), Some("[[1,1]]"), Some(path.as_path())).is_err());
        assert!(input::parse_corners("[[0,0,0]]").is_err());
    }

    #[test]
    fn empty_corner_list_is_origin_point() {
        let r = input::to_rect(&[]);
        assert_eq!(r, Rect::default());
        assert_eq!(rect_doc(&r)["empty"], json!(false));
    }

    #[test]
    fn report_from_inline_args_and_file() {
        let doc = enclosure_report(
            Some("[[2,4],[3,6]]"),
            Some("[[1,2],[5,7]]"),
            None,
            DEFAULT_APPROX_EPS,
        )
        .unwrap();
        assert_eq!(doc["enclosed"], json!(true));
        assert_eq!(doc["approx_equal"], json!(false));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pair.json");
        fs::write(&path, r#"{"inner": [[1, 2], [5, 7]], "outer": [[2, 4], [3, 6]]}"#).unwrap();
        let doc = enclosure_report(None, None, Some(path.as_path()), DEFAULT_APPROX_EPS).unwrap();
        assert_eq!(doc["enclosed"], json!(false));
        assert_eq!(doc["reverse"], json!(true));
    }

    #[test]
    fn report_rejects_mixed_sources() {
        let err = enclosure_report(
            Some("[[0,0]]"),
            Some("[[1,1]]"),
            Some(Path::new("pair.json")),
            DEFAULT_APPROX_EPS,
        )
        .unwrap_err();
        assert!(err.to_string().contains("cannot be combined"));
        assert!(enclosure_report(Some("not json"), Some("[[1,1]]"), None, 1e-14).is_err());
    }
}
