//! JSON input/output for the CLI.
//!
//! Polygon form: array of rings, each an array of `[x, y]` pairs; ring 0 is the
//! outer boundary. Results are flat JSON objects.

use anyhow::{Context, Result};
use polylabel::{Label, Polygon, QueueKey};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Decode the serialized polygon form and validate it.
pub fn parse_polygon(text: &str) -> Result<Polygon> {
    let rings: Vec<Vec<[f64; 2]>> =
        serde_json::from_str(text).context("expected a JSON array of rings of [x, y] pairs")?;
    Ok(Polygon::from_coords(rings)?)
}

/// Read a polygon from a file, or from stdin when `path` is `-`.
pub fn load_polygon(path: &Path) -> Result<Polygon> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading polygon from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    parse_polygon(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Write pretty JSON, creating parent directories as needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub cells_evaluated: usize,
    pub cells_split: usize,
    pub cells_pruned: usize,
    pub best_updates: usize,
    pub max_frontier: usize,
}

/// Serialized search result.
#[derive(Debug, Serialize)]
pub struct LabelReport {
    pub x: f64,
    pub y: f64,
    pub distance: f64,
    pub precision: f64,
    pub queue_key: &'static str,
    pub stats: StatsReport,
}

impl LabelReport {
    pub fn new(label: &Label, precision: f64, queue_key: QueueKey) -> Self {
        let s = label.stats;
        Self {
            x: label.point.x,
            y: label.point.y,
            distance: label.distance,
            precision,
            queue_key: queue_key.as_str(),
            stats: StatsReport {
                cells_evaluated: s.cells_evaluated,
                cells_split: s.cells_split,
                cells_pruned: s.cells_pruned,
                best_updates: s.best_updates,
                max_frontier: s.max_frontier,
            },
        }
    }
}
