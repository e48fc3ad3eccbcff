use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polylabel::rand::{draw_star_polygon, HoleCfg, ReplayToken, StarCfg, VertexCount};
use polylabel::{polylabel_with_cfg, QueueKey, SearchCfg};
use serde_json::json;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{load_polygon, write_json, LabelReport};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "polylabel")]
#[command(about = "Pole of inaccessibility for polygons with holes")]
struct Cmd {
    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KeyArg {
    Distance,
    UpperBound,
}

impl From<KeyArg> for QueueKey {
    fn from(k: KeyArg) -> Self {
        match k {
            KeyArg::Distance => QueueKey::Distance,
            KeyArg::UpperBound => QueueKey::UpperBound,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Find the label point of a JSON polygon (`-` reads stdin)
    Label {
        input: PathBuf,
        #[arg(long, default_value_t = 1.0)]
        precision: f64,
        #[arg(long, value_enum, default_value_t = KeyArg::Distance)]
        queue_key: KeyArg,
        /// Also write the result (plus a provenance sidecar) to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Emit a reproducible star-shaped sample polygon as JSON
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 16)]
        vertices: usize,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        /// Number of sides of a centered hole (0 = no hole)
        #[arg(long, default_value_t = 0)]
        hole_sides: usize,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Label {
            input,
            precision,
            queue_key,
            out,
        } => label(input, precision, queue_key.into(), out),
        Action::Sample {
            seed,
            index,
            vertices,
            radius,
            hole_sides,
            out,
        } => sample(seed, index, vertices, radius, hole_sides, out),
        Action::Report => report(),
    }
}

fn label(input: PathBuf, precision: f64, queue_key: QueueKey, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(input = %input.display(), precision, queue_key = queue_key.as_str(), "label");
    let poly = load_polygon(&input)?;
    tracing::info!(
        rings = poly.rings().len(),
        outer_points = poly.outer().len(),
        "polygon loaded"
    );
    let result = polylabel_with_cfg(&poly, SearchCfg { precision, queue_key })?;
    tracing::info!(
        x = result.point.x,
        y = result.point.y,
        distance = result.distance,
        evaluated = result.stats.cells_evaluated,
        "label found"
    );
    let report = LabelReport::new(&result, precision, queue_key);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(out) = out {
        write_json(&out, &report)?;
        write_sidecar(
            &out,
            Payload::new(
                "label",
                json!({
                    "input": input.to_string_lossy(),
                    "precision": precision,
                    "queue_key": queue_key.as_str()
                }),
            ),
        )?;
    }
    Ok(())
}

fn sample(
    seed: u64,
    index: u64,
    vertices: usize,
    radius: f64,
    hole_sides: usize,
    out: Option<PathBuf>,
) -> Result<()> {
    tracing::info!(seed, index, vertices, radius, hole_sides, "sample");
    if hole_sides == 1 || hole_sides == 2 {
        bail!("--hole-sides must be 0 (no hole) or at least 3, got {hole_sides}");
    }
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(vertices),
        base_radius: radius,
        hole: (hole_sides >= 3).then(|| HoleCfg {
            sides: hole_sides,
            ..HoleCfg::default()
        }),
        ..StarCfg::default()
    };
    let Some(poly) = draw_star_polygon(cfg, ReplayToken { seed, index }) else {
        bail!("sampler produced non-finite coordinates for radius {radius}");
    };
    let coords = poly.to_coords();
    match out {
        Some(out) => {
            write_json(&out, &coords)?;
            write_sidecar(
                &out,
                Payload::new(
                    "sample",
                    json!({
                        "seed": seed,
                        "index": index,
                        "vertices": vertices,
                        "radius": radius,
                        "hole_sides": hole_sides
                    }),
                ),
            )?;
        }
        None => println!("{}", serde_json::to_string(&coords)?),
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::document("report", json!({}), Vec::new());
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
