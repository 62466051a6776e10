use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use convack::beam::waste_score;
use convack::{ConvexPolygon, PackCfg, Scene};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{read_json, to_points, to_xy, write_json, PackOutput, Xy};

#[derive(Parser)]
#[command(name = "convack-cli")]
#[command(about = "Pack convex polygons around the origin")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Pack polygons read from JSON (`[[[x, y], ...], ...]`) and write the result
    Pack {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// JSON `PackCfg`; missing fields take their defaults
        #[arg(long)]
        cfg: Option<PathBuf>,
        #[arg(long)]
        beam_width: Option<usize>,
    },
    /// Print the convex hull of a JSON point array
    Hull {
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Pack {
            input,
            out,
            cfg,
            beam_width,
        } => pack(input, out, cfg, beam_width),
        Action::Hull { input } => hull(input),
    }
}

fn pack(
    input: PathBuf,
    out: PathBuf,
    cfg_path: Option<PathBuf>,
    beam_width: Option<usize>,
) -> Result<()> {
    let mut cfg: PackCfg = match &cfg_path {
        Some(path) => read_json(path)?,
        None => PackCfg::default(),
    };
    if let Some(width) = beam_width {
        cfg.beam_width = width;
    }
    let scene = Scene::with_cfg(cfg).context("building scene")?;

    let raw: Vec<Vec<Xy>> = read_json(&input)?;
    let mut polygons: Vec<ConvexPolygon> = raw
        .iter()
        .enumerate()
        .map(|(i, xy)| {
            let hull = ConvexPolygon::convex_hull(&to_points(xy));
            if hull.len() != xy.len() {
                tracing::warn!(polygon = i, given = xy.len(), kept = hull.len(), "input is not a convex loop; using its hull");
            }
            hull
        })
        .collect();
    tracing::info!(input = %input.display(), polygons = polygons.len(), beam_width = scene.beam_width(), "pack");

    scene.pack(&mut polygons);
    let refs: Vec<&ConvexPolygon> = polygons.iter().collect();
    let score = waste_score(&refs);
    tracing::info!(score, out = %out.display(), "packed");

    write_json(&out, &PackOutput::new(score, &polygons))?;
    let payload = provenance::Payload::new(json!({
        "cfg": scene.cfg(),
        "cfg_file": cfg_path.map(|p| p.to_string_lossy().into_owned()),
        "polygons": polygons.len(),
        "score": score,
    }))
    .with_input(&input);
    let sidecar = provenance::write_sidecar(&out, payload)?;
    tracing::info!(sidecar = %sidecar.display(), "provenance written");
    Ok(())
}

fn hull(input: PathBuf) -> Result<()> {
    let raw: Vec<Xy> = read_json(&input)?;
    let hull = ConvexPolygon::convex_hull(&to_points(&raw));
    tracing::info!(points = raw.len(), vertices = hull.len(), area = hull.area(), "hull");
    println!("{}", serde_json::to_string_pretty(&to_xy(hull.vertices()))?);
    Ok(())
}
