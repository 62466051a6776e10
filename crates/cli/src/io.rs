//! JSON shapes read and written by the CLI.

use anyhow::{Context, Result};
use convack::{ConvexPolygon, Point2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A vertex as `[x, y]`.
pub type Xy = [f64; 2];

#[derive(Debug, Serialize, Deserialize)]
pub struct PackedPolygon {
    pub vertices: Vec<Xy>,
    /// Column-major `[m00, m10, m01, m11, tx, ty]`.
    pub transformation: [f64; 6],
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PackOutput {
    pub score: f64,
    pub polygons: Vec<PackedPolygon>,
}

impl PackOutput {
    pub fn new(score: f64, polygons: &[ConvexPolygon]) -> Self {
        Self {
            score,
            polygons: polygons
                .iter()
                .map(|p| PackedPolygon {
                    vertices: to_xy(p.vertices()),
                    transformation: p.current_transformation().data(),
                })
                .collect(),
        }
    }
}

pub fn to_points(xy: &[Xy]) -> Vec<Point2> {
    xy.iter().map(|&[x, y]| Point2::new(x, y)).collect()
}

pub fn to_xy(points: &[Point2]) -> Vec<Xy> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

pub fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

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
