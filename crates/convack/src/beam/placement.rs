//! Resolving where the next polygon goes.
//!
//! The first polygon is centred on the origin. Every later one is tried at
//! `rotations` evenly spaced angles and slid in from `directions` evenly spaced
//! headings towards the origin. A bisection on the slide distance finds the
//! closest non-colliding stop, and the option with the lowest waste score
//! wins. Ties keep the stop nearest the origin.

use std::f64::consts::TAU;

use crate::beam::types::{waste_score, Placement};
use crate::geom2::{ConvexPolygon, Point2};
use crate::scene::PackCfg;
use nalgebra::Vector2;

/// Picks a placement for `polygon` given what is already placed. Returns the
/// placement and the placed copy; the copy never collides with `placed`.
pub fn best_placement(
    cfg: &PackCfg,
    placed: &[&ConvexPolygon],
    polygon: &ConvexPolygon,
) -> (Placement, ConvexPolygon) {
    let centred = Placement::default();
    if placed.is_empty() {
        let here = centred.applied(polygon);
        return (centred, here);
    }

    let reach = max_radius(placed.iter().flat_map(|p| p.vertices()));
    let mut best: Option<(f64, f64, Placement, ConvexPolygon)> = None;

    for r in 0..cfg.rotations.max(1) {
        let rotation = TAU * r as f64 / cfg.rotations.max(1) as f64;
        let shaped = Placement {
            rotation,
            target: Point2::origin(),
        }
        .applied(polygon);
        let far = start_distance(reach, max_radius(shaped.vertices()));

        for d in 0..cfg.directions.max(1) {
            let heading = TAU * d as f64 / cfg.directions.max(1) as f64;
            let dir = Vector2::new(heading.cos(), heading.sin());
            let dist = slide(&shaped, placed, &dir, far, cfg.bisection_steps);
            let placement = Placement {
                rotation,
                target: Point2::from(dir * dist),
            };
            let here = placement.applied(polygon);
            if collides_any(&here, placed) {
                continue;
            }
            let mut with_here = placed.to_vec();
            with_here.push(&here);
            let score = waste_score(&with_here);
            let better = match &best {
                None => true,
                Some((s, t, _, _)) => score < *s || (score == *s && dist < *t),
            };
            if better {
                best = Some((score, dist, placement, here));
            }
        }
    }

    match best {
        Some((_, _, placement, here)) => (placement, here),
        None => {
            // Every slide ended in contact after rounding; fall back to a stop
            // clear of everything.
            let placement = Placement {
                rotation: 0.0,
                target: Point2::new(start_distance(reach, max_radius(polygon.vertices())) * 2.0, 0.0),
            };
            let here = placement.applied(polygon);
            (placement, here)
        }
    }
}

/// Slide distance at which `shaped`, moved along `dir`, stops colliding.
/// Starts from `far`, which must already be clear.
fn slide(
    shaped: &ConvexPolygon,
    placed: &[&ConvexPolygon],
    dir: &Vector2<f64>,
    far: f64,
    steps: usize,
) -> f64 {
    let hits = |t: f64| {
        let mut moved = shaped.clone();
        let step = dir * t;
        moved.translate(step.x, step.y);
        collides_any(&moved, placed)
    };
    if !hits(0.0) {
        return 0.0;
    }
    let (mut lo, mut hi) = (0.0, far);
    for _ in 0..steps {
        let mid = 0.5 * (lo + hi);
        if hits(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    hi
}

fn collides_any(polygon: &ConvexPolygon, placed: &[&ConvexPolygon]) -> bool {
    placed.iter().any(|p| polygon.collides(p))
}

fn max_radius<'a>(points: impl IntoIterator<Item = &'a Point2>) -> f64 {
    points
        .into_iter()
        .map(|p| p.coords.norm())
        .fold(0.0, f64::max)
}

/// Distance from the origin at which a polygon of radius `own` is clear of
/// everything within `reach`.
fn start_distance(reach: f64, own: f64) -> f64 {
    (reach + own) * (1.0 + 1e-6) + 1e-9
}
