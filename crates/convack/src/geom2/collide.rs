//! Separating-axis collision test for convex CCW loops.

use super::point::{bounds, proper_edges, twice_area};
use super::{is_left, Point2};

/// Whether some edge of `a` separates `b` from `a`.
///
/// `a` lies left of each of its own edges, so the edge's line separates the
/// two when every vertex of `b` is right of it or on it. Vertices on the line
/// still separate: contact along a boundary is not an overlap. Zero-length
/// edges from repeated vertices have no line and are skipped.
pub fn separating_axis_exists(a: &[Point2], b: &[Point2]) -> bool {
    let n = a.len();
    proper_edges(a).any(|i| {
        let (origin, end) = (&a[i], &a[(i + 1) % n]);
        b.iter().all(|v| is_left(origin, end, v) <= 0.0)
    })
}

/// Interior overlap test used by `ConvexPolygon::collides`.
pub(crate) fn collides(a: &[Point2], b: &[Point2]) -> bool {
    // Segments, single points and repeated-point loops have no interior.
    if twice_area(a) <= 0.0 || twice_area(b) <= 0.0 {
        return false;
    }
    if !boxes_overlap(a, b) {
        return false;
    }
    !separating_axis_exists(a, b) && !separating_axis_exists(b, a)
}

/// Bounding boxes overlap with positive area. Merely touching boxes cannot
/// hold overlapping interiors.
fn boxes_overlap(a: &[Point2], b: &[Point2]) -> bool {
    match (bounds(a), bounds(b)) {
        (Some((amin, amax)), Some((bmin, bmax))) => {
            amin.x < bmax.x && bmin.x < amax.x && amin.y < bmax.y && bmin.y < amax.y
        }
        _ => false,
    }
}
