//! Point type and the orientation predicate every algorithm builds on.

use nalgebra::Vector2;

/// A 2D coordinate. Equality is exact: it identifies input vertices, not
/// numerically close results.
pub type Point2 = nalgebra::Point2<f64>;

/// Tests on which side of the line through `a` and `b` the `query` lies.
///
/// Positive if `query` is left of `a→b`, negative if right, zero if colinear
/// (or if `a == b`).
#[inline]
pub fn is_left(a: &Point2, b: &Point2, query: &Point2) -> f64 {
    (b - a).perp(&(query - a))
}

/// Lexicographic `(x, y)` order: smaller x first, ties by smaller y.
#[inline]
pub fn lex_lt(a: &Point2, b: &Point2) -> bool {
    a.x < b.x || (a.x == b.x && a.y < b.y)
}

/// Squared distance; exact for the tie-breaks between colinear candidates.
#[inline]
pub(crate) fn dist2(a: &Point2, b: &Point2) -> f64 {
    let d: Vector2<f64> = b - a;
    d.norm_squared()
}

/// Whether `a` is a strictly better next hull vertex than `b`, seen from `last`.
///
/// Better means further clockwise; on a colinear tie the one further from
/// `last` wins, which skips interior colinear points and duplicates.
#[inline]
pub(crate) fn more_clockwise(last: &Point2, a: &Point2, b: &Point2) -> bool {
    let side = is_left(last, b, a);
    side < 0.0 || (side == 0.0 && dist2(last, a) > dist2(last, b))
}

/// Twice the signed shoelace area of a closed loop; zero below three points.
pub(crate) fn twice_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    (0..n)
        .map(|i| {
            let (prev, cur) = (&points[(i + n - 1) % n], &points[i]);
            prev.x * cur.y - prev.y * cur.x
        })
        .sum()
}

/// Indices `i` whose edge `i → i + 1` has positive length. Repeated vertices
/// leave zero-length edges that carry no direction.
pub(crate) fn proper_edges(points: &[Point2]) -> impl Iterator<Item = usize> + '_ {
    let n = points.len();
    (0..n).filter(move |&i| points[i] != points[(i + 1) % n])
}

/// Axis-aligned bounds `(min, max)` of a point list. `None` when empty.
pub(crate) fn bounds(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = *points.first()?;
    Some(points.iter().fold((first, first), |(lo, hi), p| {
        (
            Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    }))
}
