//! Convex hull construction.
//!
//! - `gift_wrapping`: O(n·h) walk over a loose point set.
//! - `merge`: hull around already-convex loops (second phase of Chan's
//!   algorithm). Extreme vertices of each loop are found by binary search
//!   over its cycle instead of a full scan.
//!
//! Both walks start at the lexicographically smallest point, repeatedly take
//! the most clockwise candidate (colinear ties: the farthest), and stop when
//! the start vertex comes around again. The number of steps is bounded by the
//! input size so rounding noise cannot make them spin.

use super::point::{is_left, lex_lt, more_clockwise};
use super::Point2;

/// Gift wrapping over a point multiset. Returns the CCW hull loop.
pub(crate) fn gift_wrapping(points: &[Point2]) -> Vec<Point2> {
    if points.len() <= 2 {
        // A triangle is always convex but may be wound the wrong way, so only
        // smaller inputs pass through.
        return points.to_vec();
    }
    let start = points
        .iter()
        .copied()
        .fold(points[0], |best, p| if lex_lt(&p, &best) { p } else { best });

    let mut hull = Vec::new();
    let mut last = start;
    loop {
        hull.push(last);
        // Seed with any point that differs from `last`; many may coincide.
        let mut best = points.iter().copied().find(|p| *p != last).unwrap_or(last);
        for next in points {
            if more_clockwise(&last, next, &best) {
                best = *next;
            }
        }
        last = best;
        if last == hull[0] || hull.len() >= points.len() {
            break;
        }
    }
    hull
}

/// Hull around several convex CCW loops.
pub(crate) fn merge(loops: &[&[Point2]]) -> Vec<Point2> {
    let cleaned: Vec<Vec<Point2>> = loops
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| strip_redundant(l))
        .collect();
    let loops: Vec<&[Point2]> = cleaned.iter().map(|l| l.as_slice()).collect();
    if loops.is_empty() {
        return Vec::new();
    }
    let total: usize = loops.iter().map(|l| l.len()).sum();

    // Global start: the leftmost (then lowest) of each loop's leftmost vertex.
    let mut owner = 0;
    let mut index = leftmost(loops[0]);
    for (k, l) in loops.iter().enumerate().skip(1) {
        let i = leftmost(l);
        if lex_lt(&l[i], &loops[owner][index]) {
            owner = k;
            index = i;
        }
    }

    let mut hull: Vec<Point2> = Vec::new();
    let mut last = loops[owner][index];
    loop {
        hull.push(last);
        // The owner's own successor is always a candidate: its whole loop lies
        // left of the edge towards it.
        let own = loops[owner];
        let mut best: Option<(usize, usize)> = None;
        let next = (index + 1) % own.len();
        if own[next] != last {
            best = Some((owner, next));
        }
        for (k, l) in loops.iter().enumerate() {
            if k == owner {
                continue;
            }
            let i = most_clockwise(&last, l);
            let candidate = l[i];
            if candidate == last {
                continue;
            }
            let better = match best {
                None => true,
                Some((bk, bi)) => more_clockwise(&last, &candidate, &loops[bk][bi]),
            };
            if better {
                best = Some((k, i));
            }
        }
        let Some((k, i)) = best else {
            // Every loop collapsed onto `last`.
            break;
        };
        owner = k;
        index = i;
        last = loops[k][i];
        if last == hull[0] {
            break;
        }
        if hull.len() >= total {
            // The walk did not close, so some tangent search went astray on a
            // loop that is not strictly convex after rounding.
            let all: Vec<Point2> = loops.iter().flat_map(|l| l.iter().copied()).collect();
            return gift_wrapping(&all);
        }
    }
    hull
}

/// Drops repeated vertices and vertices lying on the line through their
/// neighbours. Both leave ties that the cyclic search cannot orient. A loop
/// with no corner left comes back as its extreme points.
fn strip_redundant(vertices: &[Point2]) -> Vec<Point2> {
    let mut distinct: Vec<Point2> = Vec::with_capacity(vertices.len());
    for v in vertices {
        if distinct.last() != Some(v) {
            distinct.push(*v);
        }
    }
    while distinct.len() > 1 && distinct.first() == distinct.last() {
        distinct.pop();
    }
    let n = distinct.len();
    if n < 3 {
        return distinct;
    }
    let corners: Vec<Point2> = (0..n)
        .filter(|&i| is_left(&distinct[(i + n - 1) % n], &distinct[i], &distinct[(i + 1) % n]) != 0.0)
        .map(|i| distinct[i])
        .collect();
    if corners.len() < 3 {
        return gift_wrapping(&distinct);
    }
    corners
}

/// Index of the lexicographically smallest vertex of a convex loop.
pub(crate) fn leftmost(vertices: &[Point2]) -> usize {
    cyclic_best(vertices.len(), |a, b| lex_lt(&vertices[a], &vertices[b]))
}

/// Index of the vertex of a convex loop that is most clockwise seen from
/// `last` (the right tangent from `last`). `last` may coincide with a vertex.
pub(crate) fn most_clockwise(last: &Point2, vertices: &[Point2]) -> usize {
    cyclic_best(vertices.len(), |a, b| {
        let (pa, pb) = (&vertices[a], &vertices[b]);
        if pa == last {
            return false;
        }
        pb == last || more_clockwise(last, pa, pb)
    })
}

/// Finds the best index of a cyclic sequence that is unimodal under `better`
/// (one ascending run, one descending run), as vertex orders on a convex loop
/// are.
///
/// Binary search in the manner of the classic point-to-polygon tangent
/// search, followed by a local climb that settles ties and degenerate runs.
fn cyclic_best<F>(n: usize, better: F) -> usize
where
    F: Fn(usize, usize) -> bool,
{
    if n <= 3 {
        return (1..n).fold(0, |best, i| if better(i, best) { i } else { best });
    }
    let next = |i: usize| (i + 1) % n;
    let prev = |i: usize| (i + n - 1) % n;

    let mut guess = 0;
    if !(better(next(0), 0) || better(prev(0), 0)) {
        return climb(n, 0, &better);
    }
    let (mut lo, mut hi) = (0usize, n);
    // Each round halves [lo, hi); bail out to the climb if it stops shrinking.
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        guess = mid;
        let down_mid = better(mid, next(mid));
        if down_mid && !better(prev(mid), mid) {
            break;
        }
        let up_lo = better(next(lo), lo);
        if up_lo {
            if down_mid || better(lo, mid) {
                hi = mid;
            } else {
                lo = mid;
            }
        } else if !down_mid || !better(mid, lo) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    climb(n, guess, &better)
}

/// Walks to a neighbour while it is strictly better. On a unimodal cycle this
/// ends at the global best.
fn climb<F>(n: usize, start: usize, better: &F) -> usize
where
    F: Fn(usize, usize) -> bool,
{
    let mut cur = start;
    for _ in 0..n {
        let (fwd, back) = ((cur + 1) % n, (cur + n - 1) % n);
        if better(fwd, cur) {
            cur = fwd;
        } else if better(back, cur) {
            cur = back;
        } else {
            break;
        }
    }
    cur
}
