//! `ConvexPolygon`: a CCW vertex loop plus the transformation that moved it.
//!
//! Invariants (trusted, not verified):
//! - Vertices are convex and wound counter-clockwise; the loop closes
//!   implicitly from the last vertex back to the first.
//! - Interior colinear vertices are tolerated but cost time.
//!
//! `convex_hull` and `convex_hull_merge` are the only constructors that
//! establish the invariants themselves.

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::hull::{gift_wrapping, merge};
use super::point::{bounds, proper_edges, twice_area};
use super::{collide, is_left, Point2, Transformation};

/// Maximum number of vertices printed by `Display`.
const DISPLAY_LIMIT: usize = 32;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConvexPolygon {
    vertices: Vec<Point2>,
    transformation: Transformation,
}

impl ConvexPolygon {
    /// Wraps `vertices` as given. They must already be convex and CCW.
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self {
            vertices,
            transformation: Transformation::identity(),
        }
    }

    /// Smallest convex polygon (CCW) enclosing an arbitrary point multiset.
    ///
    /// Fewer than three points come back unchanged; colinear and duplicate
    /// points collapse to the extreme ones.
    pub fn convex_hull(points: &[Point2]) -> Self {
        Self::new(gift_wrapping(points))
    }

    /// Convex hull around several already-convex polygons.
    ///
    /// No input gives an empty polygon; a single input comes back unchanged.
    pub fn convex_hull_merge<'a, I>(polygons: I) -> Self
    where
        I: IntoIterator<Item = &'a ConvexPolygon>,
    {
        let polygons: Vec<&ConvexPolygon> = polygons.into_iter().collect();
        match polygons.as_slice() {
            [] => Self::default(),
            [only] => (*only).clone(),
            _ => {
                let loops: Vec<&[Point2]> = polygons.iter().map(|p| p.vertices()).collect();
                Self::new(merge(&loops))
            }
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Product of every `translate`/`rotate` since construction. Its inverse
    /// maps the current vertices back onto the original ones.
    #[inline]
    pub fn current_transformation(&self) -> &Transformation {
        &self.transformation
    }

    /// Signed area by the shoelace formula; positive for CCW loops, zero below
    /// three vertices.
    pub fn area(&self) -> f64 {
        twice_area(&self.vertices) / 2.0
    }

    /// Strict containment: the point must be left of every edge. Points on
    /// an edge or vertex are outside, and nothing is inside a loop without
    /// positive area. Repeated vertices are skipped.
    pub fn contains(&self, point: &Point2) -> bool {
        let v = &self.vertices;
        if twice_area(v) <= 0.0 {
            return false;
        }
        let n = v.len();
        proper_edges(v).all(|i| is_left(&v[i], &v[(i + 1) % n], point) > 0.0)
    }

    /// Whether the interiors overlap by a positive area. Shared edges or
    /// vertices do not count.
    pub fn collides(&self, other: &ConvexPolygon) -> bool {
        collide::collides(&self.vertices, &other.vertices)
    }

    /// Moves the polygon by `(x, y)`.
    pub fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        let mut op = Transformation::identity();
        op.translate(x, y);
        self.apply(&op)
    }

    /// Rotates counter-clockwise around the origin `(0, 0)`.
    ///
    /// To rotate around another point, translate it to the origin first and
    /// back afterwards.
    pub fn rotate(&mut self, angle_radians: f64) -> &mut Self {
        let mut op = Transformation::identity();
        op.rotate(angle_radians);
        self.apply(&op)
    }

    fn apply(&mut self, op: &Transformation) -> &mut Self {
        for v in &mut self.vertices {
            *v = op.apply(v);
        }
        self.transformation = op.compose(&self.transformation);
        self
    }

    /// Vertex average. `None` when empty.
    pub fn centroid(&self) -> Option<Point2> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vector2::zeros(), |acc, v| acc + v.coords);
        Some(Point2::from(sum / self.vertices.len() as f64))
    }

    /// Axis-aligned bounds `(min, max)`. `None` when empty.
    pub fn bounding_box(&self) -> Option<(Point2, Point2)> {
        bounds(&self.vertices)
    }
}

impl PartialEq for ConvexPolygon {
    /// Same loop regardless of which vertex it starts at.
    fn eq(&self, other: &Self) -> bool {
        let n = self.vertices.len();
        if n != other.vertices.len() {
            return false;
        }
        if n == 0 {
            return true;
        }
        (0..n).any(|offset| {
            (0..n).all(|i| self.vertices[i] == other.vertices[(i + offset) % n])
        })
    }
}

impl fmt::Display for ConvexPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            if i >= DISPLAY_LIMIT {
                return write!(f, "...]");
            }
            write!(f, "({},{})", v.x, v.y)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<Point2>> for ConvexPolygon {
    fn from(vertices: Vec<Point2>) -> Self {
        Self::new(vertices)
    }
}
