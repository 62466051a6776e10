//! 2D affine transformation recording where a polygon was moved.
//!
//! The homogeneous row `[0 0 1]` is implicit. Every operation left-composes
//! onto the current map, so chained calls apply in the order they were issued
//! and later translations move in world space.

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use super::Point2;

/// Affine map `x ↦ M x + t`, starting as the identity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transformation {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    /// The six matrix cells `[a, b, c, d, e, f]` of `[[a, c, e], [b, d, f]]`,
    /// column-major.
    pub fn data(&self) -> [f64; 6] {
        [
            self.m[(0, 0)],
            self.m[(1, 0)],
            self.m[(0, 1)],
            self.m[(1, 1)],
            self.t.x,
            self.t.y,
        ]
    }

    /// Appends a translation by `(x, y)`.
    pub fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.t += Vector2::new(x, y);
        self
    }

    /// Appends a counter-clockwise rotation around the origin.
    pub fn rotate(&mut self, angle_radians: f64) -> &mut Self {
        let (sine, cosine) = angle_radians.sin_cos();
        let r = Matrix2::new(cosine, -sine, sine, cosine);
        // Both products read the old values before anything is overwritten.
        *self = Self {
            m: r * self.m,
            t: r * self.t,
        };
        self
    }

    #[inline]
    pub fn apply(&self, point: &Point2) -> Point2 {
        Point2::from(self.m * point.coords + self.t)
    }

    /// Composition `self ∘ other`: `other` applies first.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    /// Inverse map if `m` is invertible.
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }
}
