//! Exact 2D geometry for convex polygons.
//!
//! Purpose
//! - Provide `ConvexPolygon` (CCW vertex loop plus the accumulated
//!   `Transformation`) and the predicates the packer needs: hull construction,
//!   signed area, strict containment and interior collision.
//!
//! Conventions
//! - Predicates are exact sign tests on `is_left`; no epsilons. Touching
//!   boundaries never count as containment or collision.
//! - Degenerate polygons (0, 1 or 2 vertices) are valid values with zero area.
//!
//! Code cross-refs: `hull::{gift_wrapping, merge}`, `collide::separating_axis_exists`

mod collide;
mod hull;
mod point;
mod polygon;
mod transformation;

pub use collide::separating_axis_exists;
pub use point::{is_left, lex_lt, Point2};
pub use polygon::ConvexPolygon;
pub use transformation::Transformation;

#[cfg(test)]
mod tests;
