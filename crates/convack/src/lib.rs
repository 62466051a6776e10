//! Convex polygon packing.
//!
//! Purpose
//! - Pack a set of convex polygons tightly around the origin. Every polygon is
//!   moved in place by a rigid transformation (rotation + translation) that is
//!   recorded alongside its vertices.
//!
//! Layout
//! - `geom2`: points, affine transformations, and the `ConvexPolygon` engine
//!   (hulls, area, containment, collision).
//! - `beam`: packing search over insertion orders, scored by wasted hull area.
//! - `scene`: the façade that owns the packing configuration.

pub mod beam;
pub mod error;
pub mod geom2;
pub mod scene;

pub use error::{Error, Result};
pub use geom2::{ConvexPolygon, Point2, Transformation};
pub use scene::{PackCfg, Scene};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::beam::{BeamSearch, CandidateId, CandidateTree, PackingCandidate, Placement};
    pub use crate::geom2::{is_left, ConvexPolygon, Point2, Transformation};
    pub use crate::scene::{PackCfg, Scene};
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
