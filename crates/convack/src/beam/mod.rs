//! Beam search over polygon insertion orders.
//!
//! Purpose
//! - Polygons are packed one at a time. The order matters, so the search keeps
//!   the `beam_width` best partial orders per round and extends each of them
//!   by every polygon not placed yet.
//!
//! Design
//! - Search nodes live in an arena (`CandidateTree`) and refer to their parent
//!   by `CandidateId`; nothing borrows across rounds.
//! - A node's score is the fraction of its hull that is wasted space; lower is
//!   better. It is computed once, on insertion.
//! - Each insertion resolves a rigid `Placement` by sliding the polygon towards
//!   the origin until it touches what is already placed.
//!
//! Code cross-refs: `scene::PackCfg`, `geom2::ConvexPolygon::convex_hull_merge`

mod placement;
mod search;
mod types;

pub use placement::best_placement;
pub use search::BeamSearch;
pub use types::{waste_score, CandidateId, CandidateTree, PackingCandidate, Placement};
