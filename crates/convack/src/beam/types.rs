//! Search nodes and the arena that owns them.

use crate::geom2::{ConvexPolygon, Point2};

/// Handle of a node in a `CandidateTree`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateId(pub usize);

/// Rigid placement of one polygon: recentre on its centroid, rotate by
/// `rotation` (CCW, radians), then move the centroid to `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub rotation: f64,
    pub target: Point2,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            target: Point2::origin(),
        }
    }
}

impl Placement {
    /// Applies this placement to `polygon` in place. The same polygon and
    /// placement always give bit-identical vertices.
    pub fn apply(&self, polygon: &mut ConvexPolygon) {
        let c = polygon.centroid().unwrap_or_else(Point2::origin);
        polygon
            .translate(-c.x, -c.y)
            .rotate(self.rotation)
            .translate(self.target.x, self.target.y);
    }

    /// Placed copy of `polygon`.
    pub fn applied(&self, polygon: &ConvexPolygon) -> ConvexPolygon {
        let mut out = polygon.clone();
        self.apply(&mut out);
        out
    }
}

/// One node of the search tree: a partial packing that extends its parent
/// by exactly one placed polygon.
#[derive(Clone, Debug)]
pub struct PackingCandidate {
    /// Index of the newly placed polygon in the caller's list.
    pub polygon: usize,
    pub placement: Placement,
    /// The polygon at its resolved position.
    pub pack_here: ConvexPolygon,
    pub parent: Option<CandidateId>,
    /// Number of polygons placed, this one included.
    pub depth: usize,
    score: f64,
}

impl PackingCandidate {
    /// Wasted fraction of the hull around everything placed so far. Lower is
    /// better.
    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// `1 - covered / hull_area` for a set of placed polygons; 0 when the hull
/// has no positive area.
pub fn waste_score(placed: &[&ConvexPolygon]) -> f64 {
    let covered: f64 = placed.iter().map(|p| p.area()).sum();
    let hull_area = ConvexPolygon::convex_hull_merge(placed.iter().copied()).area();
    if hull_area <= 0.0 {
        0.0
    } else {
        1.0 - covered / hull_area
    }
}

/// Arena of candidates; ids index into it.
///
/// A `CandidateId` is only meaningful for the tree whose `insert` returned
/// it. Lookups with an id from another tree panic when it is out of range.
#[derive(Clone, Debug, Default)]
pub struct CandidateTree {
    nodes: Vec<PackingCandidate>,
}

impl CandidateTree {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a node below `parent` (or a root) and scores it eagerly.
    pub fn insert(
        &mut self,
        parent: Option<CandidateId>,
        polygon: usize,
        placement: Placement,
        pack_here: ConvexPolygon,
    ) -> CandidateId {
        let (score, depth) = {
            let mut placed = parent.map(|p| self.placed(p)).unwrap_or_default();
            placed.push(&pack_here);
            (waste_score(&placed), placed.len())
        };
        let id = CandidateId(self.nodes.len());
        self.nodes.push(PackingCandidate {
            polygon,
            placement,
            pack_here,
            parent,
            depth,
            score,
        });
        id
    }

    /// # Panics
    /// If `id` was not issued by this tree.
    #[inline]
    pub fn get(&self, id: CandidateId) -> &PackingCandidate {
        &self.nodes[id.0]
    }

    /// Lookup that tolerates foreign ids.
    #[inline]
    pub fn try_get(&self, id: CandidateId) -> Option<&PackingCandidate> {
        self.nodes.get(id.0)
    }

    #[inline]
    pub fn score(&self, id: CandidateId) -> f64 {
        self.get(id).score
    }

    /// Walks from `id` up to its root.
    pub fn ancestors(&self, id: CandidateId) -> impl Iterator<Item = &PackingCandidate> + '_ {
        std::iter::successors(Some(self.get(id)), move |node| node.parent.map(|p| self.get(p)))
    }

    /// Placed polygons, root first.
    pub fn placed(&self, id: CandidateId) -> Vec<&ConvexPolygon> {
        let mut out: Vec<&ConvexPolygon> = self.ancestors(id).map(|n| &n.pack_here).collect();
        out.reverse();
        out
    }

    /// Insertion order as indices into the caller's list, root first.
    pub fn order(&self, id: CandidateId) -> Vec<usize> {
        let mut out: Vec<usize> = self.ancestors(id).map(|n| n.polygon).collect();
        out.reverse();
        out
    }

    /// `mask[i]` is set when polygon `i` is placed at or above `id`.
    pub fn placed_mask(&self, id: CandidateId, count: usize) -> Vec<bool> {
        let mut mask = vec![false; count];
        for node in self.ancestors(id) {
            if let Some(slot) = mask.get_mut(node.polygon) {
                *slot = true;
            }
        }
        mask
    }
}
