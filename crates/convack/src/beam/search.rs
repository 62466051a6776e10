use tracing::{debug, info_span, trace};

use crate::beam::placement::best_placement;
use crate::beam::types::{CandidateId, CandidateTree};
use crate::geom2::ConvexPolygon;
use crate::scene::{PackCfg, Scene};

/// Beam search driver. Stateless; all configuration comes from the `Scene`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BeamSearch;

impl BeamSearch {
    /// Packs `polygons` in place. Their order in the slice is unchanged; each
    /// one is moved by a rigid transformation recorded in its
    /// `current_transformation`.
    pub fn pack(scene: &Scene, polygons: &mut [ConvexPolygon]) {
        if polygons.is_empty() {
            return;
        }
        let cfg = scene.cfg();
        let span = info_span!("beam_pack", polygons = polygons.len(), beam_width = cfg.beam_width);
        let _guard = span.enter();

        let mut tree = CandidateTree::new();
        let Some(best) = Self::search(cfg, polygons, &mut tree) else {
            return;
        };
        debug!(
            score = tree.score(best),
            nodes = tree.len(),
            order = ?tree.order(best),
            "beam search finished"
        );
        for node in tree.ancestors(best) {
            node.placement.apply(&mut polygons[node.polygon]);
        }
    }

    /// Runs the search into `tree` and returns the best complete candidate,
    /// or `None` when there is nothing to place.
    pub fn search(
        cfg: &PackCfg,
        polygons: &[ConvexPolygon],
        tree: &mut CandidateTree,
    ) -> Option<CandidateId> {
        let n = polygons.len();
        let mut frontier: Vec<CandidateId> = polygons
            .iter()
            .enumerate()
            .map(|(i, poly)| Self::expand(cfg, tree, None, i, poly))
            .collect();
        Self::keep_best(tree, &mut frontier, cfg.beam_width);

        for depth in 2..=n {
            let mut children = Vec::with_capacity(frontier.len() * (n + 1 - depth));
            for &id in &frontier {
                let mask = tree.placed_mask(id, n);
                for (i, poly) in polygons.iter().enumerate() {
                    if !mask[i] {
                        children.push(Self::expand(cfg, tree, Some(id), i, poly));
                    }
                }
            }
            frontier = children;
            Self::keep_best(tree, &mut frontier, cfg.beam_width);
            debug!(
                depth,
                frontier = frontier.len(),
                best = frontier.first().map(|&id| tree.score(id)),
                "beam round"
            );
        }
        frontier.first().copied()
    }

    fn expand(
        cfg: &PackCfg,
        tree: &mut CandidateTree,
        parent: Option<CandidateId>,
        index: usize,
        polygon: &ConvexPolygon,
    ) -> CandidateId {
        let (placement, here) = {
            let placed = parent.map(|p| tree.placed(p)).unwrap_or_default();
            best_placement(cfg, &placed, polygon)
        };
        let id = tree.insert(parent, index, placement, here);
        trace!(polygon = index, score = tree.score(id), "candidate");
        id
    }

    /// Stable sort by ascending score, then truncate to the beam width.
    fn keep_best(tree: &CandidateTree, frontier: &mut Vec<CandidateId>, width: usize) {
        frontier.sort_by(|a, b| tree.score(*a).total_cmp(&tree.score(*b)));
        frontier.truncate(width.max(1));
    }
}
