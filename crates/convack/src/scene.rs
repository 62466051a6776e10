//! Packing entry point and its configuration.

use serde::{Deserialize, Serialize};

use crate::beam::BeamSearch;
use crate::error::{Error, Result};
use crate::geom2::ConvexPolygon;

/// Tuning knobs for the beam search and the per-step placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackCfg {
    /// Partial packings kept per round.
    pub beam_width: usize,
    /// Evenly spaced orientations tried per placement.
    pub rotations: usize,
    /// Evenly spaced approach headings tried per orientation.
    pub directions: usize,
    /// Bisection rounds on the slide distance.
    pub bisection_steps: usize,
}

impl Default for PackCfg {
    fn default() -> Self {
        Self {
            beam_width: 10,
            rotations: 4,
            directions: 12,
            bisection_steps: 24,
        }
    }
}

impl PackCfg {
    pub fn validate(&self) -> Result<()> {
        if self.beam_width == 0 {
            return Err(Error::invalid("beam_width must be at least 1"));
        }
        if self.rotations == 0 {
            return Err(Error::invalid("rotations must be at least 1"));
        }
        if self.directions == 0 {
            return Err(Error::invalid("directions must be at least 1"));
        }
        Ok(())
    }
}

/// Holds the packing configuration and runs the search.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    cfg: PackCfg,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cfg(cfg: PackCfg) -> Result<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    #[inline]
    pub fn cfg(&self) -> &PackCfg {
        &self.cfg
    }

    #[inline]
    pub fn beam_width(&self) -> usize {
        self.cfg.beam_width
    }

    /// Rejects 0 and leaves the current width untouched in that case.
    pub fn set_beam_width(&mut self, beam_width: usize) -> Result<()> {
        let cfg = PackCfg {
            beam_width,
            ..self.cfg
        };
        cfg.validate()?;
        self.cfg = cfg;
        Ok(())
    }

    /// Moves `polygons` in place into a tight, non-overlapping arrangement.
    /// Slice order is preserved.
    pub fn pack(&self, polygons: &mut [ConvexPolygon]) {
        BeamSearch::pack(self, polygons);
    }
}
