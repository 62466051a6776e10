//! Error type for the fallible configuration surface.
//!
//! Geometry and search are total over their documented inputs; only packing
//! configuration can be rejected.

use thiserror::Error;

/// Result alias for convack operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A `PackCfg` field is out of range.
    #[error("invalid packing config: {reason}")]
    InvalidConfig { reason: String },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
