//! Strongly-typed identifiers for simulation entities.
//!
//! A newtype keeps point indices from being confused with
//! original mesh vertex indices, which differ once a sampling
//! stride drops vertices.

use serde::{Deserialize, Serialize};

/// Index into the simulation's point-mass array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PointId(pub u32);

impl PointId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for PointId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
