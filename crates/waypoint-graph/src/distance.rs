use std::fmt;

use serde::{Deserialize, Serialize};

use super::edge::Weight;

/// Shortest known distance between two vertices.
///
/// `Infinite` orders after every finite value, so the derived `Ord` is the
/// priority order the engine needs. Finite distances are `u64` while weights
/// are `u32`, which keeps `finite + weight` well inside range for any graph
/// that fits in memory.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Distance {
    Finite(u64),
    #[default]
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, or `None` for unreachable.
    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Infinite => None,
        }
    }

    /// Extend this distance by one edge. Infinity absorbs.
    pub fn extend(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(value) => Distance::Finite(value + u64::from(weight)),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => fmt::Display::fmt(value, f),
            Distance::Infinite => f.pad("inf"),
        }
    }
}
