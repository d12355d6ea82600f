use std::fmt;

use serde::{Deserialize, Serialize};

/// One-based vertex identifier.
///
/// Ids are dense: a graph with `N` vertices uses exactly `1..=N`. A `VertexId`
/// can hold any value (including `0`) so callers can pass raw input through;
/// the graph rejects ids outside its range with
/// [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// The raw one-based value.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Zero-based slot in dense storage. Only meaningful for validated ids.
    pub(crate) const fn index(self) -> usize {
        self.0 - 1
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index + 1)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<usize> for VertexId {
    fn from(raw: usize) -> Self {
        Self(raw)
    }
}
