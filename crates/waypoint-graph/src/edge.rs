use serde::{Deserialize, Serialize};

use super::VertexId;

/// Edge weights are non-negative and bounded so that a finite distance plus a
/// weight can never overflow [`Distance`](crate::Distance).
pub type Weight = u32;

/// A directed, weighted edge owned by its source vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub dest: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(dest: VertexId, weight: Weight) -> Self {
        Self { dest, weight }
    }
}
