use std::collections::VecDeque;

use super::super::table::PathTable;
use super::super::{Edge, VertexLabel};

/// Capacity used by [`Graph::new`].
pub const DEFAULT_CAPACITY: usize = 100;

/// One vertex: its label and outgoing edges, most recently inserted first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VertexNode {
    pub label: VertexLabel,
    pub edges: VecDeque<Edge>,
}

impl VertexNode {
    pub fn new(label: VertexLabel) -> Self {
        Self {
            label,
            edges: VecDeque::new(),
        }
    }
}

/// A capacity-limited, directed, weighted graph with a cached shortest-path
/// table.
///
/// Vertex ids are dense and one-based. `Clone` produces an independent deep
/// copy, table included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub(super) vertices: Vec<VertexNode>,
    pub(super) capacity: usize,
    /// `None` until computed, and again after any mutation.
    pub(super) table: Option<PathTable>,
}
