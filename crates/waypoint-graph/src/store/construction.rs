//! Construction methods for Graph.

use super::super::{Result, VertexLabel};
use super::graph::{DEFAULT_CAPACITY, Graph};

impl Graph {
    /// Create an empty graph with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty graph that accepts at most `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            table: None,
        }
    }

    /// Construct a graph from labels (without edges). Ids are assigned
    /// `1..=N` in iteration order.
    pub fn from_labels<I, L>(labels: I, capacity: usize) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<VertexLabel>,
    {
        let mut graph = Self::with_capacity(capacity);
        for label in labels {
            graph.add_vertex(label)?;
        }
        Ok(graph)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
