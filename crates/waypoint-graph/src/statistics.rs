use serde::{Deserialize, Serialize};

/// Basic statistics about a `Graph` useful for reports or logging.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphStatistics {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub capacity: usize,
    /// Vertices with at least one outgoing edge.
    pub source_count: usize,
    /// Ordered pairs `(s, d)`, `s != d`, with a finite distance. `None` while
    /// the table is stale.
    pub reachable_pair_count: Option<usize>,
}

impl GraphStatistics {
    pub fn new(
        vertex_count: usize,
        edge_count: usize,
        capacity: usize,
        source_count: usize,
        reachable_pair_count: Option<usize>,
    ) -> Self {
        Self {
            vertex_count,
            edge_count,
            capacity,
            source_count,
            reachable_pair_count,
        }
    }

    /// Ordered pairs of distinct vertices.
    pub fn pair_count(&self) -> usize {
        self.vertex_count * self.vertex_count.saturating_sub(1)
    }
}
