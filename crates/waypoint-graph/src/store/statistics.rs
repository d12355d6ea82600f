//! Statistics methods for Graph.

use super::super::GraphStatistics;
use super::graph::Graph;

impl Graph {
    /// Compute a statistics snapshot.
    pub fn statistics(&self) -> GraphStatistics {
        let source_count = self
            .vertices
            .iter()
            .filter(|vertex| !vertex.edges.is_empty())
            .count();

        let reachable_pair_count = self.table.as_ref().map(|table| {
            self.vertex_ids()
                .flat_map(move |source| {
                    table
                        .row(source)
                        .iter()
                        .enumerate()
                        .filter(move |(index, entry)| {
                            *index != source.index() && entry.distance.is_finite()
                        })
                })
                .count()
        });

        GraphStatistics::new(
            self.vertex_count(),
            self.edge_count(),
            self.capacity,
            source_count,
            reachable_pair_count,
        )
    }
}
