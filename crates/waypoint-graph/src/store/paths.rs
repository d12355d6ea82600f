//! Shortest-path methods for Graph.

use super::super::engine::compute_all_pairs;
use super::super::path::{route, walk_predecessors};
use super::super::table::{PathEntry, PathTable};
use super::super::{Distance, GraphError, Result, Route, VertexId};
use super::graph::Graph;

impl Graph {
    /// Recompute the full table from the current adjacency lists.
    ///
    /// Runs Dijkstra from every vertex with at least one outgoing edge. Rows
    /// of edgeless sources stay reset (every distance infinite, including the
    /// distance to themselves).
    pub fn compute_shortest_paths(&mut self) {
        let mut table = self
            .table
            .take()
            .unwrap_or_else(|| PathTable::new(self.vertices.len()));
        compute_all_pairs(&self.vertices, &mut table);
        self.table = Some(table);
    }

    /// Whether the table reflects the current graph.
    pub fn is_computed(&self) -> bool {
        self.table.is_some()
    }

    /// The computed table.
    pub fn table(&self) -> Result<&PathTable> {
        self.table.as_ref().ok_or(GraphError::StaleTable)
    }

    pub fn entry(&self, source: VertexId, dest: VertexId) -> Result<PathEntry> {
        let table = self.checked_table(source, dest)?;
        Ok(*table.entry(source, dest))
    }

    pub fn distance(&self, source: VertexId, dest: VertexId) -> Result<Distance> {
        let table = self.checked_table(source, dest)?;
        Ok(table.distance(source, dest))
    }

    /// Vertices after `source` up to and including `dest`, in travel order.
    ///
    /// `Some(vec![])` when `source == dest`; `None` when `dest` is
    /// unreachable from `source`.
    pub fn reconstruct_path(&self, source: VertexId, dest: VertexId) -> Result<Option<Vec<VertexId>>> {
        let table = self.checked_table(source, dest)?;
        Ok(walk_predecessors(table, source, dest))
    }

    /// Distance and hops between two vertices as a single [`Route`].
    pub fn shortest_path(&self, source: VertexId, dest: VertexId) -> Result<Route> {
        let table = self.checked_table(source, dest)?;
        Ok(route(table, source, dest))
    }

    fn checked_table(&self, source: VertexId, dest: VertexId) -> Result<&PathTable> {
        self.check_vertex(source)?;
        self.check_vertex(dest)?;
        self.table()
    }
}
