//! Mutation methods for Graph.
//!
//! Each successful mutation drops the shortest-path table. Failed mutations
//! leave the graph, table included, exactly as it was.

use tracing::debug;

use super::super::{Edge, GraphError, Result, VertexId, VertexLabel, Weight};
use super::graph::{Graph, VertexNode};

impl Graph {
    /// Append a vertex and return its id.
    pub fn add_vertex(&mut self, label: impl Into<VertexLabel>) -> Result<VertexId> {
        if self.vertices.len() >= self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.vertices.push(VertexNode::new(label.into()));
        self.invalidate();
        Ok(VertexId::new(self.vertices.len()))
    }

    /// Insert `source -> dest` with `weight`, or overwrite the weight of the
    /// existing edge. New edges go to the front of the adjacency list.
    pub fn insert_edge(&mut self, source: VertexId, dest: VertexId, weight: i64) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(dest)?;
        let weight = check_weight(weight)?;

        match self.find_edge_mut(source, dest) {
            Some(edge) => edge.weight = weight,
            None => self.vertices[source.index()]
                .edges
                .push_front(Edge::new(dest, weight)),
        }

        self.invalidate();
        Ok(())
    }

    /// Remove `source -> dest`. Returns whether an edge was removed.
    pub fn remove_edge(&mut self, source: VertexId, dest: VertexId) -> Result<bool> {
        self.check_vertex(source)?;
        self.check_vertex(dest)?;

        let edges = &mut self.vertices[source.index()].edges;
        if edges.is_empty() {
            return Ok(false);
        }

        let Some(position) = edges.iter().position(|edge| edge.dest == dest) else {
            return Ok(false);
        };
        edges.remove(position);

        self.invalidate();
        Ok(true)
    }

    fn find_edge_mut(&mut self, source: VertexId, dest: VertexId) -> Option<&mut Edge> {
        self.vertices[source.index()]
            .edges
            .iter_mut()
            .find(|edge| edge.dest == dest)
    }

    fn invalidate(&mut self) {
        if self.table.take().is_some() {
            debug!("graph mutated; shortest-path table invalidated");
        }
    }
}

fn check_weight(weight: i64) -> Result<Weight> {
    if weight < 0 {
        return Err(GraphError::NegativeWeight { weight });
    }
    Weight::try_from(weight).map_err(|_| GraphError::WeightOutOfRange { weight })
}
