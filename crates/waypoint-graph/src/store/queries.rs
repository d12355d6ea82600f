//! Query methods for Graph.

use super::super::{Edge, GraphError, Result, VertexId, VertexLabel};
use super::graph::Graph;

impl Graph {
    /// Number of vertices (`N`).
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of edges across all adjacency lists.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|vertex| vertex.edges.len()).sum()
    }

    /// Maximum number of vertices this graph accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `id` lies in `1..=N`.
    pub fn is_valid_vertex(&self, id: VertexId) -> bool {
        id.get() >= 1 && id.get() <= self.vertices.len()
    }

    /// Every vertex id with its label, in id order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = (VertexId, &VertexLabel)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (VertexId::from_index(index), &vertex.label))
    }

    /// Every vertex id, in order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + use<> {
        (0..self.vertices.len()).map(VertexId::from_index)
    }

    pub fn label(&self, id: VertexId) -> Result<&VertexLabel> {
        self.check_vertex(id)?;
        Ok(&self.vertices[id.index()].label)
    }

    /// Outgoing edges of `id`, most recently inserted first.
    pub fn edges(&self, id: VertexId) -> Result<impl ExactSizeIterator<Item = Edge> + '_> {
        self.check_vertex(id)?;
        Ok(self.vertices[id.index()].edges.iter().copied())
    }

    /// Whether `id` has at least one outgoing edge.
    pub fn has_edges(&self, id: VertexId) -> Result<bool> {
        self.check_vertex(id)?;
        Ok(!self.vertices[id.index()].edges.is_empty())
    }

    /// Number of outgoing edges of `id`.
    pub fn out_degree(&self, id: VertexId) -> Result<usize> {
        self.check_vertex(id)?;
        Ok(self.vertices[id.index()].edges.len())
    }

    /// The edge `source -> dest`, if present.
    pub fn find_edge(&self, source: VertexId, dest: VertexId) -> Result<Option<Edge>> {
        self.check_vertex(source)?;
        self.check_vertex(dest)?;
        Ok(self.vertices[source.index()]
            .edges
            .iter()
            .find(|edge| edge.dest == dest)
            .copied())
    }

    pub(super) fn check_vertex(&self, id: VertexId) -> Result<()> {
        if self.is_valid_vertex(id) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: id,
                count: self.vertices.len(),
            })
        }
    }
}
