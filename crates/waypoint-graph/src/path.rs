//! Path reconstruction from predecessor chains.

use serde::{Deserialize, Serialize};

use super::table::PathTable;
use super::{Distance, VertexId};

/// A reachable shortest path between two distinct vertices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    pub source: VertexId,
    pub dest: VertexId,
    /// Total weight. Always finite.
    pub distance: u64,
    /// Vertices after `source`, ending with `dest`.
    pub hops: Vec<VertexId>,
}

impl ShortestPath {
    /// Number of edges on the path.
    pub fn edge_count(&self) -> usize {
        self.hops.len()
    }

    /// Full vertex sequence including the source.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        std::iter::once(self.source).chain(self.hops.iter().copied())
    }

    /// Space-separated vertex ids, e.g. `"1 2 3"`.
    pub fn format_ids(&self) -> String {
        self.vertices()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Outcome of asking for the path between two vertices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Route {
    /// Source and destination are the same vertex; the path is empty.
    Trivial,
    Reachable(ShortestPath),
    Unreachable,
}

impl Route {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Route::Reachable(_))
    }

    pub fn as_path(&self) -> Option<&ShortestPath> {
        match self {
            Route::Reachable(path) => Some(path),
            _ => None,
        }
    }
}

/// Walk predecessors from `dest` back to `source`.
///
/// Returns the hops in source→dest order (source excluded, dest included),
/// an empty vector when `source == dest`, and `None` when `dest` cannot be
/// reached. Ids must be valid for `table`.
pub(crate) fn walk_predecessors(
    table: &PathTable,
    source: VertexId,
    dest: VertexId,
) -> Option<Vec<VertexId>> {
    if source == dest {
        return Some(Vec::new());
    }

    let mut hops = vec![dest];
    let mut current = dest;
    loop {
        let previous = table.predecessor(source, current)?;
        if previous == source {
            break;
        }
        // A chain longer than the vertex count can only be a cycle.
        if hops.len() >= table.size() {
            return None;
        }
        hops.push(previous);
        current = previous;
    }

    hops.reverse();
    Some(hops)
}

/// Build a [`Route`] from the table.
pub(crate) fn route(table: &PathTable, source: VertexId, dest: VertexId) -> Route {
    if source == dest {
        return Route::Trivial;
    }
    let Distance::Finite(distance) = table.distance(source, dest) else {
        return Route::Unreachable;
    };
    match walk_predecessors(table, source, dest) {
        Some(hops) => Route::Reachable(ShortestPath {
            source,
            dest,
            distance,
            hops,
        }),
        None => Route::Unreachable,
    }
}
