//! Dense all-pairs shortest-path table.
//!
//! One row per source vertex, one [`PathEntry`] per destination, stored in a
//! single flat `Vec` sized from the actual vertex count.

use serde::{Deserialize, Serialize};

use super::{Distance, VertexId};

/// Per-(source, destination) bookkeeping produced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    /// Whether Dijkstra finalized this destination for the row's source.
    pub visited: bool,
    /// Best known distance from the row's source.
    pub distance: Distance,
    /// Vertex immediately before the destination on the best known path.
    pub predecessor: Option<VertexId>,
}

impl PathEntry {
    pub const UNSET: PathEntry = PathEntry {
        visited: false,
        distance: Distance::Infinite,
        predecessor: None,
    };
}

impl Default for PathEntry {
    fn default() -> Self {
        Self::UNSET
    }
}

/// N×N table of [`PathEntry`] values indexed by one-based vertex ids.
///
/// Callers are expected to pass ids that were validated against the owning
/// graph; out-of-range ids panic like slice indexing does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathTable {
    size: usize,
    entries: Vec<PathEntry>,
}

impl PathTable {
    /// A fully reset table for `size` vertices.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            entries: vec![PathEntry::UNSET; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Reset every entry to unvisited / infinite / no predecessor, resizing
    /// to `size` vertices.
    pub fn reset(&mut self, size: usize) {
        self.size = size;
        self.entries.clear();
        self.entries.resize(size * size, PathEntry::UNSET);
    }

    pub fn entry(&self, source: VertexId, dest: VertexId) -> &PathEntry {
        &self.entries[self.slot(source, dest)]
    }

    pub fn entry_mut(&mut self, source: VertexId, dest: VertexId) -> &mut PathEntry {
        let slot = self.slot(source, dest);
        &mut self.entries[slot]
    }

    /// All entries for one source, in destination order.
    pub fn row(&self, source: VertexId) -> &[PathEntry] {
        let start = self.slot(source, VertexId::from_index(0));
        &self.entries[start..start + self.size]
    }

    pub fn distance(&self, source: VertexId, dest: VertexId) -> Distance {
        self.entry(source, dest).distance
    }

    pub fn predecessor(&self, source: VertexId, dest: VertexId) -> Option<VertexId> {
        self.entry(source, dest).predecessor
    }

    fn slot(&self, source: VertexId, dest: VertexId) -> usize {
        assert!(
            source.get() >= 1 && source.get() <= self.size,
            "source {} outside table of size {}",
            source,
            self.size
        );
        assert!(
            dest.get() >= 1 && dest.get() <= self.size,
            "dest {} outside table of size {}",
            dest,
            self.size
        );
        source.index() * self.size + dest.index()
    }
}
