//! Min-priority frontier for Dijkstra with lazy deletion.
//!
//! Improving a vertex's distance pushes a fresh entry instead of updating the
//! old one. Stale entries stay in the heap and are skipped by the engine when
//! they surface for an already-visited vertex.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{Distance, VertexId};

/// A pending vertex and the distance it was queued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct FrontierEntry {
    pub distance: Distance,
    /// Insertion sequence; breaks distance ties first-in first-out.
    seq: u64,
    pub vertex: VertexId,
}

#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_seq: u64,
}

impl Frontier {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, vertex: VertexId, distance: Distance) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(FrontierEntry {
            distance,
            seq,
            vertex,
        }));
    }

    /// Remove the entry with the smallest distance (oldest first on ties).
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_distance_order() {
        let mut frontier = Frontier::with_capacity(4);
        frontier.push(VertexId::new(1), Distance::Finite(10));
        frontier.push(VertexId::new(2), Distance::Finite(3));
        frontier.push(VertexId::new(3), Distance::Infinite);
        frontier.push(VertexId::new(4), Distance::Finite(7));

        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop())
            .map(|entry| entry.vertex.get())
            .collect();
        assert_eq!(order, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_ties_break_by_insertion_order() {
        let mut frontier = Frontier::with_capacity(3);
        frontier.push(VertexId::new(3), Distance::Infinite);
        frontier.push(VertexId::new(1), Distance::Infinite);
        frontier.push(VertexId::new(2), Distance::Infinite);

        assert_eq!(frontier.pop().map(|e| e.vertex.get()), Some(3));
        assert_eq!(frontier.pop().map(|e| e.vertex.get()), Some(1));
        assert_eq!(frontier.pop().map(|e| e.vertex.get()), Some(2));
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_stale_entries_are_kept() {
        let mut frontier = Frontier::with_capacity(2);
        frontier.push(VertexId::new(2), Distance::Infinite);
        frontier.push(VertexId::new(2), Distance::Finite(5));
        assert_eq!(frontier.len(), 2);

        let first = frontier.pop().expect("entry");
        assert_eq!(first.distance, Distance::Finite(5));
        let stale = frontier.pop().expect("stale entry");
        assert_eq!(stale.vertex, VertexId::new(2));
        assert_eq!(frontier.len(), 0);
    }
}
