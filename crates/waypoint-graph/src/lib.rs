//! # waypoint-graph
//!
//! Weighted directed graphs with all-pairs shortest paths.
//!
//! This crate provides the graph store, the Dijkstra engine that fills a dense
//! shortest-path table, and path reconstruction over that table. Apart from
//! [`reader`], which parses the line-oriented graph description from a
//! `&str`, it performs no I/O.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                   Graph                      │
//! │  vertices: Vec<label + adjacency list>       │
//! │  table:    Option<PathTable>  (derived)      │
//! └──────────────┬───────────────────────────────┘
//!                │ compute_shortest_paths()
//!                ▼
//!      ┌───────────────────┐      ┌──────────────┐
//!      │  engine (Dijkstra │ ───▶ │  PathTable   │
//!      │  + lazy frontier) │      │  N × N       │
//!      └───────────────────┘      └──────┬───────┘
//!                                        │ predecessor walk
//!                                        ▼
//!                                 ┌──────────────┐
//!                                 │    Route     │
//!                                 └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use waypoint_graph::{Distance, Graph, Route, VertexId};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::from_labels(["A", "B", "C"], 10)?;
//! let (a, b, c) = (VertexId::new(1), VertexId::new(2), VertexId::new(3));
//!
//! graph.insert_edge(a, b, 5)?;
//! graph.insert_edge(b, c, 2)?;
//! graph.insert_edge(a, c, 10)?;
//!
//! graph.compute_shortest_paths();
//!
//! assert_eq!(graph.distance(a, c)?, Distance::Finite(7));
//! assert_eq!(graph.reconstruct_path(a, c)?, Some(vec![b, c]));
//! assert!(matches!(graph.shortest_path(a, c)?, Route::Reachable(_)));
//! # Ok(())
//! # }
//! ```
//!
//! ## Invalidation
//!
//! The table is derived data. Every successful mutation drops it, and table
//! queries return [`GraphError::StaleTable`] until
//! [`Graph::compute_shortest_paths`] runs again. Nothing is recomputed
//! implicitly.

pub mod distance;
pub mod edge;
mod engine;
mod frontier;
pub mod label;
pub mod path;
pub mod reader;
pub mod statistics;
pub mod table;
pub mod vertex_id;

// Graph implementation, split into impl blocks by concern
mod store;

pub use distance::Distance;
pub use edge::{Edge, Weight};
pub use label::VertexLabel;
pub use path::{Route, ShortestPath};
pub use reader::{ParsedGraph, ReadError, RejectedEdge, read_graphs};
pub use statistics::GraphStatistics;
pub use store::{DEFAULT_CAPACITY, Graph};
pub use table::{PathEntry, PathTable};
pub use vertex_id::VertexId;

/// Error types for graph operations.
///
/// Every variant is recoverable: the failing operation leaves the graph
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Vertex id outside `1..=count`.
    #[error("invalid vertex {vertex}: expected an id in 1..={count}")]
    InvalidVertex { vertex: VertexId, count: usize },

    /// Edge weight below zero.
    #[error("weight can not be negative (got {weight})")]
    NegativeWeight { weight: i64 },

    /// Edge weight above [`Weight::MAX`].
    #[error("weight {weight} exceeds the maximum of {max}", max = Weight::MAX)]
    WeightOutOfRange { weight: i64 },

    /// Adding a vertex would exceed the configured capacity.
    #[error("graph is full: capacity of {capacity} vertices reached")]
    CapacityExceeded { capacity: usize },

    /// Shortest paths were never computed, or a mutation invalidated them.
    #[error("shortest paths are stale: recompute after mutating the graph")]
    StaleTable,
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests;
