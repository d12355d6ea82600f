//! In-memory Graph implementation.
//!
//! The struct lives in `graph`; each other module adds one group of methods
//! through its own `impl Graph` block.

mod construction;
mod graph;
mod mutations;
mod paths;
mod queries;
mod statistics;

pub use graph::{DEFAULT_CAPACITY, Graph};

pub(crate) use graph::VertexNode;
