//! Waypoint CLI - all-pairs shortest paths over weighted directed graphs.
//!
//! This crate provides the `waypoint` binary on top of `waypoint-graph`:
//! it reads graph description files, computes every shortest path, and
//! prints the results as the classic text table or as JSON.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - Layered configuration (defaults, file, environment, flags)
//! - [`commands`] - One module per subcommand
//! - [`render`] - Text and JSON reports
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages on stderr
//!
//! # Example
//!
//! ```rust
//! use waypoint_cli::config::WaypointConfig;
//! use waypoint_cli::render::render_all;
//! use waypoint_graph::read_graphs;
//!
//! let mut parsed = read_graphs("2\nA\nB\n1 2 4\n0 0 0\n", 100).unwrap();
//! let graph = &mut parsed[0].graph;
//! graph.compute_shortest_paths();
//!
//! let text = render_all(graph, &WaypointConfig::default()).unwrap();
//! assert!(text.contains("1 2"));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod render;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
