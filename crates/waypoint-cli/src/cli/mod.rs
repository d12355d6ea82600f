//! Command-line interface definition for Waypoint.
//!
//! # Command Structure
//!
//! - `waypoint show` - Every shortest path of every graph in a file
//! - `waypoint path` - One source/destination pair
//! - `waypoint check` - Read and validate a file without computing paths

mod commands;
pub mod enums;
mod tests;
mod validation;

use clap::{Args, Parser};
use std::path::PathBuf;

pub use commands::{CheckArgs, Command, PathArgs, ShowArgs};
pub use enums::*;
pub use validation::{parse_positive, parse_vertex_id};

/// Waypoint - all-pairs shortest paths for weighted directed graphs
#[derive(Parser, Debug)]
#[command(
    name = "waypoint",
    version,
    about = "All-pairs shortest paths for weighted directed graphs",
    long_about = "Waypoint reads graph description files (a vertex count, one label per line,\n\
                  then `source dest weight` triples ended by a source of 0), runs Dijkstra\n\
                  from every vertex, and prints distances with their full paths."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Options that override configuration values for every command.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    /// Path to a config file (default: ./waypoint.config.json if present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Maximum number of vertices accepted per graph
    #[arg(long, global = true, value_name = "N", value_parser = parse_positive)]
    pub max_vertices: Option<usize>,

    /// Output format for reports
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}
