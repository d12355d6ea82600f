use clap::{Args, Subcommand};
use std::path::PathBuf;
use waypoint_graph::VertexId;

use crate::cli::validation::{parse_positive, parse_vertex_id};

/// Available Waypoint subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every shortest path of every graph in a file
    ///
    /// For each source vertex, lists each other vertex with the distance
    /// and the full vertex sequence, or the unreachable marker.
    Show(ShowArgs),

    /// Print the shortest path between two vertices
    ///
    /// Shows the distance, the vertex ids along the path, and (unless
    /// disabled in the config) the label of every vertex on it.
    Path(PathArgs),

    /// Validate a graph file without computing paths
    ///
    /// Reports vertex and edge counts per graph and lists every edge the
    /// graph rejected (unknown vertex, negative or oversized weight).
    Check(CheckArgs),
}

/// Arguments for the show command
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Graph description file (`-` reads stdin)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for the path command
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Graph description file (`-` reads stdin)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Source vertex id (1-based)
    #[arg(value_name = "SOURCE", value_parser = parse_vertex_id)]
    pub source: VertexId,

    /// Destination vertex id (1-based)
    #[arg(value_name = "DEST", value_parser = parse_vertex_id)]
    pub dest: VertexId,

    /// Which graph of the file to query (1-based)
    #[arg(short, long, value_name = "INDEX", default_value_t = 1, value_parser = parse_positive)]
    pub graph: usize,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Graph description file (`-` reads stdin)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Exit with an error if any edge was rejected
    #[arg(long)]
    pub strict: bool,
}
