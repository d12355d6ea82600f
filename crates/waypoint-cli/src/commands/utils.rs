//! Shared input handling for command implementations.

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};
use waypoint_graph::{ParsedGraph, read_graphs};

use crate::config::WaypointConfig;
use crate::error::{Result, ResultExt};
use crate::ui::{self, format_count};

/// Path argument that reads from stdin.
pub const STDIN_PATH: &str = "-";

/// Human-readable name of an input path.
pub fn input_name(path: &Path) -> String {
    if path == Path::new(STDIN_PATH) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read the whole input, from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }
    std::fs::read_to_string(path).with_path(path)
}

/// Read and parse every graph in `path` with the configured capacity.
///
/// Rejected edges are reported as warnings but do not fail the read.
pub fn load_graphs(path: &Path, config: &WaypointConfig) -> Result<Vec<ParsedGraph>> {
    let input = read_input(path)?;
    debug!(bytes = input.len(), file = %input_name(path), "read input");

    let graphs = read_graphs(&input, config.max_vertices)?;
    info!(
        graphs = graphs.len(),
        file = %input_name(path),
        "parsed graph file"
    );

    for (index, parsed) in graphs.iter().enumerate() {
        if !parsed.rejected.is_empty() {
            ui::warning(&format!(
                "Graph {}: {} rejected",
                index + 1,
                format_count(parsed.rejected.len(), "edge was", "edges were")
            ));
        }
    }
    Ok(graphs)
}

/// Total rejected edges across `graphs`.
pub fn rejected_count(graphs: &[ParsedGraph]) -> usize {
    graphs.iter().map(|parsed| parsed.rejected.len()).sum()
}

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
