//! Path command implementation.
//!
//! Reports the shortest route between two vertices of one graph.

use crate::cli::{GlobalArgs, OutputFormat, PathArgs};
use crate::commands::utils;
use crate::config::WaypointConfig;
use crate::error::{CliError, Result, ResultExt};
use crate::render::{self, PairReport};
use crate::ui::format_count;

/// Execute the path command.
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] when `--graph` points past the last
/// graph in the input, and a graph error when either vertex is out of range.
pub fn execute(args: &PathArgs, global: &GlobalArgs) -> Result<()> {
    let config = WaypointConfig::load(global)?;
    let mut graphs = utils::load_graphs(&args.file, &config)?;
    let available = graphs.len();

    let parsed = graphs
        .get_mut(args.graph - 1)
        .ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "graph {} does not exist, {} contains {}",
                args.graph,
                utils::input_name(&args.file),
                format_count(available, "graph", "graphs")
            ))
        })?;
    parsed.graph.compute_shortest_paths();
    let hint = format!(
        "Graph {} has vertex ids 1 to {}",
        args.graph,
        parsed.graph.vertex_count()
    );

    match config.format {
        OutputFormat::Table => {
            let report = render::render_pair(&parsed.graph, args.source, args.dest, &config)
                .with_hint(&hint)?;
            print!("{report}");
        }
        OutputFormat::Json => {
            let report = PairReport::new(args.graph, &parsed.graph, args.source, args.dest)
                .with_hint(&hint)?;
            utils::print_json(&report)?;
        }
    }
    Ok(())
}
