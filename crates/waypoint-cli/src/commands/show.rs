//! Show command implementation.
//!
//! Computes shortest paths for every graph in the input and prints the
//! all-pairs report.

use tracing::debug;

use crate::cli::{GlobalArgs, OutputFormat, ShowArgs};
use crate::commands::utils;
use crate::config::WaypointConfig;
use crate::error::{Result, ResultExt};
use crate::render::{self, EMPTY_GRAPH_MESSAGE, GraphReport};
use crate::ui;

/// Execute the show command.
///
/// # Errors
///
/// Returns errors for unreadable input, malformed graph files and invalid
/// configuration.
pub fn execute(args: &ShowArgs, global: &GlobalArgs) -> Result<()> {
    let config = WaypointConfig::load(global)?;
    let mut graphs = utils::load_graphs(&args.file, &config)?;

    for parsed in &mut graphs {
        parsed.graph.compute_shortest_paths();
    }
    debug!(graphs = graphs.len(), "computed shortest paths");

    match config.format {
        OutputFormat::Table => {
            if graphs.is_empty() {
                println!("{EMPTY_GRAPH_MESSAGE}");
            }
            for (index, parsed) in graphs.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                let table = render::render_all(&parsed.graph, &config)
                    .context(format!("graph {}", index + 1))?;
                print!("{table}");
            }
        }
        OutputFormat::Json => {
            let reports = graphs
                .iter()
                .enumerate()
                .map(|(index, parsed)| GraphReport::new(index + 1, parsed))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            utils::print_json(&reports)?;
        }
    }

    let vertices = graphs.iter().map(|parsed| parsed.graph.vertex_count()).sum();
    ui::print_summary(
        &utils::input_name(&args.file),
        graphs.len(),
        vertices,
        utils::rejected_count(&graphs),
    );
    Ok(())
}
