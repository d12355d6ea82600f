//! Check command implementation.
//!
//! Parses the input and reports what was read without computing any paths.

use crate::cli::{CheckArgs, GlobalArgs, OutputFormat};
use crate::commands::utils;
use crate::config::WaypointConfig;
use crate::error::{CliError, Result};
use crate::render::{self, CheckReport};
use crate::ui::{self, format_count};

/// Execute the check command.
///
/// # Errors
///
/// Returns the read error for a malformed file, and
/// [`CliError::RejectedEdges`] under `--strict` when any edge was rejected.
pub fn execute(args: &CheckArgs, global: &GlobalArgs) -> Result<()> {
    let config = WaypointConfig::load(global)?;
    let graphs = utils::load_graphs(&args.file, &config)?;

    match config.format {
        OutputFormat::Table => {
            for (index, parsed) in graphs.iter().enumerate() {
                print!("{}", render::render_check(index + 1, parsed));
            }
        }
        OutputFormat::Json => {
            let reports: Vec<_> = graphs
                .iter()
                .enumerate()
                .map(|(index, parsed)| CheckReport::new(index + 1, parsed))
                .collect();
            utils::print_json(&reports)?;
        }
    }

    let rejected = utils::rejected_count(&graphs);
    if rejected == 0 {
        ui::success(&format!(
            "{} read without rejected edges",
            format_count(graphs.len(), "graph", "graphs")
        ));
        return Ok(());
    }

    if args.strict {
        return Err(CliError::RejectedEdges { count: rejected });
    }
    ui::warning(&format!(
        "{} rejected, run with --strict to fail",
        format_count(rejected, "edge", "edges")
    ));
    Ok(())
}
