//! Miette diagnostic conversion for CLI errors.

use ::miette::Report;

use crate::error::CliError;
use waypoint_graph::ReadError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Read(e) => read_error_to_miette(e),
        CliError::Config(e) => ::miette::miette!("Configuration error: {}", e),
        _ => ::miette::miette!("{}", err),
    }
}

/// Convert ReadError to miette Report, with a hint about the file format.
pub fn read_error_to_miette(err: ReadError) -> Report {
    let hint = match &err {
        ReadError::InvalidVertexCount { .. } => {
            "Each graph starts with a line holding its vertex count"
        }
        ReadError::MissingLabel { .. } => "Give one label line per declared vertex",
        ReadError::InvalidToken { .. } | ReadError::TruncatedEdge { .. } => {
            "Edges are `source dest weight` integer triples, ended by a source of 0"
        }
        ReadError::Graph { .. } => "Raise --max-vertices or maxVertices in waypoint.config.json",
    };
    ::miette::miette!("Invalid graph file: {}\n\nHint: {}", err, hint)
}
