//! Waypoint CLI entry point.
//!
//! Handles argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use waypoint_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);
    ui::set_quiet(args.quiet);

    let result = match &args.command {
        cli::Command::Show(show_args) => commands::show_execute(show_args, &args.global),
        cli::Command::Path(path_args) => commands::path_execute(path_args, &args.global),
        cli::Command::Check(check_args) => commands::check_execute(check_args, &args.global),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
