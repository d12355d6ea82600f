//! Formatting helpers for counts and run summaries.

use console::Term;
use owo_colors::OwoColorize;

use super::{colors_enabled, is_quiet};

/// Format a count with the right noun form.
///
/// # Examples
///
/// ```
/// use waypoint_cli::ui::format_count;
///
/// assert_eq!(format_count(1, "graph", "graphs"), "1 graph");
/// assert_eq!(format_count(3, "vertex", "vertices"), "3 vertices");
/// assert_eq!(format_count(0, "edge", "edges"), "0 edges");
/// ```
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Print a one-line run summary to stderr, framed by rules.
///
/// `rejected` is the total of rejected edges across all graphs. Nothing is
/// printed with `--quiet`.
pub fn print_summary(title: &str, graphs: usize, vertices: usize, rejected: usize) {
    if is_quiet() {
        return;
    }
    let width = (Term::stderr().size().1 as usize).min(60);
    let rule = "─".repeat(width);
    let counts = format!(
        "{}, {}",
        format_count(graphs, "graph", "graphs"),
        format_count(vertices, "vertex", "vertices")
    );
    let rejected_text = format_count(rejected, "rejected edge", "rejected edges");

    if colors_enabled() {
        eprintln!("{}", title.bold().underline());
        eprintln!("{}", rule.dimmed());
        if rejected == 0 {
            eprintln!("  {} {}", "▸".blue(), counts);
        } else {
            eprintln!("  {} {}, {}", "▸".blue(), counts, rejected_text.yellow());
        }
    } else {
        eprintln!("{}", title);
        eprintln!("{}", rule);
        if rejected == 0 {
            eprintln!("  ▸ {}", counts);
        } else {
            eprintln!("  ▸ {}, {}", counts, rejected_text);
        }
    }
}
