//! Terminal UI utilities for status messages.
//!
//! Everything here writes to stderr; reports go to stdout through
//! [`crate::render`]. Colors follow `--no-color`, `NO_COLOR` and
//! `FORCE_COLOR`, falling back to terminal detection. `--quiet` keeps
//! only error messages.
//!
//! # Examples
//!
//! ```no_run
//! use waypoint_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Computed shortest paths for 2 graphs");
//! ui::warning("1 edge was rejected");
//! ```

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_count, print_summary};
pub use messages::{error, success, warning};

static COLORS: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide once whether status messages are colored.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

/// Silence everything but [`error`] messages (`--quiet`).
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub(crate) fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_should_use_color_no_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::remove_var("FORCE_COLOR");
        }
        assert!(!should_use_color());
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_should_use_color_force_color() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(should_use_color());
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_no_color_flag_disables_colors() {
        unsafe {
            std::env::set_var("FORCE_COLOR", "1");
        }
        init_colors(true);
        assert!(!colors_enabled());

        init_colors(false);
        assert!(colors_enabled());
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
        init_colors(true);
    }

    #[test]
    #[serial]
    fn test_set_quiet() {
        set_quiet(true);
        assert!(is_quiet());
        // Suppressed, must not panic
        success("hidden");
        set_quiet(false);
        assert!(!is_quiet());
    }
}
