//! Command implementations.
//!
//! Each subcommand lives in its own module and exposes a synchronous
//! `execute` taking its parsed arguments plus the global flags. All of them
//! share the same pipeline from `utils`: resolve configuration, read the
//! input, parse every graph in it.

pub mod check;
pub mod path;
pub mod show;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use path::execute as path_execute;
pub use show::execute as show_execute;
