//! Configuration system for Waypoint with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment (`WAYPOINT_*`) > `waypoint.config.json` > Defaults

mod defaults;
mod loading;
mod types;
mod validation;

use serde::{Deserialize, Serialize};

pub use defaults::*;
pub use types::*;

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "waypoint.config.json";

/// Prefix of the environment variables read by [`WaypointConfig::load`].
pub const ENV_PREFIX: &str = "WAYPOINT_";

/// Waypoint configuration - loaded from waypoint.config.json, the
/// environment, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WaypointConfig {
    /// Maximum number of vertices accepted per graph
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,

    /// Text printed in place of an infinite distance
    #[serde(default = "default_unreachable_marker")]
    pub unreachable_marker: String,

    /// Report format (table, json)
    #[serde(default)]
    pub format: OutputFormat,

    /// Print vertex labels under a single-pair report
    #[serde(default = "default_show_labels")]
    pub show_labels: bool,
}

impl Default for WaypointConfig {
    fn default() -> Self {
        Self {
            max_vertices: default_max_vertices(),
            unreachable_marker: default_unreachable_marker(),
            format: OutputFormat::default(),
            show_labels: default_show_labels(),
        }
    }
}
