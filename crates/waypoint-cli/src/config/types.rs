use serde::Serialize;

use crate::cli::GlobalArgs;

// Re-export OutputFormat from cli module to avoid duplicate definitions
pub use crate::cli::OutputFormat;

/// The subset of [`super::WaypointConfig`] that command-line flags can set.
///
/// Unset flags are skipped when serialized so they never mask lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_vertices: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl From<&GlobalArgs> for ConfigOverrides {
    fn from(args: &GlobalArgs) -> Self {
        Self {
            max_vertices: args.max_vertices,
            format: args.format,
        }
    }
}

/// Config key for an environment variable name with [`super::ENV_PREFIX`]
/// already stripped. Unknown names map to `None` and are ignored.
pub fn env_field(name: &str) -> Option<&'static str> {
    match name.to_ascii_uppercase().as_str() {
        "MAX_VERTICES" => Some("maxVertices"),
        "UNREACHABLE_MARKER" => Some("unreachableMarker"),
        "FORMAT" => Some("format"),
        "SHOW_LABELS" => Some("showLabels"),
        _ => None,
    }
}
