use crate::config::WaypointConfig;
use crate::error::{ConfigError, Result};

impl WaypointConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.max_vertices == 0 {
            return Err(ConfigError::InvalidValue {
                field: "maxVertices".to_string(),
                value: "0".to_string(),
                hint: "A graph needs room for at least one vertex".to_string(),
            }
            .into());
        }

        if self.unreachable_marker.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "unreachableMarker".to_string(),
                value: format!("{:?}", self.unreachable_marker),
                hint: "Use visible text such as \"--\" or \"inf\"".to_string(),
            }
            .into());
        }

        if self.unreachable_marker.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidValue {
                field: "unreachableMarker".to_string(),
                value: format!("{:?}", self.unreachable_marker),
                hint: "The marker must fit on a single line".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
