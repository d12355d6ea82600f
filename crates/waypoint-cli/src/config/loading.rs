use crate::cli::GlobalArgs;
use crate::config::{CONFIG_FILE, ConfigOverrides, ENV_PREFIX, WaypointConfig, env_field};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use std::path::{Path, PathBuf};
use tracing::debug;

impl WaypointConfig {
    /// Load configuration relative to the current working directory.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(args: &GlobalArgs) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_in(args, &cwd)
    }

    /// Load configuration, resolving the config file against `dir`.
    ///
    /// An explicit `--config` path must exist; the implicit
    /// `waypoint.config.json` is optional.
    pub fn load_in(args: &GlobalArgs, dir: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_file(args, dir)? {
            debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        // WAYPOINT_MAX_VERTICES, WAYPOINT_FORMAT, ...
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .filter_map(|key| env_field(key.as_str()).map(Into::into))
                .lowercase(false),
        );

        figment = figment.merge(Serialized::defaults(ConfigOverrides::from(args)));

        let config: Self = figment
            .extract()
            .map_err(|e| ConfigError::Extract(e.to_string()))?;
        config.validate()?;

        debug!(?config, "configuration loaded");
        Ok(config)
    }
}

fn config_file(args: &GlobalArgs, dir: &Path) -> Result<Option<PathBuf>> {
    match &args.config {
        Some(path) => {
            let path = dir.join(path);
            if path.is_file() {
                Ok(Some(path))
            } else {
                Err(ConfigError::NotFound(path).into())
            }
        }
        None => {
            let default_path = dir.join(CONFIG_FILE);
            Ok(default_path.is_file().then_some(default_path))
        }
    }
}
