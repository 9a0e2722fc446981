//! Reading `config.toml`, with first-run creation.

use std::io::ErrorKind;
use std::path::Path;

use filicon_common::ConfigError;
use tracing::{debug, info};

use super::paths::{create_default_config, default_config_path};
use crate::schema::FiliconConfig;

/// Parse a config file. Sections and keys left out take their defaults;
/// validation is the caller's job.
pub fn load_from_path(path: &Path) -> Result<FiliconConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read {}: {e}",
                path.display()
            )));
        }
    };

    let config = toml::from_str::<FiliconConfig>(&text).map_err(|e| {
        ConfigError::ParseError(format!("{} is not valid config TOML: {e}", path.display()))
    })?;

    info!(path = %path.display(), contributions = config.contributions.len(), "config loaded");
    Ok(config)
}

/// Load `path`, or write the commented template there and use defaults.
pub fn load_or_create(path: &Path) -> Result<FiliconConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            debug!(path = %path.display(), "no config yet");
            create_default_config(path)?;
            Ok(FiliconConfig::default())
        }
        other => other,
    }
}

/// [`load_or_create`] at the per-user location from [`default_config_path`].
pub fn load_default() -> Result<FiliconConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}
