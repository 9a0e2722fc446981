//! Where the config lives, and the first-run template.

use std::path::{Path, PathBuf};

use filicon_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// `<config dir>/filicon/config.toml`, e.g. `~/.config/filicon/config.toml`
/// on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| base.join("filicon").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("no per-user config directory on this platform".into()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_failed =
        |e: std::io::Error| ConfigError::ParseError(format!("cannot create {}: {e}", path.display()));

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(write_failed)?;
    }
    std::fs::write(path, default_config_toml()).map_err(write_failed)?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
