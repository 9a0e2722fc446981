//! Filicon configuration.
//!
//! TOML-based configuration for theme selection, stylesheet generation and
//! logging. All sections use defaults, so partial configs work out of the box.
//!
//! ```rust,no_run
//! use filicon_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("active theme: {}", config.theme.id);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{FiliconConfig, LoggingConfig, StylesheetConfig, ThemeConfig};

use filicon_common::ConfigError;

/// Load and validate config from the platform default path.
///
/// Creates a commented default file if none exists yet.
pub fn load_config() -> Result<FiliconConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
