//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod stylesheet;
mod theme;

pub use logging::*;
pub use stylesheet::*;
pub use theme::*;

use filicon_common::ThemeContribution;
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FiliconConfig {
    pub theme: ThemeConfig,
    pub stylesheet: StylesheetConfig,
    pub logging: LoggingConfig,
    /// Theme files declared directly in the config.
    pub contributions: Vec<ThemeContribution>,
}
