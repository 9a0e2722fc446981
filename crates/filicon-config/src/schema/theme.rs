//! Icon theme selection.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Id of the icon theme to apply at startup.
    pub id: String,
    /// Directory scanned for `*.json` theme files, id = file stem.
    pub themes_dir: Option<PathBuf>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            id: "seti".into(),
            themes_dir: None,
        }
    }
}
