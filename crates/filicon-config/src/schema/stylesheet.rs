//! Stylesheet generation settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StylesheetConfig {
    /// Class shared by every icon element.
    pub primary_class: String,
    pub font_family: String,
    /// Overrides the theme's own font file when set.
    pub font_path: Option<String>,
    /// Format of `font_path`. Defaults to `woff`.
    pub font_format: Option<String>,
    /// Where `compile` and `watch` write the stylesheet. Stdout when unset.
    pub output: Option<PathBuf>,
}

impl Default for StylesheetConfig {
    fn default() -> Self {
        Self {
            primary_class: "oni-icon".into(),
            font_family: "seti".into(),
            font_path: None,
            font_format: None,
            output: None,
        }
    }
}
