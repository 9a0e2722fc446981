//! Icon theme data model.
//!
//! Field names follow the JSON theme file format (`camelCase`). Every
//! mapping may be absent, which is the same as being empty.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One named glyph in the icon font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconDefinition {
    pub font_character: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
}

impl IconDefinition {
    pub fn new(font_character: impl Into<String>) -> Self {
        Self {
            font_character: font_character.into(),
            font_color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.font_color = Some(color.into());
        self
    }

    /// The glyph color, if one is set and non-empty.
    pub fn color(&self) -> Option<&str> {
        self.font_color.as_deref().filter(|c| !c.is_empty())
    }
}

/// Where the icon font is loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSource {
    pub path: String,
    pub format: String,
}

impl FontSource {
    pub fn new(path: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            format: format.into(),
        }
    }
}

/// A parsed icon theme file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconTheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontSource>,
    /// Definition key to glyph, in file order.
    pub icon_definitions: IndexMap<String, IconDefinition>,
    /// Definition key used when nothing more specific matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Lowercase extension without the dot, to definition key.
    pub file_extensions: IndexMap<String, String>,
    /// Lowercase full file name, to definition key.
    pub file_names: IndexMap<String, String>,
    /// Language identifier, to definition key.
    pub language_ids: IndexMap<String, String>,
}

impl IconTheme {
    /// The default definition key, if set and non-empty.
    pub fn default_key(&self) -> Option<&str> {
        self.file.as_deref().filter(|k| !k.is_empty())
    }

    pub fn definition(&self, key: &str) -> Option<&IconDefinition> {
        self.icon_definitions.get(key)
    }
}
