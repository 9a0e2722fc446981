//! Icon theme file loading.
//!
//! Reading and JSON syntax are strict: either failure is a hard error.
//! The shape is not validated. A field that does not have the expected
//! shape is dropped, so it behaves exactly like a missing field.

use std::path::Path;

use filicon_common::ThemeError;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::types::{FontSource, IconDefinition, IconTheme};

/// Read and parse the theme file at `path`.
pub async fn load_theme_from_path(path: &Path) -> Result<IconTheme, ThemeError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ThemeError::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;

    let mut theme = parse_theme(path, &text)?;
    anchor_font_path(&mut theme, path);
    info!(
        path = %path.display(),
        definitions = theme.icon_definitions.len(),
        "loaded icon theme"
    );
    Ok(theme)
}

/// Parse theme text. `path` is only used for error reporting.
pub fn parse_theme(path: &Path, text: &str) -> Result<IconTheme, ThemeError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let value: Value = serde_json::from_str(text).map_err(|e| ThemeError::ParseFailure {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(theme_from_value(&value))
}

/// Theme files give `fonts.path` relative to themselves. Rebase such paths
/// onto the theme's directory; absolute paths and URLs are kept as written.
fn anchor_font_path(theme: &mut IconTheme, theme_path: &Path) {
    let Some(font) = theme.fonts.as_mut() else {
        return;
    };
    let Some(dir) = theme_path.parent() else {
        return;
    };
    if font.path.is_empty() || font.path.contains(':') || font.path.starts_with(['/', '\\']) {
        return;
    }

    let relative = font.path.strip_prefix("./").unwrap_or(&font.path);
    let anchored = dir.join(relative).to_string_lossy().into_owned();
    debug!(from = %font.path, to = %anchored, "anchored theme font path");
    font.path = anchored;
}

/// Build a theme from any JSON value, keeping whatever fields fit.
pub fn theme_from_value(value: &Value) -> IconTheme {
    let Some(root) = value.as_object() else {
        debug!("icon theme root is not an object, treating as empty");
        return IconTheme::default();
    };

    IconTheme {
        fonts: root.get("fonts").and_then(font_source),
        icon_definitions: root
            .get("iconDefinitions")
            .map(icon_definitions)
            .unwrap_or_default(),
        file: root.get("file").and_then(|v| typed("file", v)),
        file_extensions: string_map(root, "fileExtensions"),
        file_names: string_map(root, "fileNames"),
        language_ids: string_map(root, "languageIds"),
    }
}

/// `fonts` is a single descriptor, but theme files commonly carry an array
/// of them; in that case the first usable entry wins.
fn font_source(value: &Value) -> Option<FontSource> {
    match value {
        Value::Array(items) => items.iter().find_map(|v| typed("fonts[]", v)),
        other => typed("fonts", other),
    }
}

fn icon_definitions(value: &Value) -> IndexMap<String, IconDefinition> {
    let Some(entries) = value.as_object() else {
        debug!("iconDefinitions is not an object, ignoring");
        return IndexMap::new();
    };

    entries
        .iter()
        .filter_map(|(key, def)| typed::<IconDefinition>(key, def).map(|d| (key.clone(), d)))
        .collect()
}

fn string_map(root: &Map<String, Value>, field: &str) -> IndexMap<String, String> {
    let Some(value) = root.get(field) else {
        return IndexMap::new();
    };
    let Some(entries) = value.as_object() else {
        debug!(field, "mapping is not an object, ignoring");
        return IndexMap::new();
    };

    entries
        .iter()
        .filter_map(|(key, target)| match target.as_str() {
            Some(target) => Some((key.clone(), target.to_string())),
            None => {
                debug!(field, key = key.as_str(), "mapping target is not a string, skipping");
                None
            }
        })
        .collect()
}

fn typed<T: DeserializeOwned>(what: &str, value: &Value) -> Option<T> {
    match T::deserialize(value) {
        Ok(v) => Some(v),
        Err(e) => {
            debug!(field = what, error = %e, "ignoring malformed theme field");
            None
        }
    }
}
