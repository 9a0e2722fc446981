//! File name to icon class resolution.
//!
//! Precedence, first match wins:
//! 1. lowercased file name in `fileNames`
//! 2. extension in `fileExtensions` (as written, then lowercased)
//! 3. language id in `languageIds`
//! 4. the theme's default `file` key
//!
//! Only the base name takes part: directory components are stripped first,
//! so a `fileNames` key containing `/` or `\` never matches.
//!
//! The resolver only produces a class name. The glyph and color rules for
//! that class come from the compiled stylesheet.

use crate::types::IconTheme;

/// Primary class used when none is configured.
pub const DEFAULT_PRIMARY_CLASS: &str = "oni-icon";

/// Resolve with the default primary class.
pub fn resolve_icon_class(
    theme: Option<&IconTheme>,
    file_name: &str,
    language: Option<&str>,
) -> Option<String> {
    IconClassResolver::default().resolve(theme, file_name, language)
}

/// Maps file names to `fa <primary> <primary>-<key>` class strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconClassResolver {
    primary_class: String,
}

impl Default for IconClassResolver {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY_CLASS)
    }
}

impl IconClassResolver {
    pub fn new(primary_class: impl Into<String>) -> Self {
        Self {
            primary_class: primary_class.into(),
        }
    }

    pub fn primary_class(&self) -> &str {
        &self.primary_class
    }

    /// The full class string for a definition key.
    pub fn class_for_key(&self, key: &str) -> String {
        let primary = &self.primary_class;
        format!("fa {primary} {primary}-{key}")
    }

    pub fn resolve(
        &self,
        theme: Option<&IconTheme>,
        file_name: &str,
        language: Option<&str>,
    ) -> Option<String> {
        let key = resolve_key(theme?, file_name, language)?;
        Some(self.class_for_key(key))
    }
}

/// Find the definition key for a file, without building a class string.
pub fn resolve_key<'a>(
    theme: &'a IconTheme,
    file_name: &str,
    language: Option<&str>,
) -> Option<&'a str> {
    let name = base_name(file_name);

    if let Some(key) = theme.file_names.get(&name.to_lowercase()) {
        return Some(key.as_str());
    }

    if let Some(ext) = extension(name) {
        let key = theme
            .file_extensions
            .get(ext)
            .or_else(|| theme.file_extensions.get(&ext.to_lowercase()));
        if let Some(key) = key {
            return Some(key.as_str());
        }
    }

    if let Some(key) = language.and_then(|lang| theme.language_ids.get(lang)) {
        return Some(key.as_str());
    }

    theme.default_key()
}

/// Strip any directory components, accepting both separators.
fn base_name(file_name: &str) -> &str {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
}

/// Text after the last `.`, if non-empty.
fn extension(name: &str) -> Option<&str> {
    let (_, ext) = name.rsplit_once('.')?;
    (!ext.is_empty()).then_some(ext)
}
