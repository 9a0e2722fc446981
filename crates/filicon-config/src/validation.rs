//! Full configuration validation.
//!
//! Checks the values that end up interpolated into generated CSS. All
//! problems are collected and reported together.

use crate::schema::FiliconConfig;
use filicon_common::ConfigError;
use regex::Regex;
use std::sync::LazyLock;

/// A CSS class name usable as-is in a selector.
static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[_a-zA-Z][_a-zA-Z0-9-]*$").unwrap());

/// Font family names: letters, digits, spaces, hyphens, underscores.
static FAMILY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 _-]+$").unwrap());

/// `format()` hints accepted in `@font-face`.
pub const FONT_FORMATS: &[&str] = &[
    "woff",
    "woff2",
    "truetype",
    "opentype",
    "embedded-opentype",
    "svg",
];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FiliconConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.theme.id.trim().is_empty() {
        errors.push("theme.id must not be empty".into());
    }

    let style = &config.stylesheet;
    if !CLASS_RE.is_match(&style.primary_class) {
        errors.push(format!(
            "stylesheet.primary_class = '{}' is not a valid CSS class name",
            style.primary_class
        ));
    }
    if !FAMILY_RE.is_match(&style.font_family) {
        errors.push(format!(
            "stylesheet.font_family = '{}' contains unsupported characters",
            style.font_family
        ));
    }

    if let Some(path) = &style.font_path {
        if path.trim().is_empty() {
            errors.push("stylesheet.font_path must not be empty".into());
        } else if path.contains(['\'', '"', '(', ')']) {
            errors.push(format!(
                "stylesheet.font_path = '{path}' must not contain quotes or parentheses"
            ));
        }
    }
    if let Some(format) = &style.font_format {
        if style.font_path.is_none() {
            errors.push("stylesheet.font_format is set without stylesheet.font_path".into());
        }
        if !FONT_FORMATS.contains(&format.as_str()) {
            errors.push(format!(
                "stylesheet.font_format = '{format}' is not one of {}",
                FONT_FORMATS.join(", ")
            ));
        }
    }

    for (i, contribution) in config.contributions.iter().enumerate() {
        if contribution.id.trim().is_empty() {
            errors.push(format!("contributions[{i}].id must not be empty"));
        }
        if contribution.path.as_os_str().is_empty() {
            errors.push(format!("contributions[{i}].path must not be empty"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
