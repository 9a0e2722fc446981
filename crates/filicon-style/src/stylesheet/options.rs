//! Compiler options and font source selection.

use filicon_theme::{FontSource, IconTheme, DEFAULT_PRIMARY_CLASS};

/// Font family name declared by the `@font-face` block.
pub const DEFAULT_FONT_FAMILY: &str = "seti";
/// Font file used when neither the options nor the theme name one.
pub const DEFAULT_FONT_PATH: &str = "fonts/seti.woff";
pub const DEFAULT_FONT_FORMAT: &str = "woff";

/// Settings that shape the generated stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetOptions {
    /// Class shared by every icon, e.g. `oni-icon`.
    pub primary_class: String,
    pub font_family: String,
    /// Explicit font source. Takes precedence over the theme's `fonts`.
    pub font_source: Option<FontSource>,
}

impl Default for StylesheetOptions {
    fn default() -> Self {
        Self {
            primary_class: DEFAULT_PRIMARY_CLASS.into(),
            font_family: DEFAULT_FONT_FAMILY.into(),
            font_source: None,
        }
    }
}

impl StylesheetOptions {
    /// Pick the font source: configured override, then the theme's own
    /// `fonts` entry, then the built-in default.
    pub fn font_source_for(&self, theme: &IconTheme) -> FontSource {
        self.font_source
            .clone()
            .or_else(|| theme.fonts.clone())
            .unwrap_or_else(|| FontSource::new(DEFAULT_FONT_PATH, DEFAULT_FONT_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = StylesheetOptions::default();
        assert_eq!(options.primary_class, "oni-icon");
        assert_eq!(options.font_family, "seti");
        assert!(options.font_source.is_none());
    }

    #[test]
    fn font_source_falls_back_to_builtin() {
        let source = StylesheetOptions::default().font_source_for(&IconTheme::default());
        assert_eq!(source, FontSource::new("fonts/seti.woff", "woff"));
    }

    #[test]
    fn font_source_prefers_theme_over_builtin() {
        let theme = IconTheme {
            fonts: Some(FontSource::new("./theme.woff2", "woff2")),
            ..Default::default()
        };
        let source = StylesheetOptions::default().font_source_for(&theme);
        assert_eq!(source.path, "./theme.woff2");
    }

    #[test]
    fn font_source_prefers_override_over_theme() {
        let theme = IconTheme {
            fonts: Some(FontSource::new("./theme.woff2", "woff2")),
            ..Default::default()
        };
        let options = StylesheetOptions {
            font_source: Some(FontSource::new("/opt/icons/custom.ttf", "truetype")),
            ..Default::default()
        };
        assert_eq!(
            options.font_source_for(&theme),
            FontSource::new("/opt/icons/custom.ttf", "truetype")
        );
    }
}
