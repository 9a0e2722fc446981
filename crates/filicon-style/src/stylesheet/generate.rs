//! CSS generation from an icon theme.

use filicon_theme::IconTheme;

use super::options::StylesheetOptions;

/// Line separator used in generated CSS.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

// =============================================================================
// COMPILER
// =============================================================================

/// Compiles icon themes into stylesheets.
#[derive(Debug, Clone, Default)]
pub struct StylesheetCompiler {
    options: StylesheetOptions,
}

impl StylesheetCompiler {
    pub fn new(options: StylesheetOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &StylesheetOptions {
        &self.options
    }

    /// Generate the stylesheet for `theme`.
    ///
    /// Emits one `@font-face` block, the base `.fa.<primary>` rule, then for
    /// each icon definition in theme order a color rule (only when the
    /// definition has a non-empty `fontColor`) and a `:before` content rule.
    pub fn compile(&self, theme: &IconTheme) -> String {
        let primary = &self.options.primary_class;
        let family = &self.options.font_family;
        let font = self.options.font_source_for(theme);

        let mut css = CssWriter::default();

        css.open("@font-face");
        css.decl("font-family", &format!("'{family}'"));
        css.decl("src", &format!("url('{}') format('{}')", font.path, font.format));
        css.decl("font-weight", "normal");
        css.decl("font-style", "normal");
        css.close();

        css.open(&format!(".fa.{primary}"));
        css.decl("font-family", &format!("'{family}'"));
        css.decl("font-style", "normal");
        css.decl("font-weight", "normal");
        css.decl("-webkit-font-smoothing", "antialiased");
        css.decl("-moz-osx-font-smoothing", "grayscale");
        css.close();

        for (key, definition) in &theme.icon_definitions {
            let selector = format!(".fa.{primary}.{primary}-{key}");

            if let Some(color) = definition.color() {
                css.open(&selector);
                css.decl("color", color);
                css.close();
            }

            css.open(&format!("{selector}:before"));
            css.decl("content", &format!("'{}'", definition.font_character));
            css.close();
        }

        tracing::debug!(
            definitions = theme.icon_definitions.len(),
            bytes = css.len(),
            "compiled icon stylesheet"
        );
        css.finish()
    }
}

// =============================================================================
// WRITER
// =============================================================================

#[derive(Default)]
struct CssWriter {
    out: String,
}

impl CssWriter {
    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push_str(LINE_ENDING);
    }

    fn open(&mut self, selector: &str) {
        self.line(&format!("{selector} {{"));
    }

    fn decl(&mut self, property: &str, value: &str) {
        self.line(&format!("    {property}: {value};"));
    }

    fn close(&mut self) {
        self.line("}");
    }

    fn len(&self) -> usize {
        self.out.len()
    }

    fn finish(self) -> String {
        self.out
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use filicon_theme::{theme_from_value, FontSource, IconDefinition};

    fn two_icon_theme() -> IconTheme {
        theme_from_value(&serde_json::json!({
            "iconDefinitions": {
                "a": { "fontCharacter": "\\E001", "fontColor": "#fff" },
                "b": { "fontCharacter": "\\E002" }
            }
        }))
    }

    fn compile(theme: &IconTheme) -> String {
        StylesheetCompiler::default().compile(theme)
    }

    #[test]
    fn two_definitions_produce_expected_rules() {
        let css = compile(&two_icon_theme());

        assert_eq!(css.matches("@font-face").count(), 1);
        assert!(css.contains(&format!(".fa.oni-icon {{{LINE_ENDING}")));
        assert!(css.contains(&format!(
            ".fa.oni-icon.oni-icon-a {{{LINE_ENDING}    color: #fff;{LINE_ENDING}}}"
        )));
        assert!(css.contains(".fa.oni-icon.oni-icon-a:before {"));
        assert!(css.contains(".fa.oni-icon.oni-icon-b:before {"));
        assert!(css.contains("content: '\\E001';"));
        assert!(css.contains("content: '\\E002';"));
        assert!(!css.contains(".fa.oni-icon.oni-icon-b {"));
        assert_eq!(css.matches("color:").count(), 1);
    }

    #[test]
    fn exact_output_for_single_definition() {
        let theme = IconTheme {
            icon_definitions: [(
                "rust".to_string(),
                IconDefinition::new("\\E0A1").with_color("#dea584"),
            )]
            .into_iter()
            .collect(),
            ..Default::default()
        };
        let expected = [
            "@font-face {",
            "    font-family: 'seti';",
            "    src: url('fonts/seti.woff') format('woff');",
            "    font-weight: normal;",
            "    font-style: normal;",
            "}",
            ".fa.oni-icon {",
            "    font-family: 'seti';",
            "    font-style: normal;",
            "    font-weight: normal;",
            "    -webkit-font-smoothing: antialiased;",
            "    -moz-osx-font-smoothing: grayscale;",
            "}",
            ".fa.oni-icon.oni-icon-rust {",
            "    color: #dea584;",
            "}",
            ".fa.oni-icon.oni-icon-rust:before {",
            "    content: '\\E0A1';",
            "}",
        ]
        .iter()
        .map(|line| format!("{line}{LINE_ENDING}"))
        .collect::<String>();

        assert_eq!(compile(&theme), expected);
    }

    #[test]
    fn every_line_is_terminated() {
        let css = compile(&two_icon_theme());
        assert!(css.ends_with(LINE_ENDING));
        let lines = css.split(LINE_ENDING).filter(|l| !l.is_empty()).count();
        assert_eq!(css.matches(LINE_ENDING).count(), lines);
    }

    #[test]
    fn rules_follow_definition_order() {
        let theme = theme_from_value(&serde_json::json!({
            "iconDefinitions": {
                "zeta": { "fontCharacter": "z" },
                "alpha": { "fontCharacter": "a" }
            }
        }));
        let css = compile(&theme);
        let zeta = css.find("oni-icon-zeta:before").unwrap();
        let alpha = css.find("oni-icon-alpha:before").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn empty_color_emits_no_color_rule() {
        let theme = theme_from_value(&serde_json::json!({
            "iconDefinitions": { "a": { "fontCharacter": "x", "fontColor": "" } }
        }));
        let css = compile(&theme);
        assert!(!css.contains("color:"));
        assert!(css.contains(".fa.oni-icon.oni-icon-a:before {"));
    }

    #[test]
    fn empty_theme_still_has_font_face_and_base_rule() {
        let css = compile(&IconTheme::default());
        assert_eq!(css.matches("@font-face").count(), 1);
        assert!(css.contains(".fa.oni-icon {"));
        assert!(!css.contains(":before"));
    }

    #[test]
    fn compile_is_deterministic() {
        let theme = two_icon_theme();
        let compiler = StylesheetCompiler::default();
        assert_eq!(compiler.compile(&theme), compiler.compile(&theme));
    }

    #[test]
    fn theme_font_source_is_used() {
        let theme = IconTheme {
            fonts: Some(FontSource::new("./icons.woff2", "woff2")),
            ..Default::default()
        };
        let css = compile(&theme);
        assert!(css.contains("src: url('./icons.woff2') format('woff2');"));
    }

    #[test]
    fn custom_primary_class_and_family() {
        let compiler = StylesheetCompiler::new(StylesheetOptions {
            primary_class: "file-icon".into(),
            font_family: "material".into(),
            font_source: Some(FontSource::new("/fonts/material.ttf", "truetype")),
        });
        let css = compiler.compile(&two_icon_theme());

        assert!(css.contains(".fa.file-icon {"));
        assert!(css.contains(".fa.file-icon.file-icon-a:before {"));
        assert!(css.contains("font-family: 'material';"));
        assert!(css.contains("src: url('/fonts/material.ttf') format('truetype');"));
        assert_eq!(compiler.options().primary_class, "file-icon");
    }

    #[test]
    fn values_are_interpolated_verbatim() {
        let theme = theme_from_value(&serde_json::json!({
            "iconDefinitions": {
                "odd": { "fontCharacter": "\"", "fontColor": "rgba(0, 0, 0, 0.5)" }
            }
        }));
        let css = compile(&theme);
        assert!(css.contains("content: '\"';"));
        assert!(css.contains("color: rgba(0, 0, 0, 0.5);"));
    }
}
