//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Filicon Configuration
# Only override what you want to change -- missing fields use defaults.

[theme]
id = "seti"
# themes_dir = "/usr/share/filicon/themes"   # every *.json here, id = file stem

[stylesheet]
# primary_class = "oni-icon"
# font_family = "seti"
# font_path = "fonts/seti.woff"   # overrides the theme's own font
# font_format = "woff"            # woff, woff2, truetype, opentype, embedded-opentype, svg
# output = "icons.css"            # stdout when unset

[logging]
# level = "info"                  # tracing filter directive

# Theme files can also be listed explicitly:
# [[contributions]]
# id = "seti"
# path = "/usr/share/filicon/themes/seti.json"
"##
}
