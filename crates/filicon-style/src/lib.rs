//! Icon theme stylesheet generation.
//!
//! Compiles an [`IconTheme`](filicon_theme::IconTheme) into plain CSS and
//! hands the result to a [`StylesheetSink`]:
//! - one `@font-face` block for the icon font
//! - a base rule binding the primary class to that font
//! - per icon definition, an optional color rule and a `:before` glyph rule

pub mod sink;
pub mod stylesheet;

pub use sink::{FileSink, MemorySink, StylesheetSink, WriterSink};
pub use stylesheet::{
    StylesheetCompiler, StylesheetOptions, DEFAULT_FONT_FAMILY, DEFAULT_FONT_FORMAT,
    DEFAULT_FONT_PATH, LINE_ENDING,
};
