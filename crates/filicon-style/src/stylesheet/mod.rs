//! Theme to CSS compilation.
//!
//! Output is a pure function of the theme and options. Theme values are
//! interpolated as written; theme files are trusted input.

mod generate;
mod options;

pub use generate::{StylesheetCompiler, LINE_ENDING};
pub use options::{StylesheetOptions, DEFAULT_FONT_FAMILY, DEFAULT_FONT_FORMAT, DEFAULT_FONT_PATH};
