//! File watcher for the active icon theme.
//!
//! Uses the `notify` crate to watch a theme file for changes,
//! with a 500ms debounce to avoid rapid reloads.

mod theme_watcher;

#[cfg(test)]
mod tests;

pub use theme_watcher::ThemeWatcher;
