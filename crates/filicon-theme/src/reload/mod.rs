//! Live theme reload.
//!
//! Combines the theme file watcher with [`ThemeManager::apply_theme`] so
//! edits to the active theme file take effect without a restart.
//!
//! [`ThemeManager::apply_theme`]: crate::ThemeManager::apply_theme

mod reloader;


pub use reloader::ThemeReloader;
