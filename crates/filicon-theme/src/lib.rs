//! Icon theme loading, active-theme state, and icon class resolution.
//!
//! A theme is applied by id from a list of contributions, parsed from a
//! JSON file, and published through [`ThemeManager`]. File icons are then
//! looked up against the active theme with [`IconClassResolver`].
//!
//! ```rust,no_run
//! use filicon_common::ThemeContribution;
//! use filicon_theme::{IconClassResolver, ThemeManager};
//!
//! # async fn demo() -> Result<(), filicon_common::ThemeError> {
//! let manager = ThemeManager::new();
//! let contributions = vec![ThemeContribution::new("seti", "themes/seti.json")];
//! manager.apply_theme("seti", &contributions).await?;
//!
//! let class = manager.resolve_icon_class(&IconClassResolver::default(), "main.rs", None);
//! println!("{class:?}");
//! # Ok(())
//! # }
//! ```

pub mod classes;
pub mod contributions;
pub mod loader;
pub mod manager;
pub mod reload;
pub mod types;
pub mod watcher;

pub use classes::{resolve_icon_class, resolve_key, IconClassResolver, DEFAULT_PRIMARY_CLASS};
pub use contributions::{
    collect_contributions, find_contribution, ContributionSource, DirectoryContributions,
    StaticContributions,
};
pub use loader::{load_theme_from_path, parse_theme, theme_from_value};
pub use manager::{ActiveTheme, ThemeManager};
pub use reload::ThemeReloader;
pub use types::{FontSource, IconDefinition, IconTheme};
pub use watcher::ThemeWatcher;
