//! Active icon theme state.
//!
//! [`ThemeManager`] is the single writer of the active theme. Readers take
//! an `Arc` snapshot, so a theme swap never exposes a half-built value.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use filicon_common::{Subscription, ThemeContribution, ThemeError, ThemeSubscribers};
use tracing::info;

use crate::classes::IconClassResolver;
use crate::contributions::find_contribution;
use crate::loader::load_theme_from_path;
use crate::types::IconTheme;

/// The theme currently in effect and where it came from.
#[derive(Debug, Clone)]
pub struct ActiveTheme {
    pub id: String,
    pub path: PathBuf,
    pub theme: Arc<IconTheme>,
}

/// Owns the active icon theme and its theme-changed subscribers.
#[derive(Debug, Default)]
pub struct ThemeManager {
    active: RwLock<Option<ActiveTheme>>,
    subscribers: ThemeSubscribers,
}

impl ThemeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the contribution matching `theme_id` and make it active.
    ///
    /// Returns `Ok(None)` without touching any state when no contribution
    /// has that id. Read and parse failures are returned as errors and also
    /// leave the previous theme in place. On success the new theme is
    /// published first and subscribers are notified afterwards.
    pub async fn apply_theme(
        &self,
        theme_id: &str,
        contributions: &[ThemeContribution],
    ) -> Result<Option<Arc<IconTheme>>, ThemeError> {
        let Some(contribution) = find_contribution(theme_id, contributions) else {
            info!(theme_id, "no icon theme contribution with this id, keeping current theme");
            return Ok(None);
        };

        let theme = Arc::new(load_theme_from_path(&contribution.path).await?);

        self.publish(ActiveTheme {
            id: contribution.id.clone(),
            path: contribution.path.clone(),
            theme: Arc::clone(&theme),
        });
        info!(theme_id, path = %contribution.path.display(), "icon theme applied");

        let notified = self.subscribers.notify();
        tracing::debug!(notified, "theme-changed subscribers notified");

        Ok(Some(theme))
    }

    /// Snapshot of the active theme, if any.
    pub fn active_theme(&self) -> Option<Arc<IconTheme>> {
        self.active().map(|active| active.theme)
    }

    pub fn active(&self) -> Option<ActiveTheme> {
        self.active
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Resolve a file's icon class against the active theme.
    pub fn resolve_icon_class(
        &self,
        resolver: &IconClassResolver,
        file_name: &str,
        language: Option<&str>,
    ) -> Option<String> {
        let theme = self.active_theme();
        resolver.resolve(theme.as_deref(), file_name, language)
    }

    /// Register a zero-payload theme-changed callback.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn subscribers(&self) -> &ThemeSubscribers {
        &self.subscribers
    }

    fn publish(&self, next: ActiveTheme) {
        let mut guard = self
            .active
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(next);
    }
}
