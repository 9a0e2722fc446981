//! Core reloader implementation.

use std::sync::Arc;

use filicon_common::{ThemeContribution, ThemeError};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::contributions::find_contribution;
use crate::manager::ThemeManager;
use crate::types::IconTheme;
use crate::watcher::ThemeWatcher;

/// Re-applies one theme id whenever its backing file changes.
pub struct ThemeReloader {
    manager: Arc<ThemeManager>,
    theme_id: String,
    contributions: Vec<ThemeContribution>,
}

impl ThemeReloader {
    pub fn new(
        manager: Arc<ThemeManager>,
        theme_id: impl Into<String>,
        contributions: Vec<ThemeContribution>,
    ) -> Self {
        Self {
            manager,
            theme_id: theme_id.into(),
            contributions,
        }
    }

    /// Apply the theme again from disk.
    ///
    /// Same semantics as [`ThemeManager::apply_theme`]: a failure keeps the
    /// currently active theme.
    pub async fn reload(&self) -> Result<Option<Arc<IconTheme>>, ThemeError> {
        self.manager
            .apply_theme(&self.theme_id, &self.contributions)
            .await
    }

    /// Start watching in a background task.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move { self.run_watch_loop().await })
    }

    async fn run_watch_loop(&self) {
        let Some(contribution) = find_contribution(&self.theme_id, &self.contributions) else {
            warn!(theme_id = %self.theme_id, "no contribution to watch, reloader idle");
            return;
        };

        let watcher = ThemeWatcher::new(contribution.path.clone());
        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("theme watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!(theme_id = %self.theme_id, "reloading icon theme");
                    if let Err(e) = self.reload().await {
                        warn!("icon theme reload failed, keeping previous theme: {e}");
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("theme watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("theme watcher channel closed");
                    break;
                }
            }
        }
    }
}
