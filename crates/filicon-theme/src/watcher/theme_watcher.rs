//! Core theme file watcher implementation.

use filicon_common::ThemeError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches one theme file and signals when it changes.
pub struct ThemeWatcher {
    path: PathBuf,
}

impl ThemeWatcher {
    pub fn new(path: PathBuf) -> Self {
        if !path.exists() {
            warn!(
                "theme file {} does not exist yet, will watch for creation",
                path.display()
            );
        }
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Watch the theme file, sending `()` on `tx` after each debounced change.
    ///
    /// The parent directory is watched rather than the file itself, so
    /// editors that save by write-and-rename are still picked up. Runs until
    /// the underlying notify channel closes.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ThemeError> {
        let watch_dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!("starting theme file watcher for {}", self.path.display());

        let (notify_tx, mut notify_rx) = tokio::sync::mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        return;
                    }
                    let is_theme_file = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(|n| n == file_name).unwrap_or(false));
                    if is_theme_file {
                        debug!("theme file change detected");
                        let _ = notify_tx.try_send(());
                    }
                }
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ThemeError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ThemeError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        loop {
            if notify_rx.recv().await.is_none() {
                break;
            }

            // Coalesce bursts of events into one signal.
            let debounce = tokio::time::sleep(DEBOUNCE);
            tokio::pin!(debounce);
            loop {
                tokio::select! {
                    _ = &mut debounce => break,
                    msg = notify_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                    }
                }
            }

            info!("theme file changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for theme reload signal");
            }
        }

        drop(watcher);
        Ok(())
    }
}
