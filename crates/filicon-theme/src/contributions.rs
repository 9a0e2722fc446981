//! Sources of candidate theme files.
//!
//! Discovery itself is owned elsewhere; these sources just yield
//! `{id, path}` records. Several sources may be aggregated, so duplicate
//! ids are expected and the first one wins at lookup time.

use std::path::PathBuf;

use async_trait::async_trait;
use filicon_common::ThemeContribution;
use tracing::{debug, warn};

#[async_trait]
pub trait ContributionSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    async fn contributions(&self) -> Vec<ThemeContribution>;
}

/// A fixed list, e.g. from the config file or command line.
#[derive(Debug, Clone)]
pub struct StaticContributions {
    name: String,
    items: Vec<ThemeContribution>,
}

impl StaticContributions {
    pub fn new(name: impl Into<String>, items: Vec<ThemeContribution>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

#[async_trait]
impl ContributionSource for StaticContributions {
    fn name(&self) -> &str {
        &self.name
    }

    async fn contributions(&self) -> Vec<ThemeContribution> {
        self.items.clone()
    }
}

/// Every `*.json` file in a directory, keyed by file stem.
///
/// Entries are sorted by file name so the result is stable.
#[derive(Debug, Clone)]
pub struct DirectoryContributions {
    dir: PathBuf,
}

impl DirectoryContributions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ContributionSource for DirectoryContributions {
    fn name(&self) -> &str {
        "directory"
    }

    async fn contributions(&self) -> Vec<ThemeContribution> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %self.dir.display(), "cannot scan theme directory: {e}");
                return Vec::new();
            }
        };

        let mut found = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    warn!(dir = %self.dir.display(), "error while scanning theme directory: {e}");
                    break;
                }
            };

            let path = entry.path();
            let is_json = path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false);
            if !is_json {
                continue;
            }

            // Symlinks are followed, anything else must be a regular file.
            let is_file = match entry.file_type().await {
                Ok(kind) if kind.is_symlink() => tokio::fs::metadata(&path)
                    .await
                    .map(|meta| meta.is_file())
                    .unwrap_or(false),
                Ok(kind) => kind.is_file(),
                Err(_) => false,
            };
            if !is_file {
                continue;
            }

            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                found.push(ThemeContribution::new(stem, path.clone()));
            }
        }

        found.sort_by(|a, b| a.path.cmp(&b.path));
        debug!(dir = %self.dir.display(), count = found.len(), "scanned theme directory");
        found
    }
}

/// Concatenate the contributions of every source, in source order.
pub async fn collect_contributions(
    sources: &[Box<dyn ContributionSource>],
) -> Vec<ThemeContribution> {
    let mut all = Vec::new();
    for source in sources {
        let items = source.contributions().await;
        debug!(source = source.name(), count = items.len(), "collected theme contributions");
        all.extend(items);
    }
    all
}

/// The first contribution whose id matches exactly.
pub fn find_contribution<'a>(
    theme_id: &str,
    contributions: &'a [ThemeContribution],
) -> Option<&'a ThemeContribution> {
    contributions.iter().find(|c| c.id == theme_id)
}
