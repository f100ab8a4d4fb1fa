//! One built session: paged store, hash index, and build statistics.

use crate::index::build::reindex;
use crate::index::types::{BuildStats, HashIndex, IndexConfig};
use crate::store::PagedStore;
use anyhow::Result;

/// The product of one atomic build pass.
///
/// A session exposes no mutation: requesting a different page size means
/// building a new session, so readers of a previously published pair are
/// never disturbed.
#[derive(Debug, Clone)]
pub struct Session {
    store: PagedStore,
    index: HashIndex,
    stats: BuildStats,
    config: IndexConfig,
}

impl Session {
    /// Build the store and the index over it in one pass.
    pub fn build(words: Vec<String>, config: &IndexConfig) -> Result<Self> {
        let (index, stats) = reindex(&words, config)?;
        let store = PagedStore::new(words, config.page_size)?;
        Ok(Self {
            store,
            index,
            stats,
            config: config.clone(),
        })
    }

    /// Build with a progress spinner on the terminal unless `silent`.
    pub fn build_with_progress(
        words: Vec<String>,
        config: &IndexConfig,
        silent: bool,
    ) -> Result<Self> {
        #[cfg(feature = "progress")]
        let spinner = if silent {
            None
        } else {
            use indicatif::{ProgressBar, ProgressStyle};
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.cyan} {msg}")
                    .unwrap(),
            );
            spinner.set_message("Building hash index...");
            spinner.enable_steady_tick(std::time::Duration::from_millis(80));
            Some(spinner)
        };
        #[cfg(not(feature = "progress"))]
        let _ = silent;

        let session = Self::build(words, config)?;

        #[cfg(feature = "progress")]
        if let Some(spinner) = spinner {
            spinner.finish_with_message(format!(
                "Indexed {} words into {} buckets ({} overflow)",
                session.stats.word_count,
                session.stats.bucket_count,
                session.stats.overflows
            ));
        }

        Ok(session)
    }

    pub fn store(&self) -> &PagedStore {
        &self.store
    }

    pub fn index(&self) -> &HashIndex {
        &self.index
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_atomic() {
        let words = vec!["apple".to_string(), "banana".to_string()];
        let session = Session::build(words, &IndexConfig::with_page_size(1)).unwrap();
        assert_eq!(session.store().page_count(), 2);
        assert_eq!(session.stats().word_count, 2);
    }

    #[test]
    fn test_zero_page_size_fails_before_build() {
        let words = vec!["apple".to_string()];
        assert!(Session::build(words, &IndexConfig::with_page_size(0)).is_err());
    }
}
