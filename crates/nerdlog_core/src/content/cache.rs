//! Load-once content index cache.
//!
//! # Invariants
//! - At most one successful index fetch per cache instance.
//! - Concurrent first loads share a single in-flight fetch.
//! - A failed load is not cached; the next call retries.

use super::model::ContentIndex;
use super::paths::CONTENT_INDEX_PATH;
use crate::fetch::{fetch_json, ContentFetcher, FetchError, FetchResult};
use log::info;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Process-lifetime cache of `content/index.json`.
#[derive(Debug, Default)]
pub struct ContentIndexCache {
    cell: OnceCell<Arc<ContentIndex>>,
}

impl ContentIndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache that is already populated.
    pub fn preloaded(index: ContentIndex) -> Self {
        Self {
            cell: OnceCell::new_with(Some(Arc::new(index))),
        }
    }

    /// Returns the cached index, fetching it on first use.
    pub async fn get(&self, fetcher: &dyn ContentFetcher) -> FetchResult<Arc<ContentIndex>> {
        let index = self
            .cell
            .get_or_try_init(|| async {
                let index: ContentIndex = fetch_json(fetcher, CONTENT_INDEX_PATH).await?;
                info!(
                    "event=content_index_loaded module=content status=ok items={} source={}",
                    index.items.len(),
                    fetcher.describe()
                );
                Ok::<_, FetchError>(Arc::new(index))
            })
            .await?;
        Ok(Arc::clone(index))
    }

    /// Cached index without triggering a fetch.
    pub fn cached(&self) -> Option<Arc<ContentIndex>> {
        self.cell.get().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::ContentIndexCache;
    use crate::fetch::MemoryFetcher;

    #[tokio::test]
    async fn second_get_reuses_cached_index() {
        let fetcher = MemoryFetcher::new()
            .with_document("./content/index.json", r#"{"items":[{"slug":"a"}]}"#);
        let cache = ContentIndexCache::new();

        let first = cache.get(&fetcher).await.expect("first load");
        let second = cache.get(&fetcher).await.expect("cached load");
        assert_eq!(first.items.len(), 1);
        assert_eq!(second.items.len(), 1);
        assert_eq!(fetcher.request_count(), 1);
    }

    #[tokio::test]
    async fn failed_load_is_retried() {
        let fetcher = MemoryFetcher::new();
        let cache = ContentIndexCache::new();
        assert!(cache.get(&fetcher).await.is_err());
        assert!(cache.get(&fetcher).await.is_err());
        assert_eq!(fetcher.request_count(), 2);
        assert!(cache.cached().is_none());
    }
}
