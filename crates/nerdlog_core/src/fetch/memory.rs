//! In-memory content source.
//!
//! Used for deterministic tests and for embedding fixed content.

use super::{relative_content_path, ContentFetcher, FetchError, FetchResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Content source backed by a path → body map.
///
/// Missing paths answer like an HTTP 404. Every call is counted, including
/// failed ones.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    documents: BTreeMap<String, String>,
    requests: AtomicUsize,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one document.
    pub fn with_document(mut self, path: &str, body: impl Into<String>) -> Self {
        self.insert(path, body);
        self
    }

    pub fn insert(&mut self, path: &str, body: impl Into<String>) {
        self.documents
            .insert(relative_content_path(path).to_string(), body.into());
    }

    /// Number of fetches issued so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentFetcher for MemoryFetcher {
    async fn fetch_text(&self, path: &str) -> FetchResult<String> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.documents
            .get(relative_content_path(path))
            .cloned()
            .ok_or_else(|| FetchError::Status {
                path: path.to_string(),
                status: 404,
            })
    }

    fn describe(&self) -> String {
        format!("memory({} documents)", self.documents.len())
    }
}
