//! Local directory content source.

use super::{relative_content_path, ContentFetcher, FetchError, FetchResult};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

/// Reads content paths relative to a site root directory.
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a site-relative path onto the root.
    ///
    /// Only normal components are accepted: `..`, absolute prefixes and
    /// drive letters are rejected, since `read` values come from the URL.
    fn resolve(&self, path: &str) -> FetchResult<PathBuf> {
        let relative = relative_content_path(path);
        if relative.is_empty() {
            return Err(FetchError::InvalidPath(path.to_string()));
        }

        let mut resolved = self.root.clone();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                _ => return Err(FetchError::InvalidPath(path.to_string())),
            }
        }
        Ok(resolved)
    }
}

#[async_trait]
impl ContentFetcher for FsFetcher {
    async fn fetch_text(&self, path: &str) -> FetchResult<String> {
        let resolved = self.resolve(path)?;
        tokio::fs::read_to_string(&resolved)
            .await
            .map_err(|source| FetchError::Io {
                path: path.to_string(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
