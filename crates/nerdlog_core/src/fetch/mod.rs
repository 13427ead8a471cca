//! Content fetching over HTTP, the local filesystem, or memory.
//!
//! # Responsibility
//! - Resolve site-relative content paths (`./content/...`) against a root.
//! - Bypass caches: every fetch goes to the source.
//! - Report failures as typed [`FetchError`] values with the offending path.
//!
//! # Invariants
//! - A non-success HTTP status is an error, never an empty body.
//! - Filesystem roots refuse paths that escape the root directory.

mod fs;
mod http;
mod memory;

pub use fs::FsFetcher;
pub use http::HttpFetcher;
pub use memory::MemoryFetcher;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type FetchResult<T> = Result<T, FetchError>;

/// Fetch failure for one content path.
#[derive(Debug)]
pub enum FetchError {
    /// The source answered with a non-success status.
    Status { path: String, status: u16 },
    /// The request never produced a response.
    Transport { path: String, message: String },
    /// Local read failure.
    Io {
        path: String,
        source: std::io::Error,
    },
    /// Body was fetched but is not the expected JSON shape.
    Decode {
        path: String,
        source: serde_json::Error,
    },
    /// Path cannot be resolved against the content root.
    InvalidPath(String),
}

impl FetchError {
    /// Path the failed fetch was issued for.
    pub fn path(&self) -> &str {
        match self {
            Self::Status { path, .. }
            | Self::Transport { path, .. }
            | Self::Io { path, .. }
            | Self::Decode { path, .. } => path,
            Self::InvalidPath(path) => path,
        }
    }

    /// Whether the source reported the document as missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == 404,
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status { path, status } => write!(f, "HTTP {status} on {path}"),
            Self::Transport { path, message } => write!(f, "request failed on {path}: {message}"),
            Self::Io { path, source } => write!(f, "read failed on {path}: {source}"),
            Self::Decode { path, source } => write!(f, "invalid JSON in {path}: {source}"),
            Self::InvalidPath(path) => write!(f, "invalid content path: {path}"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Source of site content addressed by site-relative paths.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetches one document as UTF-8 text, bypassing any cache.
    async fn fetch_text(&self, path: &str) -> FetchResult<String>;

    /// Human-readable root description for logs.
    fn describe(&self) -> String;
}

/// Fetches and decodes one JSON document.
pub async fn fetch_json<T: DeserializeOwned>(
    fetcher: &dyn ContentFetcher,
    path: &str,
) -> FetchResult<T> {
    let body = fetcher.fetch_text(path).await?;
    serde_json::from_str(&body).map_err(|source| FetchError::Decode {
        path: path.to_string(),
        source,
    })
}

/// Strips the `./` prefix and leading slashes content paths carry.
pub(crate) fn relative_content_path(path: &str) -> &str {
    let mut trimmed = path.trim();
    while let Some(rest) = trimmed.strip_prefix("./") {
        trimmed = rest;
    }
    trimmed.trim_start_matches('/')
}
