//! HTTP content source.

use super::{relative_content_path, ContentFetcher, FetchError, FetchResult};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("nerdlog/", env!("CARGO_PKG_VERSION"));

/// Fetches content paths relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    /// Creates a fetcher for `base`.
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(base: &str, timeout: Option<Duration>) -> FetchResult<Self> {
        let mut base = Url::parse(base).map_err(|err| FetchError::Transport {
            path: base.to_string(),
            message: format!("invalid base url: {err}"),
        })?;
        // Relative joins replace the last segment unless the base ends with `/`.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|err| FetchError::Transport {
            path: base.to_string(),
            message: format!("failed to build http client: {err}"),
        })?;

        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Joins a site-relative path onto the base.
    ///
    /// The result must stay under the base URL; absolute URLs and `..`
    /// escapes are rejected since `read` values come from the hash.
    fn resolve(&self, path: &str) -> FetchResult<Url> {
        let url = self
            .base
            .join(relative_content_path(path))
            .map_err(|_| FetchError::InvalidPath(path.to_string()))?;
        if url.origin() != self.base.origin() || !url.path().starts_with(self.base.path()) {
            return Err(FetchError::InvalidPath(path.to_string()));
        }
        Ok(url)
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch_text(&self, path: &str) -> FetchResult<String> {
        let url = self.resolve(path)?;
        debug!("event=fetch module=fetch status=start url={url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Transport {
                path: path.to_string(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|err| FetchError::Transport {
            path: path.to_string(),
            message: err.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}
