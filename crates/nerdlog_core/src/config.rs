//! Site client configuration.
//!
//! # Responsibility
//! - Load `nerdlog.toml`-style settings with a default for every field.
//! - Choose the content source (HTTP base URL or local directory).
//!
//! # Invariants
//! - A loaded config has passed [`SiteConfig::validate`].

use crate::fetch::{ContentFetcher, FetchResult, FsFetcher, HttpFetcher};
use crate::i18n::Language;
use crate::logging::default_log_level;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_RECENT_LIMIT: usize = 6;
const DEFAULT_CARD_TAG_LIMIT: usize = 6;
const DEFAULT_FETCH_CONCURRENCY: usize = 8;

/// Configuration load/validation failure.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

/// Settings for one site client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// `http(s)://` base URL or a local directory containing `content/`.
    pub content_root: String,
    /// Initial UI language.
    pub language: Language,
    /// Maximum number of recent-activity items.
    pub recent_limit: usize,
    /// Maximum number of tag badges per project card.
    pub card_tag_limit: usize,
    /// Maximum concurrent entry fetches for the recent-activity feed.
    pub fetch_concurrency: usize,
    /// Per-request timeout for HTTP roots; unset means no timeout.
    pub request_timeout_secs: Option<u64>,
    /// Log level (`trace|debug|info|warn|error`).
    pub log_level: String,
    /// Absolute directory for rolling log files; unset logs to stderr.
    pub log_dir: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: ".".to_string(),
            language: Language::default(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            card_tag_limit: DEFAULT_CARD_TAG_LIMIT,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
            request_timeout_secs: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl SiteConfig {
    /// Parses and validates TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Rejects settings that cannot drive a client.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_root.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "content_root cannot be empty".to_string(),
            ));
        }
        if self.fetch_concurrency == 0 {
            return Err(ConfigError::Invalid(
                "fetch_concurrency must be at least 1".to_string(),
            ));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be positive when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether `content_root` is an HTTP(S) URL.
    pub fn is_remote(&self) -> bool {
        let root = self.content_root.trim();
        root.starts_with("http://") || root.starts_with("https://")
    }

    /// Builds the fetcher for `content_root`.
    pub fn fetcher(&self) -> FetchResult<Arc<dyn ContentFetcher>> {
        let root = self.content_root.trim();
        if self.is_remote() {
            let timeout = self.request_timeout_secs.map(Duration::from_secs);
            Ok(Arc::new(HttpFetcher::new(root, timeout)?))
        } else {
            Ok(Arc::new(FsFetcher::new(root)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SiteConfig};
    use crate::i18n::Language;

    #[test]
    fn empty_file_yields_defaults() {
        let config = SiteConfig::from_toml_str("").expect("defaults are valid");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.recent_limit, 6);
        assert_eq!(config.language, Language::It);
    }

    #[test]
    fn parses_overrides() {
        let config = SiteConfig::from_toml_str(
            r#"
            content_root = "https://example.com/site/"
            language = "en"
            recent_limit = 3
            request_timeout_secs = 10
            "#,
        )
        .expect("valid config");
        assert!(config.is_remote());
        assert_eq!(config.language, Language::En);
        assert_eq!(config.recent_limit, 3);
        assert_eq!(config.request_timeout_secs, Some(10));
    }

    #[test]
    fn rejects_zero_concurrency() {
        let err = SiteConfig::from_toml_str("fetch_concurrency = 0").expect_err("must fail");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = SiteConfig::from_toml_str("colour = \"green\"").expect_err("must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn local_root_builds_fs_fetcher() {
        let config = SiteConfig {
            content_root: "/srv/site".to_string(),
            ..SiteConfig::default()
        };
        let fetcher = config.fetcher().expect("fs fetcher");
        assert_eq!(fetcher.describe(), "/srv/site");
    }
}
