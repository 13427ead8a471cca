//! Core client logic for nerdlog, a static personal-site reader.
//! This crate is the single source of truth for routing, content and modal
//! behavior; frontends only forward user gestures.

pub mod config;
pub mod content;
pub mod fetch;
pub mod i18n;
pub mod logging;
pub mod markdown;
pub mod modal;
pub mod routing;
pub mod site;
pub mod util;

pub use config::{ConfigError, SiteConfig};
pub use content::{
    ContentIndex, ContentIndexCache, ContentLoader, HomeView, ListView, LoadError, ProjectKey,
    ProjectSummary, RecentActivityItem, Section,
};
pub use fetch::{ContentFetcher, FetchError, FetchResult, FsFetcher, HttpFetcher, MemoryFetcher};
pub use i18n::{Language, LanguageToggle, TextDocument, TextNode};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use markdown::{ClassHighlighter, Highlighter, MarkdownOptions, MarkdownRenderer};
pub use modal::{MarkdownModal, ModalError, ModalIntent, ModalRequest, ModalState, ModalView};
pub use routing::{parse_hash, HashParams, HashRoute, Router, Tab};
pub use site::Site;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
