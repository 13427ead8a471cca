//! Site content: index model, paths, caching and list rendering.
//!
//! # Responsibility
//! - Model `content/index.json` and resolve project documents.
//! - Group projects into section buckets and render their cards.
//! - Build the recent-activity feed from each project's newest entry.
//!
//! # Invariants
//! - Section comparison is case-insensitive (normalized to uppercase).
//! - `entries` in the index are newest-first.
//! - One failed entry fetch never aborts the recent-activity batch.

pub mod activity;
pub mod cache;
pub mod cards;
pub mod loader;
pub mod model;
pub mod paths;
pub mod sections;

pub use activity::{
    collect_recent_activity, parse_latest_entry_meta, render_recent_activity, EntryMeta,
    RecentActivityItem,
};
pub use cache::ContentIndexCache;
pub use cards::{project_card_html, render_projects, ListView};
pub use loader::{ContentLoader, HomeView, LoadError, CONTENT_LOAD_ERROR_MESSAGE};
pub use model::{ContentIndex, ProjectKey, ProjectSummary, Section};
pub use paths::{project_dir_path, project_entry_path, project_index_path, CONTENT_INDEX_PATH};
pub use sections::{sort_by_updated_desc, SectionBuckets};
