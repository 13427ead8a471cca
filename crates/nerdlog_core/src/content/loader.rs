//! Home view assembly: section lists plus recent activity.

use super::activity::{collect_recent_activity, render_recent_activity, RecentActivityItem};
use super::cache::ContentIndexCache;
use super::cards::{render_projects, ListView};
use super::model::{ContentIndex, Section};
use super::sections::SectionBuckets;
use crate::config::SiteConfig;
use crate::fetch::{ContentFetcher, FetchError};
use crate::routing::Tab;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Message shown in the recent-activity list when the index cannot load.
pub const CONTENT_LOAD_ERROR_MESSAGE: &str = "Failed to load content. Check the logs.";

/// Failure to build the home view.
#[derive(Debug)]
pub enum LoadError {
    Index(FetchError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(err) => write!(f, "content index unavailable: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Index(err) => Some(err),
        }
    }
}

impl From<FetchError> for LoadError {
    fn from(value: FetchError) -> Self {
        Self::Index(value)
    }
}

/// Rendered lists of the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeView {
    pub lab: ListView,
    pub incubator: ListView,
    pub toolbox: ListView,
    pub recent: ListView,
    /// Feed items behind `recent`, newest first.
    pub recent_items: Vec<RecentActivityItem>,
}

impl HomeView {
    /// View shown when the index failed: empty sections, inline error.
    pub fn failed() -> Self {
        Self {
            lab: ListView::empty(),
            incubator: ListView::empty(),
            toolbox: ListView::empty(),
            recent: ListView::error(CONTENT_LOAD_ERROR_MESSAGE),
            recent_items: Vec::new(),
        }
    }

    pub fn section(&self, section: Section) -> &ListView {
        match section {
            Section::Lab => &self.lab,
            Section::Incubator => &self.incubator,
            Section::Toolbox => &self.toolbox,
        }
    }
}

/// Loads the content index and renders the home lists.
pub struct ContentLoader {
    fetcher: Arc<dyn ContentFetcher>,
    cache: Arc<ContentIndexCache>,
    tag_limit: usize,
    recent_limit: usize,
    concurrency: usize,
}

impl ContentLoader {
    pub fn new(
        fetcher: Arc<dyn ContentFetcher>,
        cache: Arc<ContentIndexCache>,
        config: &SiteConfig,
    ) -> Self {
        Self {
            fetcher,
            cache,
            tag_limit: config.card_tag_limit,
            recent_limit: config.recent_limit,
            concurrency: config.fetch_concurrency,
        }
    }

    /// Cached content index, fetched on first use.
    pub async fn index(&self) -> Result<Arc<ContentIndex>, LoadError> {
        Ok(self.cache.get(self.fetcher.as_ref()).await?)
    }

    /// Builds every home list; feed links point at `current_tab`.
    pub async fn load_and_render(&self, current_tab: Tab) -> Result<HomeView, LoadError> {
        let index = self.index().await?;
        let buckets = SectionBuckets::from_projects(&index.items);

        let recent_items = collect_recent_activity(
            self.fetcher.as_ref(),
            &index.items,
            self.concurrency,
            self.recent_limit,
        )
        .await;

        info!(
            "event=home_rendered module=content status=ok lab={} incubator={} toolbox={} recent={}",
            buckets.lab.len(),
            buckets.incubator.len(),
            buckets.toolbox.len(),
            recent_items.len()
        );

        Ok(HomeView {
            lab: render_projects(&buckets.lab, self.tag_limit),
            incubator: render_projects(&buckets.incubator, self.tag_limit),
            toolbox: render_projects(&buckets.toolbox, self.tag_limit),
            recent: render_recent_activity(&recent_items, current_tab),
            recent_items,
        })
    }

    /// Like [`Self::load_and_render`], but renders failures inline.
    pub async fn load_or_error_view(&self, current_tab: Tab) -> HomeView {
        match self.load_and_render(current_tab).await {
            Ok(view) => view,
            Err(err) => {
                error!("event=home_render module=content status=error error={err}");
                HomeView::failed()
            }
        }
    }
}
