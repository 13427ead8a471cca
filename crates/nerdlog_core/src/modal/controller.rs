//! Modal loading with stale-result protection.

use super::aggregate::merge_project_document;
use super::state::{
    error_view, ModalIntent, ModalRequest, ModalState, ModalView, ERROR_TITLE, LOADING_TITLE,
    PROJECT_NOT_FOUND_TITLE,
};
use crate::content::{project_dir_path, ContentIndexCache, ProjectKey, CONTENT_INDEX_PATH};
use crate::fetch::{ContentFetcher, FetchError};
use crate::markdown::{first_heading, MarkdownRenderer};
use futures::future::try_join_all;
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Why a modal load ended in the error state.
#[derive(Debug)]
pub enum ModalError {
    Fetch(FetchError),
    RendererUnavailable,
    ProjectNotFound(ProjectKey),
}

impl Display for ModalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch(err) => write!(f, "{err}"),
            Self::RendererUnavailable => write!(f, "markdown renderer not available"),
            Self::ProjectNotFound(key) => {
                write!(f, "project {key} not found in {CONTENT_INDEX_PATH}")
            }
        }
    }
}

impl Error for ModalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fetch(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FetchError> for ModalError {
    fn from(value: FetchError) -> Self {
        Self::Fetch(value)
    }
}

/// Handle for one issued load; only the newest ticket may complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    request: ModalRequest,
}

impl LoadTicket {
    pub fn request(&self) -> &ModalRequest {
        &self.request
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of running a ticket's load.
#[derive(Debug)]
pub enum LoadOutcome {
    Rendered(ModalView),
    Failed { view: ModalView, error: ModalError },
}

impl LoadOutcome {
    fn failed(kicker: String, title: &str, error: ModalError) -> Self {
        let message = match &error {
            ModalError::ProjectNotFound(_) => {
                format!("Project not found in {}", CONTENT_INDEX_PATH.trim_start_matches("./"))
            }
            other => format!("Error loading: {other}"),
        };
        LoadOutcome::Failed {
            view: error_view(kicker, title, &message),
            error,
        }
    }

    fn into_state(self) -> ModalState {
        match self {
            Self::Rendered(view) => ModalState::Rendered(view),
            Self::Failed { view, .. } => ModalState::Error(view),
        }
    }
}

/// Modal controller: owns the visible state and performs loads.
pub struct MarkdownModal {
    fetcher: Arc<dyn ContentFetcher>,
    index: Arc<ContentIndexCache>,
    renderer: Option<Arc<MarkdownRenderer>>,
    state: ModalState,
    generation: u64,
}

impl MarkdownModal {
    /// `renderer` of `None` makes every load fail inline.
    pub fn new(
        fetcher: Arc<dyn ContentFetcher>,
        index: Arc<ContentIndexCache>,
        renderer: Option<Arc<MarkdownRenderer>>,
    ) -> Self {
        Self {
            fetcher,
            index,
            renderer,
            state: ModalState::Closed,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Applies a route-derived intent and waits for the resulting state.
    pub async fn apply(&mut self, intent: ModalIntent) -> &ModalState {
        match intent {
            ModalIntent::Open(request) => self.open(request).await,
            ModalIntent::Close => {
                self.close();
                &self.state
            }
        }
    }

    /// Opens one markdown file.
    pub async fn open_markdown(&mut self, path: &str, title: Option<&str>) -> &ModalState {
        self.open(ModalRequest::Read {
            path: path.to_string(),
            title: title.filter(|t| !t.is_empty()).map(str::to_string),
        })
        .await
    }

    /// Opens the aggregated document of one project.
    pub async fn open_project(&mut self, section: &str, slug: &str) -> &ModalState {
        self.open(ModalRequest::Project(ProjectKey {
            section: section.to_string(),
            slug: slug.to_string(),
        }))
        .await
    }

    /// Issues, runs and completes a load.
    pub async fn open(&mut self, request: ModalRequest) -> &ModalState {
        let ticket = self.begin(request);
        let outcome = self.load(&ticket).await;
        self.complete(&ticket, outcome);
        &self.state
    }

    /// Shows the loading state and issues a ticket, superseding older ones.
    pub fn begin(&mut self, request: ModalRequest) -> LoadTicket {
        self.generation += 1;
        self.state = match &request {
            ModalRequest::Read { path, title } => ModalState::loading(
                path.clone(),
                title.clone().unwrap_or_else(|| LOADING_TITLE.to_string()),
                LOADING_TITLE,
            ),
            ModalRequest::Project(key) => ModalState::loading(
                project_dir_path(&key.section, &key.slug),
                LOADING_TITLE.to_string(),
                "Loading project…",
            ),
        };
        LoadTicket {
            generation: self.generation,
            request,
        }
    }

    /// Runs the fetches and rendering for `ticket` without touching state.
    pub async fn load(&self, ticket: &LoadTicket) -> LoadOutcome {
        let outcome = match &ticket.request {
            ModalRequest::Read { path, title } => self.load_markdown(path, title.as_deref()).await,
            ModalRequest::Project(key) => self.load_project(key).await,
        };
        match &outcome {
            LoadOutcome::Rendered(view) => info!(
                "event=modal_load module=modal status=ok kicker={} bytes={}",
                view.kicker,
                view.body_html.len()
            ),
            LoadOutcome::Failed { view, error } => error!(
                "event=modal_load module=modal status=error kicker={} error={}",
                view.kicker, error
            ),
        }
        outcome
    }

    /// Applies `outcome` if `ticket` is still current.
    ///
    /// Returns `false` when the result is stale (a newer open or a close
    /// happened since `ticket` was issued) and was discarded.
    pub fn complete(&mut self, ticket: &LoadTicket, outcome: LoadOutcome) -> bool {
        if ticket.generation != self.generation || !self.state.is_open() {
            debug!(
                "event=modal_load module=modal status=stale ticket={} current={}",
                ticket.generation, self.generation
            );
            return false;
        }
        self.state = outcome.into_state();
        true
    }

    /// Hides the modal and invalidates in-flight loads.
    pub fn close(&mut self) {
        self.generation += 1;
        self.state = ModalState::Closed;
    }

    fn renderer(&self) -> Result<&MarkdownRenderer, ModalError> {
        self.renderer
            .as_deref()
            .ok_or(ModalError::RendererUnavailable)
    }

    async fn load_markdown(&self, path: &str, title: Option<&str>) -> LoadOutcome {
        let result = async {
            let renderer = self.renderer()?;
            let text = self.fetcher.fetch_text(path).await?;
            Ok::<_, ModalError>((renderer.render(&text), first_heading(&text)))
        }
        .await;

        match result {
            Ok((body_html, heading)) => {
                let title = title
                    .map(str::to_string)
                    .or(heading)
                    .unwrap_or_else(|| base_name(path).to_string());
                LoadOutcome::Rendered(ModalView {
                    kicker: path.to_string(),
                    title,
                    body_html,
                })
            }
            Err(err) => LoadOutcome::failed(path.to_string(), ERROR_TITLE, err),
        }
    }

    async fn load_project(&self, key: &ProjectKey) -> LoadOutcome {
        let requested_dir = project_dir_path(&key.section, &key.slug);
        let index = match self.index.get(self.fetcher.as_ref()).await {
            Ok(index) => index,
            Err(err) => return LoadOutcome::failed(requested_dir, ERROR_TITLE, err.into()),
        };
        let Some(project) = index.find_project(&key.section, &key.slug) else {
            return LoadOutcome::failed(
                requested_dir,
                PROJECT_NOT_FOUND_TITLE,
                ModalError::ProjectNotFound(key.clone()),
            );
        };

        let kicker = project.dir_path();
        let result = async {
            let renderer = self.renderer()?;
            let fetcher = self.fetcher.as_ref();
            let index_markdown = fetcher.fetch_text(&project.index_path()).await?;
            let entries = try_join_all(project.chronological_entries().map(|date| {
                let path = project.entry_path(date);
                async move { fetcher.fetch_text(&path).await }
            }))
            .await?;
            let merged =
                merge_project_document(&index_markdown, entries.iter().map(String::as_str));
            Ok::<_, ModalError>(renderer.render(&merged))
        }
        .await;

        match result {
            Ok(body_html) => LoadOutcome::Rendered(ModalView {
                kicker,
                title: project.display_title().to_string(),
                body_html,
            }),
            Err(err) => LoadOutcome::failed(kicker, ERROR_TITLE, err),
        }
    }
}

fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::base_name;

    #[test]
    fn base_name_takes_last_segment() {
        assert_eq!(base_name("./content/LAB/x/entries/2024-01-01.md"), "2024-01-01.md");
        assert_eq!(base_name("plain.md"), "plain.md");
    }
}
