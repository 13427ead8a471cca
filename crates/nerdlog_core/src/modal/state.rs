//! Modal states and the intents that drive them.

use crate::content::ProjectKey;
use crate::routing::{HashParams, PARAM_PROJECT, PARAM_READ, PARAM_TITLE};
use crate::util::esc;

/// What the modal should load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalRequest {
    /// One markdown file by path.
    Read {
        path: String,
        title: Option<String>,
    },
    /// A project index plus all of its entries.
    Project(ProjectKey),
}

/// Modal reaction to a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalIntent {
    Open(ModalRequest),
    Close,
}

impl ModalIntent {
    /// `project` wins over `read`; neither closes the modal.
    pub fn from_params(params: &HashParams) -> ModalIntent {
        if let Some(project) = params.get(PARAM_PROJECT) {
            return ModalIntent::Open(ModalRequest::Project(ProjectKey::parse(project)));
        }
        if let Some(path) = params.get(PARAM_READ) {
            return ModalIntent::Open(ModalRequest::Read {
                path: path.to_string(),
                title: params.get(PARAM_TITLE).map(str::to_string),
            });
        }
        ModalIntent::Close
    }
}

/// Visible content of an open modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    /// Path or directory line above the title.
    pub kicker: String,
    pub title: String,
    pub body_html: String,
}

/// Modal lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Loading(ModalView),
    Rendered(ModalView),
    Error(ModalView),
}

pub(crate) const LOADING_TITLE: &str = "Loading…";
pub(crate) const ERROR_TITLE: &str = "Error";
pub(crate) const PROJECT_NOT_FOUND_TITLE: &str = "Project not found";

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn view(&self) -> Option<&ModalView> {
        match self {
            Self::Closed => None,
            Self::Loading(view) | Self::Rendered(view) | Self::Error(view) => Some(view),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Loading(_) => "loading",
            Self::Rendered(_) => "rendered",
            Self::Error(_) => "error",
        }
    }

    pub(crate) fn loading(kicker: String, title: String, message: &str) -> Self {
        Self::Loading(ModalView {
            kicker,
            title,
            body_html: format!(
                r#"<div class="font-mono-tech text-sm text-[#606060]">{}</div>"#,
                esc(message)
            ),
        })
    }
}

pub(crate) fn error_view(kicker: String, title: &str, message: &str) -> ModalView {
    ModalView {
        kicker,
        title: title.to_string(),
        body_html: format!(
            r#"<div class="font-mono-tech text-sm text-red-300">{}</div>"#,
            esc(message)
        ),
    }
}
