//! Content index data model.
//!
//! Mirrors the JSON written by the content build step; every field is
//! optional on the wire and defaults when absent.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Content category a project is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Lab,
    Incubator,
    Toolbox,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Lab, Section::Incubator, Section::Toolbox];

    /// Uppercase wire/directory name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lab => "LAB",
            Self::Incubator => "INCUBATOR",
            Self::Toolbox => "TOOLBOX",
        }
    }

    /// Case-insensitive parse; surrounding whitespace is ignored.
    pub fn parse(value: &str) -> Option<Section> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == normalized)
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One project listed in the content index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectSummary {
    /// Section name as written in the index; compare via [`Self::section_kind`].
    pub section: String,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub status: String,
    /// ISO-like date; ordering uses plain string comparison.
    pub updated_at: String,
    /// Entry dates, newest first.
    pub entries: Vec<String>,
    /// Explicit project index document path, overriding the default layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_index: Option<String>,
}

impl ProjectSummary {
    pub fn section_kind(&self) -> Option<Section> {
        Section::parse(&self.section)
    }

    /// Uppercased section name, used for paths and display.
    pub fn section_upper(&self) -> String {
        self.section.trim().to_ascii_uppercase()
    }

    /// Title, falling back to the slug.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.slug
        } else {
            &self.title
        }
    }

    /// `SECTION/slug` key used by the `project` hash parameter.
    pub fn key(&self) -> String {
        format!("{}/{}", self.section_upper(), self.slug)
    }

    /// Newest entry date, if any.
    pub fn latest_entry(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    /// Entry dates oldest first.
    pub fn chronological_entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(String::as_str)
    }

    /// Whether this project matches a section (case-insensitive) and slug (exact).
    pub fn matches(&self, section: &str, slug: &str) -> bool {
        self.section_upper() == section.trim().to_ascii_uppercase() && self.slug == slug
    }
}

/// Root document of `content/index.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentIndex {
    #[serde(default)]
    pub items: Vec<ProjectSummary>,
}

impl ContentIndex {
    pub fn new(items: Vec<ProjectSummary>) -> Self {
        Self { items }
    }

    /// Looks up a project by section (case-insensitive) and slug (exact).
    pub fn find_project(&self, section: &str, slug: &str) -> Option<&ProjectSummary> {
        self.items.iter().find(|p| p.matches(section, slug))
    }
}

/// Parsed `project` hash parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectKey {
    pub section: String,
    pub slug: String,
}

impl ProjectKey {
    /// Splits `SECTION/slug` on the first `/`.
    ///
    /// A value without a slash yields an empty slug, which never matches a
    /// project.
    pub fn parse(value: &str) -> ProjectKey {
        let (section, slug) = value.split_once('/').unwrap_or((value, ""));
        ProjectKey {
            section: section.to_string(),
            slug: slug.to_string(),
        }
    }
}

impl Display for ProjectKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.section, self.slug)
    }
}
