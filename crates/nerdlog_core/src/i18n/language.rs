//! Active language state and the translatable document it drives.

use super::catalog::{catalog, Markup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Element id of the language toggle button.
pub const LANG_TOGGLE_ID: &str = "lang-toggle";

/// UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    It,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::It => "it",
            Self::En => "en",
        }
    }

    pub fn other(self) -> Language {
        match self {
            Self::It => Self::En,
            Self::En => Self::It,
        }
    }

    pub fn parse(value: &str) -> Option<Language> {
        match value.trim().to_ascii_lowercase().as_str() {
            "it" => Some(Self::It),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Label of the toggle button: current language first.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::It => "IT / EN",
            Self::En => "EN / IT",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content of one translatable element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextNode {
    /// Plain text (`textContent`).
    Text(String),
    /// Trusted markup from the catalog (`innerHTML`).
    Html(String),
}

impl TextNode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(value) | Self::Html(value) => value,
        }
    }
}

/// Translatable elements of the page shell, keyed by element id.
///
/// Only ids present in the document are updated; missing elements are
/// skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    nodes: BTreeMap<String, TextNode>,
}

impl TextDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document containing every catalog element plus the toggle button,
    /// filled for `language`.
    pub fn for_language(language: Language) -> Self {
        let mut document = Self::new();
        document.insert(LANG_TOGGLE_ID, TextNode::Text(String::new()));
        for entry in catalog() {
            document.insert(entry.id, TextNode::Text(String::new()));
        }
        LanguageToggle::new(language).apply(&mut document);
        document
    }

    pub fn insert(&mut self, id: &str, node: TextNode) {
        self.nodes.insert(id.to_string(), node);
    }

    pub fn get(&self, id: &str) -> Option<&TextNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TextNode)> {
        self.nodes.iter().map(|(id, node)| (id.as_str(), node))
    }

    fn replace_existing(&mut self, id: &str, node: TextNode) -> bool {
        match self.nodes.get_mut(id) {
            Some(slot) => {
                *slot = node;
                true
            }
            None => false,
        }
    }
}

/// Current language plus the operation that applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageToggle {
    current: Language,
}

impl LanguageToggle {
    pub fn new(current: Language) -> Self {
        Self { current }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Switches language and re-applies the catalog.
    pub fn toggle(&mut self, document: &mut TextDocument) -> Language {
        self.current = self.current.other();
        self.apply(document);
        self.current
    }

    /// Writes the current language into every catalog node of `document`.
    ///
    /// Returns the number of nodes updated.
    pub fn apply(&self, document: &mut TextDocument) -> usize {
        let mut updated = 0;
        if document.replace_existing(
            LANG_TOGGLE_ID,
            TextNode::Text(self.current.toggle_label().to_string()),
        ) {
            updated += 1;
        }
        for entry in catalog() {
            let value = entry.text(self.current).to_string();
            let node = match entry.markup {
                Markup::Text => TextNode::Text(value),
                Markup::Html => TextNode::Html(value),
            };
            if document.replace_existing(entry.id, node) {
                updated += 1;
            }
        }
        updated
    }
}
