//! Bilingual UI strings.
//!
//! # Responsibility
//! - Hold the Italian/English string catalog keyed by element id.
//! - Apply the active language to a document of translatable nodes.
//!
//! # Invariants
//! - Applying a language only touches nodes listed in the catalog.
//! - Toggling twice restores every catalog node to its previous content.

pub mod catalog;
pub mod language;

pub use catalog::{catalog, CatalogEntry, Markup};
pub use language::{Language, LanguageToggle, TextDocument, TextNode, LANG_TOGGLE_ID};
