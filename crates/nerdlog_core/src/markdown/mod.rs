//! Markdown to HTML rendering.
//!
//! # Responsibility
//! - Configure one renderer shared by the modal and any other consumer.
//! - Keep raw HTML from documents out of the output.
//! - Hand fenced code to an optional syntax highlighter.
//!
//! # Invariants
//! - Document text never reaches the output unescaped.
//! - Rendering never fails; empty input renders to an empty string.

pub mod highlight;
pub mod renderer;

pub use highlight::{ClassHighlighter, Highlighter};
pub use renderer::{first_heading, MarkdownOptions, MarkdownRenderer};
