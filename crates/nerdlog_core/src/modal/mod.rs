//! Markdown modal state machine.
//!
//! # Responsibility
//! - Map route parameters to open/close intents.
//! - Load a single document or an aggregated project document.
//! - Render loading, success and failure states as modal content.
//!
//! # Invariants
//! - `project` takes precedence over `read` when both are present.
//! - Failures end in [`ModalState::Error`]; they are never returned to callers.
//! - Only the most recently issued load may update the modal.

pub mod aggregate;
pub mod controller;
pub mod state;

pub use aggregate::{merge_project_document, ENTRY_SEPARATOR};
pub use controller::{LoadOutcome, LoadTicket, MarkdownModal, ModalError};
pub use state::{ModalIntent, ModalRequest, ModalState, ModalView};
