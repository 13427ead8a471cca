//! Small shared helpers with no domain state.
//!
//! # Responsibility
//! - Escape untrusted text before it is interpolated into HTML.
//! - Encode/decode hash parameter components.

pub mod encoding;
pub mod escape;

pub use encoding::{decode_component, encode_component};
pub use escape::{esc, escape_html};
