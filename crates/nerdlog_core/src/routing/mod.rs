//! Hash-based client routing.
//!
//! # Responsibility
//! - Parse and serialize `#<tab>[&key=value]*` hash routes.
//! - Track the current location and fan route changes out to callbacks.
//! - Derive tab-section and nav-link visibility for the active tab.
//!
//! # Invariants
//! - Route state is rebuilt from the hash on every navigation.
//! - A parameter with an empty value is never stored.
//! - Navigation only happens when the serialized hash actually changes.

pub mod hash;
pub mod router;
pub mod tabs;

pub use hash::{parse_hash, HashParams, HashRoute, Tab, PARAM_PROJECT, PARAM_READ, PARAM_TITLE};
pub use router::{RouteChange, Router};
pub use tabs::{MobileMenu, TabView};
