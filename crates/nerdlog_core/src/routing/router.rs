//! Current location plus route-change fan-out.

use super::hash::{parse_hash, HashRoute, Tab};
use log::debug;

/// Route delivered to callbacks after a navigation.
pub type RouteChange = HashRoute;

type RouteCallback = Box<dyn FnMut(&RouteChange) + Send>;

/// Owns the location hash and notifies subscribers when it changes.
///
/// Callbacks are synchronous observers run in registration order. Async
/// reactions (the modal load) are driven by the caller from the returned
/// [`RouteChange`], since a callback cannot await.
pub struct Router {
    hash: String,
    callbacks: Vec<RouteCallback>,
    navigations: usize,
}

impl Router {
    /// Creates a router positioned at `initial_hash` without dispatching.
    pub fn new(initial_hash: impl Into<String>) -> Self {
        Self {
            hash: initial_hash.into(),
            callbacks: Vec::new(),
            navigations: 0,
        }
    }

    /// Registers a route-change callback.
    pub fn on_route_change(&mut self, callback: impl FnMut(&RouteChange) + Send + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Current raw hash, including the leading `#` when present.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Parsed current route.
    pub fn route(&self) -> HashRoute {
        parse_hash(&self.hash)
    }

    /// Active tab of the current route.
    pub fn tab(&self) -> Tab {
        self.route().tab
    }

    /// Number of navigations performed (initial dispatch excluded).
    pub fn navigation_count(&self) -> usize {
        self.navigations
    }

    /// Dispatches the current route without changing the hash.
    pub fn start(&mut self) -> RouteChange {
        let route = self.route();
        self.dispatch(&route);
        route
    }

    /// Moves to `hash` when it differs from the current one.
    ///
    /// Returns the new route, or `None` when nothing changed.
    pub fn navigate(&mut self, hash: &str) -> Option<RouteChange> {
        let next = if hash.starts_with('#') || hash.is_empty() {
            hash.to_string()
        } else {
            format!("#{hash}")
        };
        if next == self.hash {
            return None;
        }

        debug!(
            "event=navigate module=routing status=ok from={} to={}",
            self.hash, next
        );
        self.hash = next;
        self.navigations += 1;
        let route = self.route();
        self.dispatch(&route);
        Some(route)
    }

    /// Sets or clears one parameter, keeping the tab and every other key.
    pub fn set_hash_param(&mut self, key: &str, value: Option<&str>) -> Option<RouteChange> {
        self.set_hash_params(&[(key, value)])
    }

    /// Applies several parameter changes as a single navigation.
    pub fn set_hash_params(&mut self, changes: &[(&str, Option<&str>)]) -> Option<RouteChange> {
        let mut route = self.route();
        for (key, value) in changes {
            route.params.set(key, *value);
        }
        let next = route.to_hash();
        self.navigate(&next)
    }

    fn dispatch(&mut self, route: &RouteChange) {
        for callback in &mut self.callbacks {
            callback(route);
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("")
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("hash", &self.hash)
            .field("callbacks", &self.callbacks.len())
            .field("navigations", &self.navigations)
            .finish()
    }
}
