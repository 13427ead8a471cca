//! Hash route grammar.

use crate::util::{decode_component, encode_component};
use std::fmt::{Display, Formatter};

/// Parameter naming a markdown file to open in the modal.
pub const PARAM_READ: &str = "read";
/// Parameter naming a project (`SECTION/slug`) to open in the modal.
pub const PARAM_PROJECT: &str = "project";
/// Parameter carrying an explicit modal title.
pub const PARAM_TITLE: &str = "title";

/// Top-level page sections reachable through the hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Tab {
    #[default]
    Home,
    Lab,
    Incubator,
    Toolbox,
    Who,
    Admin,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::Lab,
        Tab::Incubator,
        Tab::Toolbox,
        Tab::Who,
        Tab::Admin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Lab => "lab",
            Self::Incubator => "incubator",
            Self::Toolbox => "toolbox",
            Self::Who => "who",
            Self::Admin => "admin",
        }
    }

    /// Exact, case-sensitive match against the tab names.
    pub fn from_name(name: &str) -> Option<Tab> {
        Self::ALL.into_iter().find(|tab| tab.as_str() == name)
    }
}

impl Display for Tab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insertion-ordered string parameters of a hash route.
///
/// Keys are unique; re-inserting a key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashParams {
    entries: Vec<(String, String)>,
}

impl HashParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Sets `key`, or removes it when `value` is `None` or empty.
    pub fn set(&mut self, key: &str, value: Option<&str>) {
        match value.filter(|v| !v.is_empty()) {
            Some(value) => {
                if let Some(slot) = self.entries.iter_mut().find(|(k, _)| k == key) {
                    slot.1 = value.to_string();
                } else {
                    self.entries.push((key.to_string(), value.to_string()));
                }
            }
            None => self.entries.retain(|(k, _)| k != key),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parsed navigation state of one hash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashRoute {
    pub tab: Tab,
    pub params: HashParams,
}

impl HashRoute {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            params: HashParams::new(),
        }
    }

    /// Serializes to `#<tab>&<key>=<value>...` with encoded components.
    pub fn to_hash(&self) -> String {
        let mut out = format!("#{}", self.tab);
        for (key, value) in self.params.iter() {
            out.push('&');
            out.push_str(&encode_component(key));
            out.push('=');
            out.push_str(&encode_component(value));
        }
        out
    }
}

/// Parses a location hash (with or without the leading `#`).
///
/// The tab is the text before the first `?` or `&`; anything that is not a
/// known tab name resolves to [`Tab::Home`]. Parameters follow the first `&`.
pub fn parse_hash(hash: &str) -> HashRoute {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    let head = raw.split('&').next().unwrap_or_default();
    let tab_name = head.split('?').next().unwrap_or_default();
    let tab = Tab::from_name(tab_name).unwrap_or_default();

    let mut params = HashParams::new();
    for part in raw.split('&').skip(1) {
        let (key, value) = part.split_once('=').unwrap_or((part, ""));
        if key.is_empty() {
            continue;
        }
        let key = decode_component(key);
        let value = decode_component(value);
        params.set(&key, Some(value.as_ref()));
    }

    HashRoute { tab, params }
}
