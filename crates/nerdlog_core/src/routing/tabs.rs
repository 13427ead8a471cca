//! Tab section visibility and the mobile navigation menu.

use super::hash::Tab;

/// Visibility of the page sections and their nav links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabView {
    active: Tab,
}

impl TabView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates `tab`, deactivating every other section.
    pub fn show(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Whether the section with id `tab` carries the `active` class.
    pub fn is_section_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Whether the nav link with `data-page = page` is highlighted.
    pub fn is_nav_active(&self, page: &str) -> bool {
        self.active.as_str() == page
    }

    /// Every section with its visibility, in nav order.
    pub fn sections(&self) -> [(Tab, bool); 6] {
        Tab::ALL.map(|tab| (tab, tab == self.active))
    }
}

/// Collapsible navigation menu for narrow layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::{MobileMenu, TabView};
    use crate::routing::hash::Tab;

    #[test]
    fn exactly_one_section_is_active() {
        let mut view = TabView::new();
        view.show(Tab::Incubator);
        let active: Vec<_> = view
            .sections()
            .into_iter()
            .filter(|(_, visible)| *visible)
            .map(|(tab, _)| tab)
            .collect();
        assert_eq!(active, vec![Tab::Incubator]);
        assert!(view.is_nav_active("incubator"));
        assert!(!view.is_nav_active("home"));
    }

    #[test]
    fn menu_toggle_and_close() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
