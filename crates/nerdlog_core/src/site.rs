//! Page-level orchestration.
//!
//! # Responsibility
//! - Turn navigations into tab visibility and modal transitions.
//! - Handle nav clicks, project-card clicks and close gestures.
//! - Run the boot sequence: admin UI, language, initial route, home view.
//!
//! # Invariants
//! - Every navigation is followed by exactly one tab update and one modal
//!   intent.
//! - Close gestures clear `read`, `project` and `title` in one navigation.

use crate::config::SiteConfig;
use crate::content::{ContentIndex, ContentIndexCache, ContentLoader, HomeView, LoadError};
use crate::fetch::ContentFetcher;
use crate::i18n::{Language, LanguageToggle, TextDocument};
use crate::markdown::MarkdownRenderer;
use crate::modal::{MarkdownModal, ModalIntent, ModalState};
use crate::routing::{
    MobileMenu, RouteChange, Router, Tab, TabView, PARAM_PROJECT, PARAM_READ, PARAM_TITLE,
};
use log::{debug, info};
use std::sync::Arc;

/// One running site client.
pub struct Site {
    config: SiteConfig,
    router: Router,
    tabs: TabView,
    menu: MobileMenu,
    language: LanguageToggle,
    document: TextDocument,
    modal: MarkdownModal,
    loader: ContentLoader,
    admin_visible: bool,
    home: HomeView,
}

impl Site {
    /// Builds a client positioned at `initial_hash`; nothing is fetched
    /// until [`Site::boot`].
    pub fn new(
        config: SiteConfig,
        fetcher: Arc<dyn ContentFetcher>,
        renderer: Option<Arc<MarkdownRenderer>>,
        initial_hash: &str,
    ) -> Self {
        let cache = Arc::new(ContentIndexCache::new());
        let loader = ContentLoader::new(fetcher.clone(), cache.clone(), &config);
        let modal = MarkdownModal::new(fetcher, cache, renderer);
        Self {
            language: LanguageToggle::new(config.language),
            config,
            router: Router::new(initial_hash),
            tabs: TabView::new(),
            menu: MobileMenu::default(),
            document: TextDocument::for_language(Language::default()),
            modal,
            loader,
            admin_visible: true,
            home: HomeView::default(),
        }
    }

    /// Hides admin UI, applies the language, dispatches the current route and
    /// loads the home lists.
    pub async fn boot(&mut self) -> &HomeView {
        self.admin_visible = false;
        self.language.apply(&mut self.document);
        let route = self.router.start();
        self.handle_route(route).await;
        self.home = self.loader.load_or_error_view(self.router.tab()).await;
        info!(
            "event=site_boot module=site status=ok tab={} language={} modal={}",
            self.router.tab(),
            self.language.current().as_str(),
            self.modal.state().name()
        );
        &self.home
    }

    /// Moves to `hash` and applies the resulting route.
    ///
    /// Returns `false` when `hash` equals the current hash.
    pub async fn navigate(&mut self, hash: &str) -> bool {
        match self.router.navigate(hash) {
            Some(route) => {
                self.handle_route(route).await;
                true
            }
            None => false,
        }
    }

    /// Nav link click. Only `#<tab>` links for known tabs navigate and close
    /// the mobile menu; any other href leaves both untouched.
    pub async fn click_nav(&mut self, href: &str) -> bool {
        let Some(name) = href.strip_prefix('#') else {
            return false;
        };
        let Some(tab) = Tab::from_name(name) else {
            debug!("event=nav_click module=site status=ignored href={href}");
            return false;
        };
        self.menu.close();
        self.navigate(&format!("#{tab}")).await
    }

    /// Opens a project from its card: sets `title`, clears `read` and sets
    /// `project` as a single navigation.
    pub async fn click_project_card(&mut self, project: &str, title: Option<&str>) -> &ModalState {
        let changed = self.router.set_hash_params(&[
            (PARAM_TITLE, title),
            (PARAM_READ, None),
            (PARAM_PROJECT, Some(project)),
        ]);
        if let Some(route) = changed {
            self.handle_route(route).await;
        }
        self.modal.state()
    }

    /// Close button or backdrop click.
    pub async fn close_modal(&mut self) {
        let changed = self.router.set_hash_params(&[
            (PARAM_READ, None),
            (PARAM_PROJECT, None),
            (PARAM_TITLE, None),
        ]);
        match changed {
            Some(route) => self.handle_route(route).await,
            None => self.modal.close(),
        }
    }

    /// Escape key; closes the modal only while it is open.
    pub async fn press_escape(&mut self) -> bool {
        if !self.modal.is_open() {
            return false;
        }
        self.close_modal().await;
        true
    }

    /// Registers an observer notified after every dispatched route, before
    /// the tab and modal react to it.
    pub fn on_route_change(&mut self, callback: impl FnMut(&RouteChange) + Send + 'static) {
        self.router.on_route_change(callback);
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// Flips the language and rewrites every translated node.
    pub fn toggle_language(&mut self) -> Language {
        let language = self.language.toggle(&mut self.document);
        info!(
            "event=language_toggle module=site status=ok language={}",
            language.as_str()
        );
        language
    }

    /// Re-renders the home lists, e.g. after the tab changed.
    pub async fn reload_home(&mut self) -> &HomeView {
        self.home = self.loader.load_or_error_view(self.router.tab()).await;
        &self.home
    }

    /// Cached content index.
    pub async fn index(&self) -> Result<Arc<ContentIndex>, LoadError> {
        self.loader.index().await
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn tabs(&self) -> &TabView {
        &self.tabs
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn language(&self) -> Language {
        self.language.current()
    }

    pub fn document(&self) -> &TextDocument {
        &self.document
    }

    pub fn modal_state(&self) -> &ModalState {
        self.modal.state()
    }

    pub fn home(&self) -> &HomeView {
        &self.home
    }

    pub fn admin_visible(&self) -> bool {
        self.admin_visible
    }

    async fn handle_route(&mut self, route: RouteChange) {
        self.tabs.show(route.tab);
        let intent = ModalIntent::from_params(&route.params);
        self.modal.apply(intent).await;
    }
}
