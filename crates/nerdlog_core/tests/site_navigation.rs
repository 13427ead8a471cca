use nerdlog_core::fetch::{ContentFetcher, MemoryFetcher};
use nerdlog_core::i18n::{Language, TextNode, LANG_TOGGLE_ID};
use nerdlog_core::markdown::{MarkdownOptions, MarkdownRenderer};
use nerdlog_core::routing::Tab;
use nerdlog_core::{Site, SiteConfig};
use std::sync::{Arc, Mutex};

const INDEX: &str = r#"{
  "items": [
    {
      "section": "LAB",
      "slug": "rover",
      "title": "Rover",
      "updatedAt": "2024-03-01",
      "entries": ["2024-01-01"]
    }
  ]
}"#;

fn site(hash: &str) -> Site {
    let fetcher: Arc<dyn ContentFetcher> = Arc::new(
        MemoryFetcher::new()
            .with_document("./content/index.json", INDEX)
            .with_document("./content/LAB/rover/index.md", "# Rover\n\nintro")
            .with_document(
                "./content/LAB/rover/entries/2024-01-01.md",
                "## 10:00 — note: first\n\nhello",
            )
            .with_document("./content/notes/a.md", "# A note"),
    );
    let renderer = Arc::new(MarkdownRenderer::new(MarkdownOptions::default(), None));
    Site::new(SiteConfig::default(), fetcher, Some(renderer), hash)
}

#[tokio::test]
async fn boot_hides_admin_and_dispatches_initial_route() {
    let mut site = site("#lab&read=.%2Fcontent%2Fnotes%2Fa.md");
    assert!(site.admin_visible());

    let home = site.boot().await;
    assert!(!home.lab.is_empty());
    assert_eq!(home.recent_items.len(), 1);

    assert!(!site.admin_visible());
    assert_eq!(site.tabs().active(), Tab::Lab);
    assert!(site.tabs().is_nav_active("lab"));
    assert_eq!(site.modal_state().name(), "rendered");
    assert_eq!(site.modal_state().view().unwrap().title, "A note");
}

#[tokio::test]
async fn project_card_click_then_escape_clears_modal_params() {
    let mut site = site("#lab&read=x.md");
    site.boot().await;

    let state = site.click_project_card("LAB/rover", Some("Rover")).await;
    assert_eq!(state.name(), "rendered");
    assert_eq!(site.router().hash(), "#lab&title=Rover&project=LAB%2Frover");

    assert!(site.press_escape().await);
    assert_eq!(site.router().hash(), "#lab");
    assert!(!site.modal_state().is_open());

    assert!(!site.press_escape().await);
}

#[tokio::test]
async fn close_modal_keeps_unrelated_params() {
    let mut site = site("#toolbox&ref=feed&read=.%2Fcontent%2Fnotes%2Fa.md&title=A");
    site.boot().await;
    assert!(site.modal_state().is_open());

    site.close_modal().await;
    assert_eq!(site.router().hash(), "#toolbox&ref=feed");
    assert!(!site.modal_state().is_open());
}

#[tokio::test]
async fn nav_click_switches_tab_and_closes_menu() {
    let mut site = site("");
    site.boot().await;
    assert_eq!(site.tabs().active(), Tab::Home);

    site.toggle_menu();
    assert!(site.menu().is_open());

    assert!(site.click_nav("#who").await);
    assert_eq!(site.tabs().active(), Tab::Who);
    assert!(!site.menu().is_open());
    let active: Vec<Tab> = site
        .tabs()
        .sections()
        .into_iter()
        .filter(|(_, visible)| *visible)
        .map(|(tab, _)| tab)
        .collect();
    assert_eq!(active, vec![Tab::Who]);

    assert!(!site.click_nav("https://example.com").await);
    assert!(!site.click_nav("#nowhere").await);
    assert_eq!(site.tabs().active(), Tab::Who);
}

#[tokio::test]
async fn language_toggle_updates_document() {
    let mut site = site("");
    site.boot().await;
    assert_eq!(site.language(), Language::It);

    assert_eq!(site.toggle_language(), Language::En);
    assert_eq!(
        site.document().get(LANG_TOGGLE_ID).map(TextNode::as_str),
        Some("EN / IT")
    );
}

#[tokio::test]
async fn english_config_applies_on_boot() {
    let fetcher: Arc<dyn ContentFetcher> = Arc::new(MemoryFetcher::new());
    let config = SiteConfig {
        language: Language::En,
        ..SiteConfig::default()
    };
    let mut site = Site::new(config, fetcher, None, "");

    let home = site.boot().await;
    assert!(home.recent.html.contains("Failed to load content"));
    assert_eq!(
        site.document().get(LANG_TOGGLE_ID).map(TextNode::as_str),
        Some("EN / IT")
    );
}

#[tokio::test]
async fn site_without_renderer_reports_inline() {
    let fetcher: Arc<dyn ContentFetcher> =
        Arc::new(MemoryFetcher::new().with_document("./content/notes/a.md", "# A"));
    let mut site = Site::new(SiteConfig::default(), fetcher, None, "#home&read=.%2Fcontent%2Fnotes%2Fa.md");

    site.boot().await;
    let view = site.modal_state().view().unwrap();
    assert!(view.body_html.contains("markdown renderer not available"));
}

#[tokio::test]
async fn unknown_nav_href_leaves_menu_open() {
    let mut site = site("");
    site.boot().await;
    site.toggle_menu();

    assert!(!site.click_nav("#nowhere").await);
    assert!(!site.click_nav("https://example.com").await);
    assert!(site.menu().is_open());
}

#[tokio::test]
async fn route_observers_see_boot_and_every_navigation() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut site = site("#lab");
    let observer = seen.clone();
    site.on_route_change(move |route| observer.lock().unwrap().push(route.to_hash()));

    site.boot().await;
    site.click_project_card("LAB/rover", None).await;
    site.close_modal().await;
    site.navigate("#lab").await;

    assert_eq!(
        *seen.lock().unwrap(),
        vec!["#lab", "#lab&project=LAB%2Frover", "#lab"]
    );
}
