use nerdlog_core::content::{ContentIndexCache, ContentLoader, CONTENT_LOAD_ERROR_MESSAGE};
use nerdlog_core::fetch::{ContentFetcher, MemoryFetcher};
use nerdlog_core::routing::Tab;
use nerdlog_core::{Section, SiteConfig};
use std::sync::Arc;

const INDEX: &str = r#"{
  "items": [
    {
      "section": "lab",
      "slug": "rover",
      "title": "Rover <script>alert(1)</script>",
      "summary": "Six wheels",
      "tags": ["rust", "motors"],
      "status": "wip",
      "updatedAt": "2024-03-01",
      "entries": ["2024-01-02", "2024-01-01"]
    },
    {
      "section": "LAB",
      "slug": "probe",
      "title": "Probe",
      "updatedAt": "2024-04-01",
      "entries": ["2024-02-10"]
    },
    {
      "section": "TOOLBOX",
      "slug": "kit",
      "title": "Kit",
      "updatedAt": "2023-01-01",
      "entries": []
    },
    { "section": "BLOG", "slug": "stray", "entries": ["2030-01-01"] }
  ]
}"#;

fn fixture() -> Arc<MemoryFetcher> {
    Arc::new(
        MemoryFetcher::new()
            .with_document("./content/index.json", INDEX)
            .with_document(
                "./content/LAB/rover/entries/2024-01-02.md",
                "# 2024-01-02\n\n## 09:30 — build: Wheels mounted\n\nday two\n",
            )
            .with_document("./content/BLOG/stray/entries/2030-01-01.md", "future"),
    )
}

fn loader(fetcher: Arc<MemoryFetcher>) -> ContentLoader {
    let fetcher: Arc<dyn ContentFetcher> = fetcher;
    ContentLoader::new(
        fetcher,
        Arc::new(ContentIndexCache::new()),
        &SiteConfig::default(),
    )
}

#[tokio::test]
async fn empty_section_renders_empty_list_without_error() {
    let home = loader(fixture()).load_and_render(Tab::Home).await.unwrap();

    let incubator = home.section(Section::Incubator);
    assert!(incubator.is_empty());
    assert!(incubator.empty_visible);
    assert!(!home.lab.empty_visible);
    assert!(!home.toolbox.is_empty());
}

#[tokio::test]
async fn sections_are_sorted_by_updated_descending() {
    let home = loader(fixture()).load_and_render(Tab::Home).await.unwrap();

    let probe = home.lab.html.find(r#"data-project="LAB/probe""#).unwrap();
    let rover = home.lab.html.find(r#"data-project="LAB/rover""#).unwrap();
    assert!(probe < rover);
    assert!(!home.lab.html.contains("stray"));
}

#[tokio::test]
async fn script_in_title_renders_as_escaped_text() {
    let home = loader(fixture()).load_and_render(Tab::Home).await.unwrap();

    assert!(home.lab.html.contains("Rover &lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!home.lab.html.contains("<script>"));
    assert!(!home.recent.html.contains("<script>"));
}

#[tokio::test]
async fn missing_entry_degrades_without_aborting_recent_activity() {
    let home = loader(fixture()).load_and_render(Tab::Lab).await.unwrap();

    let items = &home.recent_items;
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].slug, "stray");
    assert_eq!(items[1].slug, "probe");
    assert!(items[1].meta.is_none());
    assert_eq!(items[1].subtitle(), "entry");

    let rover = &items[2];
    let meta = rover.meta.as_ref().unwrap();
    assert_eq!(meta.time, "09:30");
    assert_eq!(meta.kind, "build");
    assert_eq!(meta.title, "Wheels mounted");

    assert!(home.recent.html.contains(
        "#lab&amp;read=.%2Fcontent%2FLAB%2Fprobe%2Fentries%2F2024-02-10.md&amp;title=Probe"
    ));
}

#[tokio::test]
async fn recent_activity_is_truncated_to_limit() {
    let fetcher: Arc<dyn ContentFetcher> = fixture();
    let config = SiteConfig {
        recent_limit: 1,
        ..SiteConfig::default()
    };
    let loader = ContentLoader::new(fetcher, Arc::new(ContentIndexCache::new()), &config);

    let home = loader.load_and_render(Tab::Home).await.unwrap();
    assert_eq!(home.recent_items.len(), 1);
    assert_eq!(home.recent_items[0].date, "2030-01-01");
}

#[tokio::test]
async fn concurrent_first_loads_issue_a_single_index_fetch() {
    let fetcher = fixture();
    let loader = loader(fetcher.clone());

    let (a, b, c) = tokio::join!(loader.index(), loader.index(), loader.index());
    assert_eq!(a.unwrap().items.len(), 4);
    assert!(b.is_ok() && c.is_ok());
    assert_eq!(fetcher.request_count(), 1);

    loader.index().await.unwrap();
    assert_eq!(fetcher.request_count(), 1);
}

#[tokio::test]
async fn missing_index_renders_inline_error() {
    let loader = loader(Arc::new(MemoryFetcher::new()));

    assert!(loader.load_and_render(Tab::Home).await.is_err());

    let home = loader.load_or_error_view(Tab::Home).await;
    assert!(home.recent.html.contains(CONTENT_LOAD_ERROR_MESSAGE));
    assert!(home.lab.is_empty());
    assert!(home.recent_items.is_empty());
}
