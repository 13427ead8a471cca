use nerdlog_core::fetch::{fetch_json, ContentFetcher, FetchError, FsFetcher};
use nerdlog_core::ContentIndex;
use std::fs;

fn site_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("content/LAB/rover/entries")).unwrap();
    fs::write(
        dir.path().join("content/index.json"),
        r#"{"items":[{"section":"LAB","slug":"rover","entries":["2024-01-01"]}]}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("content/LAB/rover/entries/2024-01-01.md"),
        "# 2024-01-01\n",
    )
    .unwrap();
    dir
}

#[tokio::test]
async fn reads_site_relative_paths() {
    let root = site_root();
    let fetcher = FsFetcher::new(root.path());

    let index: ContentIndex = fetch_json(&fetcher, "./content/index.json").await.unwrap();
    assert_eq!(index.items.len(), 1);
    assert_eq!(index.items[0].slug, "rover");

    let entry = fetcher
        .fetch_text("content/LAB/rover/entries/2024-01-01.md")
        .await
        .unwrap();
    assert_eq!(entry, "# 2024-01-01\n");
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let root = site_root();
    let fetcher = FsFetcher::new(root.path());

    let err = fetcher.fetch_text("./content/nope.md").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.path(), "./content/nope.md");
}

#[tokio::test]
async fn rejects_paths_escaping_the_root() {
    let root = site_root();
    let fetcher = FsFetcher::new(root.path().join("content"));

    let err = fetcher.fetch_text("../secret.txt").await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidPath(_)));
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let root = site_root();
    fs::write(root.path().join("content/index.json"), "{not json").unwrap();
    let fetcher = FsFetcher::new(root.path());

    let err = fetch_json::<ContentIndex>(&fetcher, "./content/index.json")
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }));
}
