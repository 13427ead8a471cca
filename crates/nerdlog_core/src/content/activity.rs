//! Recent-activity feed built from each project's newest entry.
//!
//! # Responsibility
//! - Fetch only the newest entry document per project, in parallel.
//! - Parse the optional `## HH:MM — type: title` heading of that entry.
//! - Render the feed as links that open the entry in the modal.
//!
//! # Invariants
//! - A failed fetch degrades that project to a date-only item.
//! - Fan-out is bounded and fully joined before rendering.

use super::cards::ListView;
use super::model::ProjectSummary;
use crate::fetch::ContentFetcher;
use crate::routing::{Tab, PARAM_READ, PARAM_TITLE};
use crate::util::{encode_component, esc};
use futures::stream::{self, StreamExt};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static ENTRY_META_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^##\s+(\d{2}:\d{2})\s+[—-]\s+([a-zA-Z0-9_-]+)\s*:\s*(.+)$")
        .expect("valid entry meta regex")
});

/// Metadata parsed from an entry heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    /// `HH:MM`
    pub time: String,
    /// Entry type such as `log`, `fail` or `note`.
    pub kind: String,
    pub title: String,
}

/// Parses the first line matching `## HH:MM — type: title`.
pub fn parse_latest_entry_meta(markdown: &str) -> Option<EntryMeta> {
    let caps = ENTRY_META_RE.captures(markdown)?;
    Some(EntryMeta {
        time: caps[1].to_string(),
        kind: caps[2].to_string(),
        title: caps[3].trim().to_string(),
    })
}

/// One row of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentActivityItem {
    pub section: String,
    pub slug: String,
    pub project_title: String,
    /// Entry date (file name without extension).
    pub date: String,
    /// `None` when the entry could not be fetched or has no meta heading.
    pub meta: Option<EntryMeta>,
    pub entry_path: String,
}

impl RecentActivityItem {
    fn date_only(project: &ProjectSummary, date: &str, entry_path: String) -> Self {
        Self {
            section: project.section.clone(),
            slug: project.slug.clone(),
            project_title: project.title.clone(),
            date: date.to_string(),
            meta: None,
            entry_path,
        }
    }

    /// Display title, falling back to the slug and then `Untitled`.
    pub fn display_title(&self) -> &str {
        if !self.project_title.is_empty() {
            &self.project_title
        } else if !self.slug.is_empty() {
            &self.slug
        } else {
            "Untitled"
        }
    }

    /// `type : title` line under the project title.
    pub fn subtitle(&self) -> String {
        match &self.meta {
            Some(meta) if !meta.title.is_empty() => format!("{} : {}", meta.kind, meta.title),
            Some(meta) if !meta.kind.is_empty() => meta.kind.clone(),
            _ => "entry".to_string(),
        }
    }
}

/// Fetches the newest entry of every project and builds the feed.
///
/// Projects without entries are skipped. At most `concurrency` fetches run at
/// once. The result is sorted by date descending (ties keep index order) and
/// truncated to `limit`.
pub async fn collect_recent_activity(
    fetcher: &dyn ContentFetcher,
    projects: &[ProjectSummary],
    concurrency: usize,
    limit: usize,
) -> Vec<RecentActivityItem> {
    let tasks = projects
        .iter()
        .enumerate()
        .filter_map(|(position, project)| {
            project
                .latest_entry()
                .map(|date| (position, project, date.to_string()))
        })
        .map(|(position, project, date)| async move {
            let entry_path = project.entry_path(&date);
            let item = match fetcher.fetch_text(&entry_path).await {
                Ok(markdown) => RecentActivityItem {
                    meta: parse_latest_entry_meta(&markdown),
                    ..RecentActivityItem::date_only(project, &date, entry_path)
                },
                Err(err) => {
                    warn!(
                        "event=recent_entry_fetch module=content status=degraded project={} error={}",
                        project.key(),
                        err
                    );
                    RecentActivityItem::date_only(project, &date, entry_path)
                }
            };
            (position, item)
        });

    let mut collected: Vec<(usize, RecentActivityItem)> = stream::iter(tasks)
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    collected.sort_by(|(pos_a, a), (pos_b, b)| b.date.cmp(&a.date).then(pos_a.cmp(pos_b)));
    collected
        .into_iter()
        .take(limit)
        .map(|(_, item)| item)
        .collect()
}

/// Renders the feed; each item links to `#<tab>&read=<path>&title=<title>`.
pub fn render_recent_activity(items: &[RecentActivityItem], current_tab: Tab) -> ListView {
    if items.is_empty() {
        return ListView::empty();
    }

    let html = items
        .iter()
        .map(|item| {
            let title = item.display_title();
            let href = format!(
                "#{current_tab}&{PARAM_READ}={}&{PARAM_TITLE}={}",
                encode_component(&item.entry_path),
                encode_component(title)
            );
            let time = item
                .meta
                .as_ref()
                .map(|meta| format!(" • {}", esc(&meta.time)))
                .unwrap_or_default();
            format!(
                r##"
      <a href="{href}"
         class="block bg-[#141416] border border-[#2a2a2e] rounded-lg p-5 hover:border-[#4ade80] transition-colors">
        <div class="font-mono-tech text-xs text-[#606060]">{section} • {date}{time}</div>
        <div class="font-mono-tech text-lg font-semibold mt-1">{title}</div>
        <div class="text-sm text-[#a0a0a0] mt-2">{subtitle}</div>
      </a>
"##,
                href = esc(&href),
                section = esc(&item.section.to_ascii_uppercase()),
                date = esc(&item.date),
                title = esc(title),
                subtitle = esc(&item.subtitle()),
            )
        })
        .collect();

    ListView {
        html,
        empty_visible: false,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_latest_entry_meta, render_recent_activity, EntryMeta, RecentActivityItem};
    use crate::routing::Tab;

    #[test]
    fn parses_em_dash_and_hyphen_headings() {
        let meta = parse_latest_entry_meta("# 2024-01-02\n\n## 09:30 — fail: Motor burnt out \n")
            .expect("meta");
        assert_eq!(
            meta,
            EntryMeta {
                time: "09:30".to_string(),
                kind: "fail".to_string(),
                title: "Motor burnt out".to_string(),
            }
        );
        let meta = parse_latest_entry_meta("## 23:05 - log_v2: first run").expect("meta");
        assert_eq!(meta.kind, "log_v2");
    }

    #[test]
    fn rejects_headings_without_time() {
        assert!(parse_latest_entry_meta("## Notes — log: x").is_none());
        assert!(parse_latest_entry_meta("### 09:30 — log: x").is_none());
    }

    #[test]
    fn rendered_items_link_to_modal_on_current_tab() {
        let items = vec![RecentActivityItem {
            section: "lab".to_string(),
            slug: "rover".to_string(),
            project_title: "Rover <v2>".to_string(),
            date: "2024-01-02".to_string(),
            meta: None,
            entry_path: "./content/LAB/rover/entries/2024-01-02.md".to_string(),
        }];
        let view = render_recent_activity(&items, Tab::Lab);
        assert!(view.html.contains(
            "#lab&amp;read=.%2Fcontent%2FLAB%2Frover%2Fentries%2F2024-01-02.md&amp;title=Rover%20%3Cv2%3E"
        ));
        assert!(view.html.contains("Rover &lt;v2&gt;"));
        assert!(view.html.contains("LAB • 2024-01-02<"));
        assert!(view.html.contains(">entry<"));
    }

    #[test]
    fn empty_feed_shows_placeholder() {
        let view = render_recent_activity(&[], Tab::Home);
        assert!(view.empty_visible);
    }
}
