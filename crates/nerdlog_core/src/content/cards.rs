//! Project card and list markup.

use super::model::ProjectSummary;
use crate::util::esc;

/// Rendered list plus the state of its empty-state placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub html: String,
    /// Whether the list's empty-state element should be shown.
    pub empty_visible: bool,
}

impl ListView {
    pub fn empty() -> Self {
        Self {
            html: String::new(),
            empty_visible: true,
        }
    }

    /// Inline error shown in place of list items.
    pub fn error(message: &str) -> Self {
        Self {
            html: format!(
                r#"<div class="font-mono-tech text-sm text-red-300">{}</div>"#,
                esc(message)
            ),
            empty_visible: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Renders one clickable project card.
///
/// At most `tag_limit` tags are shown. Every interpolated value is escaped.
pub fn project_card_html(project: &ProjectSummary, tag_limit: usize) -> String {
    let section = project.section_upper();
    let title = project.display_title();
    let status = project.status.to_uppercase();
    let kicker = format!("{section} / {}", project.slug);

    let status_badge = if status.is_empty() {
        String::new()
    } else {
        format!(
            r#"<span class="status-badge border border-[#2a2a2e] text-[#a0a0a0]">{}</span>"#,
            esc(&status)
        )
    };
    let updated = if project.updated_at.is_empty() {
        String::new()
    } else {
        format!(
            r#"<span class="font-mono-tech text-xs text-[#606060]">updated: {}</span>"#,
            esc(&project.updated_at)
        )
    };
    let tags: String = project
        .tags
        .iter()
        .take(tag_limit)
        .map(|tag| {
            format!(
                r#"<span class="tool-badge font-mono-tech text-xs px-2 py-1 rounded">{}</span>"#,
                esc(tag)
            )
        })
        .collect();

    format!(
        r#"
    <div class="project-card bg-[#141416] border border-[#2a2a2e] rounded-lg p-5 cursor-pointer"
      data-project="{key}"
      data-title="{title_attr}">
      <div class="flex items-start justify-between gap-4">
        <div class="min-w-0">
          <div class="font-mono-tech text-xs text-[#606060]">{kicker}</div>
          <div class="font-mono-tech text-lg font-semibold mt-1 truncate">{title_text}</div>
          <div class="text-sm text-[#a0a0a0] mt-2">{summary}</div>
        </div>
        {status_badge}
      </div>
      <div class="mt-4 flex flex-wrap gap-2 items-center">
        {updated}
        {tags}
      </div>
    </div>
"#,
        key = esc(&project.key()),
        title_attr = esc(title),
        kicker = esc(&kicker),
        title_text = esc(title),
        summary = esc(&project.summary),
    )
}

/// Renders a section list; an empty slice yields an empty list with the
/// empty-state placeholder visible.
pub fn render_projects(projects: &[ProjectSummary], tag_limit: usize) -> ListView {
    if projects.is_empty() {
        return ListView::empty();
    }
    ListView {
        html: projects
            .iter()
            .map(|project| project_card_html(project, tag_limit))
            .collect(),
        empty_visible: false,
    }
}

#[cfg(test)]
mod tests {
    use super::{project_card_html, render_projects};
    use crate::content::model::ProjectSummary;

    fn rover() -> ProjectSummary {
        ProjectSummary {
            section: "lab".to_string(),
            slug: "rover".to_string(),
            title: "Rover".to_string(),
            summary: "Wheels & sensors".to_string(),
            tags: (1..=8).map(|n| format!("tag{n}")).collect(),
            status: "active".to_string(),
            updated_at: "2024-02-01".to_string(),
            ..ProjectSummary::default()
        }
    }

    #[test]
    fn card_carries_project_key_and_uppercase_status() {
        let html = project_card_html(&rover(), 6);
        assert!(html.contains(r#"data-project="LAB/rover""#));
        assert!(html.contains("LAB / rover"));
        assert!(html.contains(">ACTIVE</span>"));
        assert!(html.contains("updated: 2024-02-01"));
        assert!(html.contains("Wheels &amp; sensors"));
    }

    #[test]
    fn card_limits_tags() {
        let html = project_card_html(&rover(), 6);
        assert!(html.contains("tag6"));
        assert!(!html.contains("tag7"));
    }

    #[test]
    fn card_omits_empty_status_and_date() {
        let project = ProjectSummary {
            section: "LAB".to_string(),
            slug: "bare".to_string(),
            ..ProjectSummary::default()
        };
        let html = project_card_html(&project, 6);
        assert!(!html.contains("status-badge"));
        assert!(!html.contains("updated:"));
        assert!(html.contains(r#"data-title="bare""#));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let view = render_projects(&[], 6);
        assert!(view.is_empty());
        assert!(view.empty_visible);
    }
}
