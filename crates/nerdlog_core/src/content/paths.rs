//! Site-relative content paths.

use super::model::ProjectSummary;

/// Location of the content index.
pub const CONTENT_INDEX_PATH: &str = "./content/index.json";

/// `./content/<SECTION>/<slug>/`
pub fn project_dir_path(section: &str, slug: &str) -> String {
    format!("./content/{}/{slug}/", section.trim().to_ascii_uppercase())
}

/// `./content/<SECTION>/<slug>/index.md`
pub fn project_index_path(section: &str, slug: &str) -> String {
    format!("{}index.md", project_dir_path(section, slug))
}

/// `./content/<SECTION>/<slug>/entries/<date>.md`
pub fn project_entry_path(section: &str, slug: &str, date: &str) -> String {
    format!("{}entries/{date}.md", project_dir_path(section, slug))
}

impl ProjectSummary {
    /// Index document path, honoring an explicit `pathIndex`.
    pub fn index_path(&self) -> String {
        match self.path_index.as_deref().filter(|p| !p.trim().is_empty()) {
            Some(path) => path.to_string(),
            None => project_index_path(&self.section, &self.slug),
        }
    }

    pub fn entry_path(&self, date: &str) -> String {
        project_entry_path(&self.section, &self.slug, date)
    }

    pub fn dir_path(&self) -> String {
        project_dir_path(&self.section, &self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::{project_entry_path, project_index_path};
    use crate::content::model::ProjectSummary;

    #[test]
    fn paths_uppercase_the_section() {
        assert_eq!(
            project_index_path("lab", "rover"),
            "./content/LAB/rover/index.md"
        );
        assert_eq!(
            project_entry_path("toolbox", "git", "2024-03-01"),
            "./content/TOOLBOX/git/entries/2024-03-01.md"
        );
    }

    #[test]
    fn explicit_path_index_wins_unless_blank() {
        let mut project = ProjectSummary {
            section: "LAB".to_string(),
            slug: "rover".to_string(),
            path_index: Some("./content/LAB/rover/README.md".to_string()),
            ..ProjectSummary::default()
        };
        assert_eq!(project.index_path(), "./content/LAB/rover/README.md");
        project.path_index = Some("  ".to_string());
        assert_eq!(project.index_path(), "./content/LAB/rover/index.md");
    }
}
