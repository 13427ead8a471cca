//! Section bucketing and ordering of projects.

use super::model::{ProjectSummary, Section};
use std::cmp::Ordering;

/// Orders two projects by `updatedAt`, newest first.
///
/// Plain string comparison: equal-length ISO dates sort correctly, other
/// formats sort lexically.
pub fn sort_by_updated_desc(a: &ProjectSummary, b: &ProjectSummary) -> Ordering {
    b.updated_at.cmp(&a.updated_at)
}

/// Projects partitioned into the three fixed sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionBuckets {
    pub lab: Vec<ProjectSummary>,
    pub incubator: Vec<ProjectSummary>,
    pub toolbox: Vec<ProjectSummary>,
}

impl SectionBuckets {
    /// Groups projects by section and sorts each bucket.
    ///
    /// Projects with an unknown section are dropped. Ties keep index order.
    pub fn from_projects<'a>(projects: impl IntoIterator<Item = &'a ProjectSummary>) -> Self {
        let mut buckets = Self::default();
        for project in projects {
            if let Some(section) = project.section_kind() {
                buckets.bucket_mut(section).push(project.clone());
            }
        }
        for section in Section::ALL {
            buckets.bucket_mut(section).sort_by(sort_by_updated_desc);
        }
        buckets
    }

    pub fn bucket(&self, section: Section) -> &[ProjectSummary] {
        match section {
            Section::Lab => &self.lab,
            Section::Incubator => &self.incubator,
            Section::Toolbox => &self.toolbox,
        }
    }

    fn bucket_mut(&mut self, section: Section) -> &mut Vec<ProjectSummary> {
        match section {
            Section::Lab => &mut self.lab,
            Section::Incubator => &mut self.incubator,
            Section::Toolbox => &mut self.toolbox,
        }
    }
}
