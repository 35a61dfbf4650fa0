//! Project filtering for snapshot queries.

use taskboard_models::{Project, ProjectStatus};

/// Filter criteria for narrowing a project snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectFilter {
    /// Filter by lifecycle status.
    pub status: Option<ProjectStatus>,
}

impl ProjectFilter {
    /// Creates a new empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status filter.
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns true if the project matches this filter.
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(status) = self.status {
            if project.status != status {
                return false;
            }
        }

        true
    }

    /// Returns the matching subset of a snapshot, preserving order.
    pub fn apply(&self, projects: Vec<Project>) -> Vec<Project> {
        projects.into_iter().filter(|p| self.matches(p)).collect()
    }
}
