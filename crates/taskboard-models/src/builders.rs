//! Builder pattern for project records.

use chrono::Utc;

use crate::ids::ProjectId;
use crate::project::{Project, ProjectStatus};

/// Builder for creating Project instances with a fluent API.
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    title: String,
    description: String,
    people: u32,
    status: Option<ProjectStatus>,
}

impl ProjectBuilder {
    /// Creates a new ProjectBuilder with required fields.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            people: 1,
            status: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the number of assigned people.
    pub fn people(mut self, people: u32) -> Self {
        self.people = people;
        self
    }

    /// Sets the initial status (defaults to Active if not set).
    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Builds the Project.
    pub fn build(self) -> Project {
        Project {
            id: ProjectId::new(),
            title: self.title,
            description: self.description,
            people: self.people,
            status: self.status.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }
}

/// Convenience method on Project for creating a builder.
impl Project {
    /// Creates a builder for a new project.
    pub fn builder(title: impl Into<String>) -> ProjectBuilder {
        ProjectBuilder::new(title)
    }
}
