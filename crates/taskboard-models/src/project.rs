//! Project record and lifecycle status.
//!
//! A project is one user-created task on the board. Its status is the only
//! mutable field after creation, and only the store is supposed to change it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::ProjectId;

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Project is on the active column.
    #[default]
    Active,
    /// Project has been moved to the finished column.
    Finished,
}

impl ProjectStatus {
    /// Human-readable column label ("active" / "finished").
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }
}

/// A user-created project on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier, generated at creation, immutable.
    pub id: ProjectId,

    /// Short title shown on the card.
    pub title: String,

    /// Free-form description.
    pub description: String,

    /// Number of people assigned, within [1, 5].
    pub people: u32,

    /// Current lifecycle status.
    pub status: ProjectStatus,

    /// When the project was created.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new active project with a fresh id.
    ///
    /// Field constraints (non-empty title, description length, people bounds)
    /// are the caller's responsibility; the record itself does not validate.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: ProjectId::new(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Creates a new project with an explicit initial status.
    pub fn with_status(
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
        status: ProjectStatus,
    ) -> Self {
        Self {
            status,
            ..Self::new(title, description, people)
        }
    }

    /// Returns true if the project is on the active column.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }

    /// Returns true if the project is on the finished column.
    pub fn is_finished(&self) -> bool {
        self.status == ProjectStatus::Finished
    }
}
