//! Drop handling: translating a drop event into a status change.

use taskboard_models::{ProjectId, ProjectStatus};
use taskboard_state::ProjectStore;
use tracing::debug;

/// A card dropped onto a column.
///
/// Carries what the drag payload carries: the dragged project's id and the
/// column it landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    /// Id extracted from the drag payload.
    pub project_id: ProjectId,
    /// Column the card was dropped onto.
    pub target: ProjectStatus,
}

impl DropEvent {
    /// Creates a drop event.
    pub fn new(project_id: impl Into<ProjectId>, target: ProjectStatus) -> Self {
        Self {
            project_id: project_id.into(),
            target,
        }
    }
}

/// Applies a drop event to the store.
///
/// The target column deterministically becomes the project's new status,
/// whatever its prior status was; dropping a card onto the column it is
/// already in is a legal no-op. Stateless - all behavior, including the
/// tolerated lookup miss, lives in [`ProjectStore::move_project`].
pub fn handle_drop(store: &mut ProjectStore, event: DropEvent) {
    debug!(
        project_id = %event.project_id,
        target = %event.target.as_str(),
        "Handling drop"
    );
    store.move_project(&event.project_id, event.target);
}
