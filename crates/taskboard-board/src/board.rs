//! Board composition root.

use taskboard_input::{InputError, ProjectForm};
use taskboard_models::{ProjectId, ProjectStatus};
use taskboard_state::ProjectStore;
use tracing::info;

use crate::transition::{handle_drop, DropEvent};
use crate::view::{ProjectListView, Render};

/// The assembled board: one store, one active column, one finished column.
///
/// The board owns the store and passes it to each collaborator explicitly;
/// nothing reaches the store except through the board's two input surfaces,
/// [`submit`](Board::submit) (the form) and [`drop_card`](Board::drop_card)
/// (drag-and-drop).
pub struct Board {
    store: ProjectStore,
    active: ProjectListView,
    finished: ProjectListView,
}

impl Board {
    /// Creates an empty board with both column views attached.
    pub fn new() -> Self {
        let mut store = ProjectStore::new();
        let mut active = ProjectListView::new(ProjectStatus::Active);
        let mut finished = ProjectListView::new(ProjectStatus::Finished);

        active.configure(&mut store);
        finished.configure(&mut store);

        Self {
            store,
            active,
            finished,
        }
    }

    /// Validates a form and commits it as a new active project.
    ///
    /// On rejection the error is returned for the caller to surface and the
    /// store is left untouched.
    pub fn submit(&mut self, form: &ProjectForm) -> Result<ProjectId, InputError> {
        let draft = form.parse()?;

        let id = self
            .store
            .add_project(draft.title, draft.description, draft.people);
        info!(project_id = %id, "Project submitted");

        Ok(id)
    }

    /// Routes a drop event to the store.
    pub fn drop_card(&mut self, event: DropEvent) {
        handle_drop(&mut self.store, event);
    }

    /// Renders both columns, active first.
    pub fn render(&self) -> Vec<String> {
        let mut lines = self.active.render_content();
        lines.push(String::new());
        lines.extend(self.finished.render_content());
        lines
    }

    /// The active column view.
    pub fn active_view(&self) -> &ProjectListView {
        &self.active
    }

    /// The finished column view.
    pub fn finished_view(&self) -> &ProjectListView {
        &self.finished
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &ProjectStore {
        &self.store
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
