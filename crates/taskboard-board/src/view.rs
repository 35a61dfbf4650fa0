//! Status-filtered column views over the project store.

use std::cell::RefCell;
use std::rc::Rc;

use taskboard_models::{Project, ProjectStatus};
use taskboard_state::{ProjectFilter, ProjectStore};

/// Capability interface for board components.
///
/// A component wires itself to the store once, then produces its visible
/// content on demand. Concrete views implement this independently; there is
/// no shared base component.
pub trait Render {
    /// Subscribes the component to the store it should observe.
    fn configure(&mut self, store: &mut ProjectStore);

    /// Produces the component's current visible lines.
    fn render_content(&self) -> Vec<String>;
}

/// One board column: the subset of projects with a given status.
///
/// The view keeps no derived state beyond the last filtered snapshot; every
/// notification recomputes the column from the full snapshot, so the view
/// never diffs and can never drift from the store.
pub struct ProjectListView {
    column: ProjectStatus,
    assigned: Rc<RefCell<Vec<Project>>>,
}

impl ProjectListView {
    /// Creates a view for the given column. Call
    /// [`configure`](Render::configure) to start receiving snapshots.
    pub fn new(column: ProjectStatus) -> Self {
        Self {
            column,
            assigned: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// The status this column shows.
    pub fn column(&self) -> ProjectStatus {
        self.column
    }

    /// The projects currently assigned to this column.
    pub fn projects(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }

    fn header(&self) -> String {
        format!("{} PROJECTS", self.column.as_str().to_uppercase())
    }
}

impl Render for ProjectListView {
    fn configure(&mut self, store: &mut ProjectStore) {
        let cell = Rc::clone(&self.assigned);
        let filter = ProjectFilter::new().with_status(self.column);

        store.subscribe(move |snapshot| {
            *cell.borrow_mut() = filter.apply(snapshot);
        });
    }

    fn render_content(&self) -> Vec<String> {
        let mut lines = vec![self.header()];
        for project in self.assigned.borrow().iter() {
            lines.push(project.title.clone());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured_view(store: &mut ProjectStore, column: ProjectStatus) -> ProjectListView {
        let mut view = ProjectListView::new(column);
        view.configure(store);
        view
    }

    #[test]
    fn test_view_starts_empty() {
        let mut store = ProjectStore::new();
        let view = configured_view(&mut store, ProjectStatus::Active);

        assert!(view.projects().is_empty());
        assert_eq!(view.render_content(), vec!["ACTIVE PROJECTS"]);
    }

    #[test]
    fn test_view_ignores_preexisting_state_until_next_mutation() {
        let mut store = ProjectStore::new();
        store.add_project("Early", "Added before the view", 1);

        let view = configured_view(&mut store, ProjectStatus::Active);
        assert!(view.projects().is_empty());

        store.add_project("Late", "Added after the view", 1);
        let titles: Vec<_> = view.projects().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Early", "Late"]);
    }

    #[test]
    fn test_view_filters_to_its_column() {
        let mut store = ProjectStore::new();
        let active = configured_view(&mut store, ProjectStatus::Active);
        let finished = configured_view(&mut store, ProjectStatus::Finished);

        store.add_project("A", "Stays active", 1);
        store.add_project_with_status("F", "Starts finished", 1, ProjectStatus::Finished);

        assert_eq!(active.projects().len(), 1);
        assert_eq!(active.projects()[0].title, "A");
        assert_eq!(finished.projects().len(), 1);
        assert_eq!(finished.projects()[0].title, "F");
    }

    #[test]
    fn test_move_shifts_project_between_views() {
        let mut store = ProjectStore::new();
        let active = configured_view(&mut store, ProjectStatus::Active);
        let finished = configured_view(&mut store, ProjectStatus::Finished);

        let id = store.add_project("Card", "Moves across", 2);
        store.move_project(&id, ProjectStatus::Finished);

        assert!(active.projects().is_empty());
        assert_eq!(finished.projects()[0].title, "Card");
    }

    #[test]
    fn test_render_content_lists_titles_under_header() {
        let mut store = ProjectStore::new();
        let view = configured_view(&mut store, ProjectStatus::Finished);

        store.add_project_with_status("One", "First done", 1, ProjectStatus::Finished);
        store.add_project_with_status("Two", "Second done", 1, ProjectStatus::Finished);

        assert_eq!(
            view.render_content(),
            vec!["FINISHED PROJECTS", "One", "Two"]
        );
    }
}
