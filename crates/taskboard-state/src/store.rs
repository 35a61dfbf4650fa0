//! ProjectStore - the authoritative, observable project list.

use taskboard_models::{Project, ProjectId, ProjectStatus};
use tracing::{debug, warn};

use crate::observer::ListenerSet;

/// Observable store owning the canonical project sequence.
///
/// The store is the single source of truth for the board. It is mutated only
/// through [`add_project`](ProjectStore::add_project) (and its
/// `with_status` variant) and [`move_project`](ProjectStore::move_project);
/// after every mutation all subscribers receive a fresh copy of the full
/// sequence, synchronously, in registration order.
///
/// There is exactly one logical store per running application. Construct it
/// explicitly and hand it to whichever component needs it; there is no
/// global instance.
///
/// # Single-threaded contract
///
/// All mutation goes through `&mut self` on one thread of control, so the
/// store carries no lock. A subscriber must not re-enter a mutating store
/// operation while a notification is in flight; a listener that re-borrows
/// the store through `Rc<RefCell<ProjectStore>>` will panic at runtime.
///
/// # Example
///
/// ```
/// use taskboard_state::ProjectStore;
/// use taskboard_models::ProjectStatus;
///
/// let mut store = ProjectStore::new();
/// store.subscribe(|projects| {
///     println!("board now has {} projects", projects.len());
/// });
///
/// let id = store.add_project("Learn Rust", "Work through the book", 2);
/// store.move_project(&id, ProjectStatus::Finished);
/// ```
pub struct ProjectStore {
    /// Insertion-ordered project sequence.
    projects: Vec<Project>,
    /// Subscribers notified after every mutation.
    listeners: ListenerSet<Vec<Project>>,
}

impl ProjectStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            listeners: ListenerSet::new(),
        }
    }

    /// Registers a subscriber for all future mutations.
    ///
    /// The subscriber is not invoked for state that already exists; only
    /// subsequent `add_project`/`move_project` calls fire it. Registering
    /// the same logical callback twice yields duplicate notifications.
    pub fn subscribe(&mut self, listener: impl FnMut(Vec<Project>) + 'static) {
        self.listeners.subscribe(listener);
    }

    /// Appends a new active project and notifies all subscribers.
    ///
    /// Inputs are expected to be pre-validated; the store never rejects
    /// them. Returns the freshly generated id of the new record.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        self.add_project_with_status(title, description, people, ProjectStatus::Active)
    }

    /// Appends a new project with an explicit initial status and notifies
    /// all subscribers.
    pub fn add_project_with_status(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
        status: ProjectStatus,
    ) -> ProjectId {
        let project = Project::with_status(title, description, people, status);
        let id = project.id.clone();

        debug!(
            project_id = %id,
            title = %project.title,
            status = %project.status.as_str(),
            "Adding project"
        );

        self.projects.push(project);
        self.broadcast();

        id
    }

    /// Moves a project to `target` status.
    ///
    /// The status is changed only when the project exists and the target
    /// differs from its current status. Subscribers are notified
    /// unconditionally after the lookup - even on a miss or a same-status
    /// no-op - because they are idempotent consumers of full snapshots.
    pub fn move_project(&mut self, id: &ProjectId, target: ProjectStatus) {
        match self.projects.iter_mut().find(|p| p.id == *id) {
            Some(project) if project.status != target => {
                debug!(
                    project_id = %id,
                    from = %project.status.as_str(),
                    to = %target.as_str(),
                    "Moving project"
                );
                project.status = target;
            }
            Some(_) => {
                debug!(project_id = %id, status = %target.as_str(), "Move is a no-op");
            }
            None => {
                warn!(project_id = %id, "Move target not found");
            }
        }

        self.broadcast();
    }

    /// Returns a project by id, if present.
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == *id)
    }

    /// Returns an independently-owned copy of the current project sequence.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Returns the number of projects in the store.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns true if the store holds no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Hands every subscriber its own fresh copy of the full sequence.
    fn broadcast(&mut self) {
        let snapshot = self.projects.clone();
        self.listeners.notify(&snapshot);
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}
