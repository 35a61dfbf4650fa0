//! Observable project store with synchronous pub/sub for Taskboard.
//!
//! This crate provides the `ProjectStore`, the single source of truth for
//! the board:
//! - Subscribers registered with [`ProjectStore::subscribe`] receive a fresh
//!   copy of the full project sequence after every mutation, synchronously,
//!   in registration order.
//! - Mutation happens only through `add_project` and `move_project`; both
//!   notify unconditionally.
//! - `ListenerSet` is the reusable observable building block; `ProjectFilter`
//!   narrows snapshots down to one board column.
//!
//! # Example
//!
//! ```
//! use taskboard_state::{ProjectFilter, ProjectStore};
//! use taskboard_models::ProjectStatus;
//!
//! let mut store = ProjectStore::new();
//!
//! let finished = ProjectFilter::new().with_status(ProjectStatus::Finished);
//! store.subscribe(move |projects| {
//!     let done = finished.apply(projects);
//!     println!("{} finished projects", done.len());
//! });
//!
//! let id = store.add_project("Ship it", "Cut the release", 2);
//! store.move_project(&id, ProjectStatus::Finished);
//! ```

pub mod filter;
pub mod observer;
pub mod store;

pub use filter::ProjectFilter;
pub use observer::ListenerSet;
pub use store::ProjectStore;
