//! Column views, drop handling, and board composition for Taskboard.
//!
//! This crate assembles the observable core into a usable board:
//! - `ProjectListView` - one status-filtered column, re-rendered from each
//!   full snapshot.
//! - `DropEvent` / `handle_drop` - translates a drop into a store move.
//! - `Board` - composition root owning the store and both columns.
//!
//! # Example
//!
//! ```
//! use taskboard_board::{Board, DropEvent};
//! use taskboard_input::ProjectForm;
//! use taskboard_models::ProjectStatus;
//!
//! let mut board = Board::new();
//! let id = board
//!     .submit(&ProjectForm::new("Ship it", "Cut the release", "2"))
//!     .unwrap();
//! board.drop_card(DropEvent::new(id, ProjectStatus::Finished));
//!
//! for line in board.render() {
//!     println!("{}", line);
//! }
//! ```

pub mod board;
pub mod transition;
pub mod view;

pub use board::Board;
pub use transition::{handle_drop, DropEvent};
pub use view::{ProjectListView, Render};
