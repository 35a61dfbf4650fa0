//! CLI shell for Taskboard.
//!
//! The binary wires a [`Board`](taskboard_board::Board) behind a small
//! line-oriented shell: `add` submits the project form, `move` drops a card
//! onto a column, `board` prints both columns.

pub mod cli;
pub mod shell;

pub use cli::Cli;
pub use shell::Shell;
