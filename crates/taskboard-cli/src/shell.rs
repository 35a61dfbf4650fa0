//! Interactive shell for the board.
//!
//! Stands in for the browser surface: the `add` command is the project form
//! submit, the `move` command is a drop onto a column.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use taskboard_board::{Board, DropEvent};
use taskboard_input::ProjectForm;
use taskboard_models::ProjectStatus;

/// Result type for shell operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const HELP: &str = "Commands:
  add <title> | <description> | <people>   create a project on the active column
  move <project-id> <active|finished>      drop a project onto a column
  board                                    show both columns
  help                                     show this help
  quit                                     leave the shell";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Add(ProjectForm),
    Move { id: String, target: ProjectStatus },
    Board,
    Help,
    Quit,
}

/// Interactive shell wrapping one board.
pub struct Shell {
    board: Board,
}

impl Shell {
    /// Creates a shell with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Runs the read-eval loop until quit or end of input.
    pub fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new()?;
        println!("Taskboard shell. Type 'help' for commands.");

        loop {
            match editor.readline("taskboard> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = editor.add_history_entry(line);

                    match parse_command(line) {
                        Ok(Command::Quit) => break,
                        Ok(command) => self.execute(command),
                        Err(message) => println!("{}", message),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }

    fn execute(&mut self, command: Command) {
        debug!(?command, "Executing shell command");

        match command {
            Command::Add(form) => match self.board.submit(&form) {
                Ok(id) => {
                    println!("Added {}", id);
                    self.print_board();
                }
                Err(e) => println!("Invalid input, please try again ({})", e),
            },
            Command::Move { id, target } => {
                self.board.drop_card(DropEvent::new(id.as_str(), target));
                self.print_board();
            }
            Command::Board => self.print_board(),
            Command::Help => println!("{}", HELP),
            Command::Quit => {}
        }
    }

    fn print_board(&self) {
        for line in self.board.render() {
            println!("{}", line);
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses one input line into a command, or a usage message.
fn parse_command(line: &str) -> std::result::Result<Command, String> {
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "add" => parse_add(rest),
        "move" | "mv" => parse_move(rest),
        "board" | "list" | "ls" => Ok(Command::Board),
        "help" | "h" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("Unknown command '{}'. Type 'help'.", other)),
    }
}

fn parse_add(rest: &str) -> std::result::Result<Command, String> {
    let fields: Vec<&str> = rest.split('|').collect();
    if fields.len() != 3 {
        return Err("usage: add <title> | <description> | <people>".to_string());
    }

    Ok(Command::Add(ProjectForm::new(
        fields[0], fields[1], fields[2],
    )))
}

fn parse_move(rest: &str) -> std::result::Result<Command, String> {
    let mut parts = rest.split_whitespace();
    let (Some(id), Some(column), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("usage: move <project-id> <active|finished>".to_string());
    };

    let target = parse_status(column)?;
    Ok(Command::Move {
        id: id.to_string(),
        target,
    })
}

fn parse_status(s: &str) -> std::result::Result<ProjectStatus, String> {
    match s {
        "active" => Ok(ProjectStatus::Active),
        "finished" => Ok(ProjectStatus::Finished),
        other => Err(format!("Unknown column '{}', expected active|finished.", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let command = parse_command("add Learn Rust | Work through the book | 3").unwrap();

        let Command::Add(form) = command else {
            panic!("expected add");
        };
        assert_eq!(form.title.trim(), "Learn Rust");
        assert_eq!(form.description.trim(), "Work through the book");
        assert_eq!(form.people.trim(), "3");
    }

    #[test]
    fn test_parse_add_wrong_arity() {
        assert!(parse_command("add just a title").is_err());
        assert!(parse_command("add a | b | c | d").is_err());
    }

    #[test]
    fn test_parse_move() {
        let command = parse_command("move proj-123 finished").unwrap();

        assert_eq!(
            command,
            Command::Move {
                id: "proj-123".to_string(),
                target: ProjectStatus::Finished,
            }
        );
    }

    #[test]
    fn test_parse_move_bad_column() {
        assert!(parse_command("move proj-123 done").is_err());
        assert!(parse_command("move proj-123").is_err());
    }

    #[test]
    fn test_parse_simple_verbs() {
        assert_eq!(parse_command("board").unwrap(), Command::Board);
        assert_eq!(parse_command("ls").unwrap(), Command::Board);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_unknown_verb() {
        assert!(parse_command("frobnicate").is_err());
    }
}
