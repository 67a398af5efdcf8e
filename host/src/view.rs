//! Line-oriented terminal view: command parsing and list rendering.

use std::fmt::Write;

use todo_core::{FailureKind, TodoState};

pub const HELP: &str = "commands: list | add <title> | edit <n> | draft <text> | save | cancel | delete <n> | quit";

/// One line of user input. Item numbers are 1-based, as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(String),
    Edit(usize),
    Draft(String),
    Save,
    Cancel,
    Delete(usize),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };
        match word {
            "" | "list" | "ls" => Ok(Command::List),
            "add" => Ok(Command::Add(rest.to_string())),
            "edit" => parse_index(rest).map(Command::Edit),
            "draft" => Ok(Command::Draft(rest.to_string())),
            "save" => Ok(Command::Save),
            "cancel" => Ok(Command::Cancel),
            "delete" | "rm" => parse_index(rest).map(Command::Delete),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command `{other}`")),
        }
    }
}

fn parse_index(arg: &str) -> Result<usize, String> {
    match arg.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected an item number, got `{}`", arg.trim())),
    }
}

/// Render the list, the open edit and the last failure.
pub fn render(state: &TodoState) -> String {
    let mut out = String::from("Todo List\n");
    if state.todos().is_empty() {
        out.push_str("  (empty)\n");
    }
    for (i, todo) in state.todos().iter().enumerate() {
        match state.editing() {
            Some(session) if session.target == todo.id => {
                let _ = writeln!(out, "> {}. {} (editing: \"{}\")", i + 1, todo.title, session.draft);
            }
            _ => {
                let _ = writeln!(out, "  {}. {}", i + 1, todo.title);
            }
        }
    }
    if !state.new_title().is_empty() {
        let _ = writeln!(out, "new: \"{}\"", state.new_title());
    }
    if let Some(failure) = state.last_failure() {
        let cause = match failure.kind() {
            FailureKind::TransportFailure => "no response",
            FailureKind::ServerRejection => "rejected by server",
        };
        let _ = writeln!(out, "! {failure} ({cause})");
    }
    out
}
