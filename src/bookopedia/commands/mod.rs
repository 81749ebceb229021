//! # Command Layer
//!
//! Each command lives in its own submodule as a pure function over a
//! [`Model`]. Commands never print, prompt, or touch storage: they return a
//! [`CmdResult`] and let the caller (the API facade, then the UI) decide what
//! to do with it.
//!
//! ## Command Modules
//!
//! - [`add`]: Add a person
//! - [`edit`]: Change fields of a displayed person
//! - [`delete`]: Remove a displayed person
//! - [`find`]: Narrow the displayed list by name keywords
//! - [`list`]: Show everyone again
//! - [`clear`]: Empty the address book
//! - [`help`]: Command summary
//! - [`exit`]: Ask the client to stop

use crate::error::Result;
use crate::index::Index;
use crate::model::{Model, NameFilter, Person};
use serde::Serialize;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod exit;
pub mod find;
pub mod help;
pub mod list;

use edit::EditCommand;

/// A fully parsed, ready-to-run command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Person),
    Edit(EditCommand),
    Delete(Index),
    Find(NameFilter),
    List,
    Clear,
    Help,
    Exit,
}

impl Command {
    /// Whether running this command can change the address book.
    pub fn mutates_book(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Edit(_) | Command::Delete(_) | Command::Clear
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A person paired with the index it is displayed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPerson {
    pub index: Index,
    pub person: Person,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub listed_persons: Vec<DisplayPerson>,
    pub show_help: bool,
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_persons(mut self, persons: Vec<DisplayPerson>) -> Self {
        self.listed_persons = persons;
        self
    }

    /// Message text only, joined by newlines.
    pub fn feedback(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Snapshot of the displayed list with one-based indexes.
pub fn displayed_persons(model: &Model) -> Vec<DisplayPerson> {
    model
        .displayed()
        .into_iter()
        .enumerate()
        .map(|(i, person)| DisplayPerson {
            index: Index::from_zero_based(i),
            person: person.clone(),
        })
        .collect()
}

pub fn run(model: &mut Model, command: &Command) -> Result<CmdResult> {
    match command {
        Command::Add(person) => add::run(model, person),
        Command::Edit(edit) => edit::run(model, edit),
        Command::Delete(index) => delete::run(model, *index),
        Command::Find(filter) => find::run(model, filter),
        Command::List => list::run(model),
        Command::Clear => clear::run(model),
        Command::Help => help::run(),
        Command::Exit => exit::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::typical_book;

    #[test]
    fn test_mutating_commands() {
        assert!(Command::Clear.mutates_book());
        assert!(Command::Delete(Index::from_zero_based(0)).mutates_book());
        assert!(!Command::List.mutates_book());
        assert!(!Command::Find(NameFilter::new(vec!["a".into()])).mutates_book());
        assert!(!Command::Exit.mutates_book());
    }

    #[test]
    fn test_displayed_persons_are_one_based() {
        let model = Model::new(typical_book());
        let shown = displayed_persons(&model);
        assert_eq!(shown[0].index.one_based(), 1);
        assert_eq!(shown.len(), model.book().len());
    }

    #[test]
    fn test_feedback_joins_messages() {
        let result = CmdResult::default()
            .with_message(CmdMessage::success("one"))
            .with_message(CmdMessage::info("two"));
        assert_eq!(result.feedback(), "one\ntwo");
    }
}
