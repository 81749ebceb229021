//! # Command Parsing
//!
//! Turns one line of user input into a [`Command`]. The first word picks the
//! command; everything after it (leading whitespace included) goes to that
//! command's parser.
//!
//! ```text
//! edit 1 p/98765432 e/amy@example.com
//! ^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
//! word          arguments
//! ```
//!
//! Parsing never looks at the address book: whether index 1 exists is the
//! command's problem, not the parser's.
//!
//! - [`syntax`]: field prefixes (`n/`, `p/`, `e/`, `a/`, `t/`)
//! - [`tokenizer`]: preamble/prefix splitting, shared by every parser
//! - [`util`]: per-field parse helpers
//! - [`add`], [`edit`], [`delete`], [`find`]: per-command parsers

pub mod add;
pub mod delete;
pub mod edit;
pub mod find;
pub mod syntax;
pub mod tokenizer;
pub mod util;

use crate::commands::{self, Command};
use crate::error::ParseError;
use tracing::debug;

pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    let Some(word) = trimmed.split_whitespace().next() else {
        return Err(ParseError::invalid_format(commands::help::USAGE));
    };
    let args = &trimmed[word.len()..];
    debug!(word, args, "dispatching command");

    match word {
        commands::add::COMMAND_WORD => add::parse(args).map(Command::Add),
        commands::edit::COMMAND_WORD => edit::parse(args).map(Command::Edit),
        commands::delete::COMMAND_WORD => delete::parse(args).map(Command::Delete),
        commands::find::COMMAND_WORD => find::parse(args).map(Command::Find),
        commands::list::COMMAND_WORD => Ok(Command::List),
        commands::clear::COMMAND_WORD => Ok(Command::Clear),
        commands::help::COMMAND_WORD => Ok(Command::Help),
        commands::exit::COMMAND_WORD => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand),
    }
}
