use crate::model::fields::{Address, Email, Name, Phone};
use crate::model::parcel::Parcel;
use thiserror::Error;

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";

/// A value that failed its type's validation rule.
///
/// Each variant displays the constraint message owned by the value type, so
/// callers can compare against e.g. [`Phone::MESSAGE_CONSTRAINTS`] directly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("{}", Name::MESSAGE_CONSTRAINTS)]
    Name,

    #[error("{}", Phone::MESSAGE_CONSTRAINTS)]
    Phone,

    #[error("{}", Email::MESSAGE_CONSTRAINTS)]
    Email,

    #[error("{}", Address::MESSAGE_CONSTRAINTS)]
    Address,

    #[error("{}", Parcel::MESSAGE_CONSTRAINTS)]
    Parcel,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{}{}", MESSAGE_INVALID_COMMAND_FORMAT, .usage)]
    InvalidCommandFormat { usage: &'static str },

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    #[error("At least one field to edit must be provided.")]
    NotEdited,

    #[error("{}", MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand,

    #[error(transparent)]
    Field(#[from] FieldError),
}

impl ParseError {
    pub fn invalid_format(usage: &'static str) -> Self {
        ParseError::InvalidCommandFormat { usage }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("The person index provided is invalid")]
    InvalidPersonIndex,

    #[error("This person already exists in the address book")]
    DuplicatePerson,
}

#[derive(Error, Debug)]
pub enum BookopediaError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, BookopediaError>;
