//! Validated person fields.
//!
//! Each type wraps a string that has passed its validation rule. The only ways
//! in are [`FromStr`] / [`TryFrom<String>`], both of which reject invalid
//! input with a [`FieldError`] naming the type. Deserialization goes through
//! the same check, so a hand-edited data file cannot smuggle in bad values.
//!
//! Rules:
//! - [`Name`]: ASCII letters, digits and spaces; must start with a letter or digit
//! - [`Phone`]: at least 3 ASCII digits, nothing else
//! - [`Email`]: `local-part@domain`, see [`Email::MESSAGE_CONSTRAINTS`]
//! - [`Address`]: anything that does not start with whitespace

use crate::error::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn is_valid(value: &str) -> bool {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphanumeric() => {
                chars.all(|ch| ch.is_ascii_alphanumeric() || ch == ' ')
            }
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `word` matches one of the space-separated words of this name,
    /// ignoring ASCII case.
    pub fn contains_word(&self, word: &str) -> bool {
        let word = word.trim();
        !word.is_empty()
            && self
                .0
                .split_whitespace()
                .any(|part| part.eq_ignore_ascii_case(word))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn is_valid(value: &str) -> bool {
        value.len() >= 3 && value.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

const ALNUM: &str = "[A-Za-z0-9]+";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let local = format!("{ALNUM}([+_.-]{ALNUM})*");
    let label = format!("{ALNUM}(-{ALNUM})*");
    let pattern = format!("^{local}@({label}\\.)*({label}){{2,}}$");
    Regex::new(&pattern).expect("email pattern is a valid regex")
});

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
separated by periods.\n\
The domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    pub fn is_valid(value: &str) -> bool {
        EMAIL_PATTERN.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    pub fn is_valid(value: &str) -> bool {
        value.chars().next().is_some_and(|ch| !ch.is_whitespace())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// The four types share their plumbing; only the rule and the error differ.
macro_rules! string_field {
    ($ty:ident, $err:expr) => {
        impl FromStr for $ty {
            type Err = FieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if $ty::is_valid(s) {
                    Ok($ty(s.to_string()))
                } else {
                    Err($err)
                }
            }
        }

        impl TryFrom<String> for $ty {
            type Error = FieldError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                if $ty::is_valid(&value) {
                    Ok($ty(value))
                } else {
                    Err($err)
                }
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_field!(Name, FieldError::Name);
string_field!(Phone, FieldError::Phone);
string_field!(Email, FieldError::Email);
string_field!(Address, FieldError::Address);
