//! User-facing record indexes.
//!
//! Users address persons by their position in the *displayed* list, counting
//! from 1. Internally the list is a `Vec`, so [`Index`] keeps both views and
//! only ever holds a value that was validated on the way in.

use crate::error::ParseError;
use std::str::FromStr;

/// A one-based position in the displayed person list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    /// Returns `None` for 0, which has no one-based meaning.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Index::from_zero_based)
    }

    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

impl FromStr for Index {
    type Err = ParseError;

    /// Parses a non-zero unsigned integer, ignoring surrounding whitespace.
    ///
    /// Signs are rejected outright (`"+1"` and `"-1"` both fail) even though
    /// `usize::from_str` would accept the former.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidIndex);
        }
        trimmed
            .parse::<usize>()
            .ok()
            .and_then(Index::from_one_based)
            .ok_or(ParseError::InvalidIndex)
    }
}
