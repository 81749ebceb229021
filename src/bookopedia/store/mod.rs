//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the address book lives, so the API and
//! its tests can run against memory while the binary uses a file.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single pretty-printed JSON document
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── addressbook.json    # {"persons": [ {name, phone, email, address, parcels}, ... ]}
//! └── config.json         # AppConfig
//! ```
//!
//! Every field is revalidated on load, and a file holding the same person
//! twice is rejected rather than silently deduplicated.

use crate::error::Result;
use crate::model::AddressBook;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Loads the book, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<AddressBook>;

    /// Replaces whatever was saved before with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
