//! # Domain Model
//!
//! - [`fields`]: validated scalar fields (`Name`, `Phone`, `Email`, `Address`)
//! - [`parcel`]: `Parcel` and the per-person `ParcelSet`
//! - [`person`]: `Person`, the record being edited
//! - [`address_book`]: `AddressBook`, the list of persons with no duplicates
//!
//! [`Model`] pairs the book with what is currently *displayed*. `find` narrows
//! the displayed list and every index the user types refers to that narrowed
//! list, not to the book itself.

pub mod address_book;
pub mod fields;
pub mod parcel;
pub mod person;

pub use address_book::AddressBook;
pub use fields::{Address, Email, Name, Phone};
pub use parcel::{Parcel, ParcelSet};
pub use person::Person;

use crate::index::Index;

/// Keywords matched against whole words of a person's name, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    keywords: Vec<String>,
}

impl NameFilter {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, person: &Person) -> bool {
        self.keywords.iter().any(|k| person.name.contains_word(k))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Model {
    book: AddressBook,
    filter: Option<NameFilter>,
}

impl Model {
    pub fn new(book: AddressBook) -> Self {
        Self { book, filter: None }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    /// Persons currently displayed, in book order.
    pub fn displayed(&self) -> Vec<&Person> {
        self.book
            .persons()
            .iter()
            .filter(|p| self.filter.as_ref().is_none_or(|f| f.matches(p)))
            .collect()
    }

    pub fn displayed_at(&self, index: Index) -> Option<&Person> {
        self.displayed().get(index.zero_based()).copied()
    }

    pub fn set_filter(&mut self, filter: NameFilter) {
        self.filter = Some(filter);
    }

    pub fn show_all(&mut self) {
        self.filter = None;
    }
}
