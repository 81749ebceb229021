use super::DataStore;
use crate::error::Result;
use crate::model::AddressBook;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    book: AddressBook,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self { book, saves: 0 }
    }

    /// How many times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.book.clone())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.book = book.clone();
        self.saves += 1;
        Ok(())
    }
}
