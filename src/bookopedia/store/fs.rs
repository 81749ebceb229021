use super::DataStore;
use crate::error::{BookopediaError, Result};
use crate::model::{AddressBook, Person};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk shape of the book. Kept separate from [`AddressBook`] so loading
/// goes through the duplicate check in [`AddressBook::from_persons`].
#[derive(Deserialize)]
struct StoredBook {
    #[serde(default)]
    persons: Vec<Person>,
}

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BookopediaError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file, starting empty");
            return Ok(AddressBook::new());
        }

        let content = fs::read_to_string(&self.path).map_err(BookopediaError::Io)?;
        let stored: StoredBook =
            serde_json::from_str(&content).map_err(BookopediaError::Serialization)?;
        let book = AddressBook::from_persons(stored.persons).map_err(|_| {
            BookopediaError::Store(format!(
                "{} contains duplicate persons",
                self.path.display()
            ))
        })?;
        info!(path = %self.path.display(), persons = book.len(), "loaded address book");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(book).map_err(BookopediaError::Serialization)?;
        fs::write(&self.path, content).map_err(BookopediaError::Io)?;
        debug!(path = %self.path.display(), persons = book.len(), "saved address book");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Phone;
    use crate::test_utils::{alice, typical_book};

    #[test]
    fn test_missing_file_is_empty_book() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("addressbook.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("addressbook.json"));

        store.save(&typical_book()).unwrap();
        assert!(store.path().exists());

        let loaded = store.load().unwrap();
        assert_eq!(loaded, typical_book());
    }

    #[test]
    fn test_invalid_field_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("addressbook.json");
        fs::write(
            &path,
            r#"{"persons":[{"name":"Amy","phone":"12a","email":"a@bc","address":"x","parcels":[]}]}"#,
        )
        .unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, BookopediaError::Serialization(_)));
        assert!(err.to_string().contains(Phone::MESSAGE_CONSTRAINTS));
    }

    #[test]
    fn test_duplicates_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("addressbook.json");
        let persons = serde_json::to_string(&vec![alice(), alice()]).unwrap();
        fs::write(&path, format!(r#"{{"persons":{persons}}}"#)).unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, BookopediaError::Store(_)));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("addressbook.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, BookopediaError::Serialization(_)));
    }
}
