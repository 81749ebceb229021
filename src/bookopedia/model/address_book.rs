use super::person::Person;
use crate::error::{CommandError, Result};
use serde::Serialize;

/// The full list of persons, in insertion order.
///
/// No two entries may be the same person (see [`Person::is_same_person`]).
/// Every mutating method upholds that, which is why the list is private.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from a list that may contain duplicates, rejecting it if so.
    pub fn from_persons(persons: Vec<Person>) -> Result<Self> {
        let mut book = Self::new();
        for person in persons {
            book.add(person)?;
        }
        Ok(book)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add(&mut self, person: Person) -> Result<()> {
        if self.has_person(&person) {
            return Err(CommandError::DuplicatePerson.into());
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// `edited` may keep the target's identity; it must not collide with any
    /// other entry.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<()> {
        let pos = self
            .position(target)
            .ok_or(CommandError::InvalidPersonIndex)?;
        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != pos && p.is_same_person(&edited));
        if collides {
            return Err(CommandError::DuplicatePerson.into());
        }
        self.persons[pos] = edited;
        Ok(())
    }

    pub fn remove(&mut self, target: &Person) -> Result<Person> {
        let pos = self
            .position(target)
            .ok_or(CommandError::InvalidPersonIndex)?;
        Ok(self.persons.remove(pos))
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }

    fn position(&self, target: &Person) -> Option<usize> {
        self.persons.iter().position(|p| p == target)
    }
}
