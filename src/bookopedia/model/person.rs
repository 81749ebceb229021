use super::fields::{Address, Email, Name, Phone};
use super::parcel::ParcelSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact and the parcels they are waiting on.
///
/// Full equality compares every field. Identity, which decides whether two
/// entries would be duplicates in the book, is by name only; see
/// [`Person::is_same_person`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub parcels: ParcelSet,
}

impl Person {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, parcels: ParcelSet) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            parcels,
        }
    }

    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {} Parcels: ",
            self.name, self.phone, self.email, self.address
        )?;
        for parcel in &self.parcels {
            write!(f, "{}", parcel)?;
        }
        Ok(())
    }
}
