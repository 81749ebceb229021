//! Shared fixtures: typical persons and the command fragments used across
//! parser and command tests.

use crate::commands::edit::EditPersonDescriptor;
use crate::model::{AddressBook, Parcel, ParcelSet, Person};

pub const VALID_NAME_AMY: &str = "Amy Bee";
pub const VALID_NAME_BOB: &str = "Bob Choo";
pub const VALID_PHONE_AMY: &str = "11111111";
pub const VALID_PHONE_BOB: &str = "22222222";
pub const VALID_EMAIL_AMY: &str = "amy@example.com";
pub const VALID_EMAIL_BOB: &str = "bob@example.com";
pub const VALID_ADDRESS_AMY: &str = "Block 312, Amy Street 1";
pub const VALID_ADDRESS_BOB: &str = "Block 123, Bobby Street 3";
pub const VALID_PARCEL_SHOPEE: &str = "Shopee";
pub const VALID_PARCEL_LAZADA: &str = "Lazada";

pub const NAME_DESC_AMY: &str = " n/Amy Bee";
pub const NAME_DESC_BOB: &str = " n/Bob Choo";
pub const PHONE_DESC_AMY: &str = " p/11111111";
pub const PHONE_DESC_BOB: &str = " p/22222222";
pub const EMAIL_DESC_AMY: &str = " e/amy@example.com";
pub const EMAIL_DESC_BOB: &str = " e/bob@example.com";
pub const ADDRESS_DESC_AMY: &str = " a/Block 312, Amy Street 1";
pub const ADDRESS_DESC_BOB: &str = " a/Block 123, Bobby Street 3";
pub const PARCEL_DESC_SHOPEE: &str = " t/Shopee";
pub const PARCEL_DESC_LAZADA: &str = " t/Lazada";
pub const PARCEL_EMPTY: &str = " t/";

// '&' not allowed in names
pub const INVALID_NAME_DESC: &str = " n/James&";
// 'a' not allowed in phones
pub const INVALID_PHONE_DESC: &str = " p/911a";
// missing '@' symbol
pub const INVALID_EMAIL_DESC: &str = " e/bob!yahoo";
// empty string not allowed for addresses
pub const INVALID_ADDRESS_DESC: &str = " a/";
// '*' not allowed in parcels
pub const INVALID_PARCEL_DESC: &str = " t/hubby*";

pub fn parcels(names: &[&str]) -> ParcelSet {
    names
        .iter()
        .map(|n| n.parse::<Parcel>().expect("fixture parcel is valid"))
        .collect()
}

pub fn person(name: &str, phone: &str, email: &str, address: &str, parcel_names: &[&str]) -> Person {
    Person::new(
        name.parse().expect("fixture name is valid"),
        phone.parse().expect("fixture phone is valid"),
        email.parse().expect("fixture email is valid"),
        address.parse().expect("fixture address is valid"),
        parcels(parcel_names),
    )
}

pub fn alice() -> Person {
    person(
        "Alice Pauline",
        "94351253",
        "alice@example.com",
        "123, Jurong West Ave 6, #08-111",
        &["Shopee"],
    )
}

pub fn benson() -> Person {
    person(
        "Benson Meier",
        "98765432",
        "johnd@example.com",
        "311, Clementi Ave 2, #02-25",
        &["Lazada", "Shopee"],
    )
}

pub fn carl() -> Person {
    person("Carl Kurz", "95352563", "heinz@example.com", "wall street", &[])
}

pub fn daniel() -> Person {
    person(
        "Daniel Meier",
        "87652533",
        "cornelia@example.com",
        "10th street",
        &["Shopee"],
    )
}

pub fn elle() -> Person {
    person("Elle Meyer", "9482224", "werner@example.com", "michegan ave", &[])
}

pub fn amy() -> Person {
    person(
        VALID_NAME_AMY,
        VALID_PHONE_AMY,
        VALID_EMAIL_AMY,
        VALID_ADDRESS_AMY,
        &[VALID_PARCEL_SHOPEE],
    )
}

pub fn typical_persons() -> Vec<Person> {
    vec![alice(), benson(), carl(), daniel(), elle()]
}

pub fn typical_book() -> AddressBook {
    AddressBook::from_persons(typical_persons()).expect("typical persons are distinct")
}

/// Builds an [`EditPersonDescriptor`] from raw strings.
#[derive(Default)]
pub struct DescriptorBuilder {
    descriptor: EditPersonDescriptor,
}

impl DescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.descriptor.name = Some(name.parse().expect("valid name"));
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.descriptor.phone = Some(phone.parse().expect("valid phone"));
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.descriptor.email = Some(email.parse().expect("valid email"));
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.descriptor.address = Some(address.parse().expect("valid address"));
        self
    }

    pub fn parcels(mut self, names: &[&str]) -> Self {
        self.descriptor.parcels = Some(parcels(names));
        self
    }

    pub fn build(self) -> EditPersonDescriptor {
        self.descriptor
    }
}
