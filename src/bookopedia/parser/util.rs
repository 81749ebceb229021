//! Per-field parse helpers shared by the command parsers.
//!
//! Values are trimmed before validation; failures carry the field's
//! constraint message via [`ParseError::Field`].

use crate::error::ParseError;
use crate::index::Index;
use crate::model::{Address, Email, Name, Parcel, ParcelSet, Phone};

pub fn parse_index(s: &str) -> Result<Index, ParseError> {
    s.parse()
}

pub fn parse_name(s: &str) -> Result<Name, ParseError> {
    Ok(s.trim().parse()?)
}

pub fn parse_phone(s: &str) -> Result<Phone, ParseError> {
    Ok(s.trim().parse()?)
}

pub fn parse_email(s: &str) -> Result<Email, ParseError> {
    Ok(s.trim().parse()?)
}

pub fn parse_address(s: &str) -> Result<Address, ParseError> {
    Ok(s.trim().parse()?)
}

pub fn parse_parcel(s: &str) -> Result<Parcel, ParseError> {
    Ok(s.trim().parse()?)
}

/// Parses every value, failing on the first invalid one. Repeats collapse.
pub fn parse_parcels<S: AsRef<str>>(values: &[S]) -> Result<ParcelSet, ParseError> {
    values.iter().map(|v| parse_parcel(v.as_ref())).collect()
}
