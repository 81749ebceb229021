//! Parser for `edit INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/PARCEL]...`.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the preamble must be a positive index, otherwise the usage error
//! 2. name, phone, email, address: the last value given wins and is validated
//! 3. parcels: every value is used (see [`parse_parcels_for_edit`])
//! 4. at least one field must be present, otherwise [`ParseError::NotEdited`]
//!
//! A field error therefore always beats "not edited", and an earlier field's
//! error beats a later one's.

use super::syntax::{
    PERSON_PREFIXES, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PARCEL, PREFIX_PHONE,
};
use super::tokenizer::tokenize;
use super::util::{parse_address, parse_email, parse_index, parse_name, parse_parcels, parse_phone};
use crate::commands::edit::{EditCommand, EditPersonDescriptor, USAGE};
use crate::error::ParseError;
use crate::model::ParcelSet;

pub fn parse(args: &str) -> Result<EditCommand, ParseError> {
    let map = tokenize(args, &PERSON_PREFIXES);

    let index = parse_index(map.preamble()).map_err(|_| ParseError::invalid_format(USAGE))?;

    let mut descriptor = EditPersonDescriptor::default();
    if let Some(name) = map.value(PREFIX_NAME) {
        descriptor.name = Some(parse_name(name)?);
    }
    if let Some(phone) = map.value(PREFIX_PHONE) {
        descriptor.phone = Some(parse_phone(phone)?);
    }
    if let Some(email) = map.value(PREFIX_EMAIL) {
        descriptor.email = Some(parse_email(email)?);
    }
    if let Some(address) = map.value(PREFIX_ADDRESS) {
        descriptor.address = Some(parse_address(address)?);
    }
    descriptor.parcels = parse_parcels_for_edit(map.all_values(PREFIX_PARCEL))?;

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }

    Ok(EditCommand::new(index, descriptor))
}

/// Reduces every `t/` value given to an edit.
///
/// - none given: `None`, parcels are left alone
/// - a single empty `t/`: `Some` of an empty set, parcels are cleared
/// - anything else: each value must be a valid parcel, so an empty `t/`
///   mixed in with real ones fails like any other invalid parcel
pub fn parse_parcels_for_edit(values: &[String]) -> Result<Option<ParcelSet>, ParseError> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(ParcelSet::new())),
        _ => parse_parcels(values).map(Some),
    }
}
