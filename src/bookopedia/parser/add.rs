use super::syntax::{
    Prefix, PERSON_PREFIXES, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PARCEL,
    PREFIX_PHONE,
};
use super::tokenizer::{tokenize, ArgumentMultimap};
use super::util::{parse_address, parse_email, parse_name, parse_parcels, parse_phone};
use crate::commands::add::USAGE;
use crate::error::ParseError;
use crate::model::Person;

const REQUIRED: [Prefix; 4] = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];

/// Parses `n/NAME p/PHONE e/EMAIL a/ADDRESS [t/PARCEL]...` into a new person.
///
/// All four scalar fields are required and nothing may precede them. Repeats
/// of a scalar field resolve to the last value, like `edit`.
pub fn parse(args: &str) -> Result<Person, ParseError> {
    let map = tokenize(args, &PERSON_PREFIXES);

    if !map.preamble().is_empty() || !has_all(&map) {
        return Err(ParseError::invalid_format(USAGE));
    }

    let name = parse_name(required(&map, PREFIX_NAME)?)?;
    let phone = parse_phone(required(&map, PREFIX_PHONE)?)?;
    let email = parse_email(required(&map, PREFIX_EMAIL)?)?;
    let address = parse_address(required(&map, PREFIX_ADDRESS)?)?;
    let parcels = parse_parcels(map.all_values(PREFIX_PARCEL))?;

    Ok(Person::new(name, phone, email, address, parcels))
}

fn has_all(map: &ArgumentMultimap) -> bool {
    REQUIRED.iter().all(|&prefix| map.contains(prefix))
}

fn required(map: &ArgumentMultimap, prefix: Prefix) -> Result<&str, ParseError> {
    map.value(prefix)
        .ok_or_else(|| ParseError::invalid_format(USAGE))
}
