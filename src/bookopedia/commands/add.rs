use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Model, Person};
use crate::parser::syntax::{
    PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PARCEL, PREFIX_PHONE,
};
use tracing::info;

pub const COMMAND_WORD: &str = "add";

pub const USAGE: &str = "add: Adds a person to the address book. \
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [t/PARCEL]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com \
a/311, Clementi Ave 2, #02-25 t/Shopee t/Lazada";

pub fn run(model: &mut Model, person: &Person) -> Result<CmdResult> {
    model.book_mut().add(person.clone())?;
    info!(name = %person.name, "added person");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "New person added: {}",
        person
    ))))
}

/// The `add` arguments that recreate `person`.
pub fn to_args(person: &Person) -> String {
    let mut args = format!(
        " {PREFIX_NAME}{} {PREFIX_PHONE}{} {PREFIX_EMAIL}{} {PREFIX_ADDRESS}{}",
        person.name, person.phone, person.email, person.address
    );
    for parcel in &person.parcels {
        args.push_str(&format!(" {PREFIX_PARCEL}{}", parcel.name()));
    }
    args
}
