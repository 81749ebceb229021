use super::{CmdMessage, CmdResult};
use crate::error::{CommandError, Result};
use crate::index::Index;
use crate::model::{Address, Email, Model, Name, ParcelSet, Person, Phone};
use crate::parser::syntax::{
    PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PARCEL, PREFIX_PHONE,
};
use tracing::info;

pub const COMMAND_WORD: &str = "edit";

pub const USAGE: &str = "edit: Edits the details of the person identified by the index number \
used in the displayed person list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/PARCEL]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

/// What to change on a person.
///
/// `None` means "leave as is". For parcels, `Some` of an empty set is an
/// explicit request to clear them, which is different from `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub parcels: Option<ParcelSet>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.parcels.is_some()
    }

    /// `person` with every present field replaced.
    pub fn apply_to(&self, person: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| person.email.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| person.address.clone()),
            parcels: self
                .parcels
                .clone()
                .unwrap_or_else(|| person.parcels.clone()),
        }
    }

    /// Formats the descriptor back into `edit` arguments, one ` prefix/value`
    /// per present field. A cleared parcel set becomes a bare ` t/`.
    pub fn to_args(&self) -> String {
        let mut args = String::new();
        if let Some(name) = &self.name {
            args.push_str(&format!(" {PREFIX_NAME}{name}"));
        }
        if let Some(phone) = &self.phone {
            args.push_str(&format!(" {PREFIX_PHONE}{phone}"));
        }
        if let Some(email) = &self.email {
            args.push_str(&format!(" {PREFIX_EMAIL}{email}"));
        }
        if let Some(address) = &self.address {
            args.push_str(&format!(" {PREFIX_ADDRESS}{address}"));
        }
        if let Some(parcels) = &self.parcels {
            if parcels.is_empty() {
                args.push_str(&format!(" {PREFIX_PARCEL}"));
            }
            for parcel in parcels {
                args.push_str(&format!(" {PREFIX_PARCEL}{}", parcel.name()));
            }
        }
        args
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    pub index: Index,
    pub descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }
}

pub fn run(model: &mut Model, command: &EditCommand) -> Result<CmdResult> {
    let target = model
        .displayed_at(command.index)
        .cloned()
        .ok_or(CommandError::InvalidPersonIndex)?;
    let edited = command.descriptor.apply_to(&target);

    model.book_mut().set_person(&target, edited.clone())?;
    model.show_all();
    info!(index = %command.index, name = %edited.name, "edited person");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Edited Person: {}",
        edited
    ))))
}
