use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::model::{Address, Name, Patient, Phone, Tags};
use std::sync::Arc;

use super::helpers::resolve_index;

pub const COMMAND_WORD: &str = "edit";

pub const USAGE: &str = "edit: Edits the details of the patient identified \
by the index number used in the displayed patient list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [a/ADDRESS] [t/TAG]...\n\
Example: edit 1 p/91234567 a/Blk 30 Geylang Street 29";

pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// The fields an `edit` replaces. `None` keeps the current value; `Some` tags
/// replace the whole tag set. Notes are never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPatientDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub address: Option<Address>,
    pub tags: Option<Tags>,
}

impl EditPatientDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.phone.is_some() || self.address.is_some() || self.tags.is_some()
    }

    pub fn apply(&self, patient: &Patient) -> Patient {
        patient.with_details(
            self.name.clone().unwrap_or_else(|| patient.name().clone()),
            self.phone.clone().unwrap_or_else(|| patient.phone().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| patient.address().clone()),
            self.tags.clone().unwrap_or_else(|| patient.tags().clone()),
        )
    }
}

pub fn run(
    book: &mut PatientBook,
    index: DisplayIndex,
    descriptor: &EditPatientDescriptor,
) -> Result<CmdResult> {
    let target = resolve_index(book, index)?;
    let edited = descriptor.apply(&target);

    book.set_patient(&target, edited.clone())?;
    book.show_all();

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Edited Patient: {}", edited)))
        .with_affected_patients(vec![Arc::new(edited)]))
}
