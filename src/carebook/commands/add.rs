use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Patient;
use std::sync::Arc;

pub const COMMAND_WORD: &str = "add";

pub const USAGE: &str = "add: Adds a patient to the app. \
Parameters: n/NAME p/PHONE a/ADDRESS [t/TAG]...\n\
Example: add n/John Doe p/98765432 a/311, Clementi Ave 2, #02-25 t/anxiety t/followup";

pub fn run(book: &mut PatientBook, patient: Patient) -> Result<CmdResult> {
    book.add_patient(patient.clone())?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "New patient added: {}",
            patient
        )))
        .with_affected_patients(vec![Arc::new(patient)]))
}
