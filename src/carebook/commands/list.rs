use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::indexed_patients;

pub const COMMAND_WORD: &str = "list";

pub const USAGE: &str = "list: Lists all patients.";

pub fn run(book: &mut PatientBook) -> Result<CmdResult> {
    book.show_all();
    Ok(CmdResult::default()
        .with_message(CmdMessage::info("Listed all patients"))
        .with_listed_patients(indexed_patients(book)))
}
