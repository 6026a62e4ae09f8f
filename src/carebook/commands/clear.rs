use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub const COMMAND_WORD: &str = "clear";

pub const USAGE: &str = "clear: Removes every patient. Can be undone.";

pub fn run(book: &mut PatientBook) -> Result<CmdResult> {
    let removed = book.patients().to_vec();
    book.reset_data(Vec::new())?;
    book.show_all();

    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Patient book has been cleared!"))
        .with_affected_patients(removed))
}
