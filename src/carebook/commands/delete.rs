use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;

use super::helpers::resolve_index;

pub const COMMAND_WORD: &str = "delete";

pub const USAGE: &str = "delete: Deletes the patient identified by the index \
number used in the displayed patient list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

pub fn run(book: &mut PatientBook, index: DisplayIndex) -> Result<CmdResult> {
    let target = resolve_index(book, index)?;
    book.remove_patient(&target)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Deleted Patient: {}", target)))
        .with_affected_patients(vec![target]))
}
