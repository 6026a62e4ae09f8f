use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CarebookError, Result};
use crate::index::DisplayIndex;
use std::sync::Arc;

use super::helpers::resolve_index;

pub const COMMAND_WORD: &str = "deletenote";

pub const USAGE: &str = "deletenote: Deletes the note with the given title \
from the patient identified by the index number used in the displayed patient list.\n\
Parameters: INDEX (must be a positive integer) nt/NOTE TITLE\n\
Example: deletenote 1 nt/Session 1";

pub const MESSAGE_INVALID_TITLE: &str = "The note title provided is invalid";

pub fn run(book: &mut PatientBook, index: DisplayIndex, title: &str) -> Result<CmdResult> {
    let target = resolve_index(book, index)?;
    if title.trim().is_empty() {
        return Err(CarebookError::Validation(MESSAGE_INVALID_TITLE.to_string()));
    }
    if target.notes().is_empty() {
        return Err(CarebookError::NoNotes(target.name().to_string()));
    }
    if !target.notes().contains_title(title) {
        return Err(CarebookError::NoteNotFound(title.trim().to_string()));
    }

    let edited = target.with_notes(target.notes().without(title));
    book.set_patient(&target, edited.clone())?;
    book.show_all();

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Deleted Note of Patient: {}",
            edited.name()
        )))
        .with_affected_patients(vec![Arc::new(edited)]))
}
