use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CarebookError, Result};
use crate::index::DisplayIndex;
use crate::model::Note;
use std::sync::Arc;

use super::helpers::resolve_index;

pub const COMMAND_WORD: &str = "note";

pub const USAGE: &str = "note: Adds a new note for the patient identified \
by the index number used in the displayed patient list.\n\
Parameters: INDEX (must be a positive integer) nt/NOTE TITLE nc/NOTE CONTENT\n\
Example: note 1 nt/Patient has allergies! nc/Allergic to penicillin and nuts";

pub fn run(
    book: &mut PatientBook,
    index: DisplayIndex,
    title: &str,
    content: &str,
) -> Result<CmdResult> {
    let target = resolve_index(book, index)?;
    let note = Note::new(title, content)?;

    if target.notes().contains_title(note.title()) {
        return Err(CarebookError::DuplicateNote(note.title().to_string()));
    }

    let mut notes = target.notes().clone();
    notes.insert(note.clone());
    let edited = target.with_notes(notes);

    book.set_patient(&target, edited.clone())?;
    book.show_all();

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "New note added for {}: {}",
            edited.name(),
            note.title()
        )))
        .with_affected_patients(vec![Arc::new(edited)]))
}
