use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult, NotesView};
use crate::error::{CarebookError, Result};
use crate::index::DisplayIndex;

use super::helpers::{display_patient, resolve_index};

pub const COMMAND_WORD: &str = "filternote";

pub const USAGE: &str = "filternote: Filters the notes of the patient \
identified by the index number used in the displayed patient list, keeping \
those whose title contains the keyword (case-insensitive).\n\
Parameters: INDEX (must be a positive integer) nt/KEYWORD\n\
Example: filternote 1 nt/session";

pub fn run(book: &PatientBook, index: DisplayIndex, keyword: &str) -> Result<CmdResult> {
    let target = resolve_index(book, index)?;
    if target.notes().is_empty() {
        return Err(CarebookError::NoNotes(target.name().to_string()));
    }

    let notes = target.notes().filter_by_title(keyword);
    if notes.is_empty() {
        return Err(CarebookError::NoteNotFound(keyword.trim().to_string()));
    }

    let message = CmdMessage::info(format!("Displaying notes for {}", target.name()));
    Ok(CmdResult::default()
        .with_message(message)
        .with_notes(NotesView::Filtered {
            patient: display_patient(target, index),
            keyword: keyword.trim().to_string(),
            notes,
        }))
}
