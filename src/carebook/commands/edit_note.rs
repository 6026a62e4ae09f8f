use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CarebookError, Result};
use crate::index::DisplayIndex;
use crate::model::note::{is_valid_note, NOTE_CONSTRAINTS};
use std::sync::Arc;

use super::helpers::resolve_index;

pub const COMMAND_WORD: &str = "editnote";

pub const USAGE: &str = "editnote: Replaces the content of the note with the \
given title for the patient identified by the index number used in the \
displayed patient list.\n\
Parameters: INDEX (must be a positive integer) nt/NOTE TITLE nc/NEW CONTENT\n\
Example: editnote 1 nt/Session 1 nc/Patient reported improvement";

/// Replaces a note's content. The title is matched ignoring case; the note
/// keeps its title, creation time and position.
pub fn run(
    book: &mut PatientBook,
    index: DisplayIndex,
    title: &str,
    content: &str,
) -> Result<CmdResult> {
    let target = resolve_index(book, index)?;
    if !is_valid_note(title, content) {
        return Err(CarebookError::Validation(NOTE_CONSTRAINTS.to_string()));
    }
    if target.notes().is_empty() {
        return Err(CarebookError::NoNotes(target.name().to_string()));
    }
    let existing = target
        .notes()
        .find_by_title(title)
        .ok_or_else(|| CarebookError::NoteNotFound(title.trim().to_string()))?;

    let replacement = existing.with_content(content)?;
    let edited = target.with_notes(target.notes().replacing(existing.title(), replacement));

    book.set_patient(&target, edited.clone())?;
    book.show_all();

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Edited note of Patient: {}",
            edited.name()
        )))
        .with_affected_patients(vec![Arc::new(edited)]))
}
