use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult, NotesView};
use crate::error::Result;
use crate::index::{index_patients, DisplayIndex};

use super::helpers::{display_patient, resolve_index};

pub const COMMAND_WORD: &str = "viewnotes";

pub const USAGE: &str = "viewnotes: Shows the notes of the patient identified \
by the index number used in the displayed patient list, or of every patient.\n\
Parameters: INDEX (must be a positive integer) | all\n\
Example: viewnotes 1\n\
Example: viewnotes all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTarget {
    Index(DisplayIndex),
    All,
}

pub fn run(book: &mut PatientBook, target: &ViewTarget) -> Result<CmdResult> {
    match target {
        ViewTarget::Index(index) => view_one(book, *index),
        ViewTarget::All => Ok(view_all(book)),
    }
}

fn view_one(book: &PatientBook, index: DisplayIndex) -> Result<CmdResult> {
    let patient = resolve_index(book, index)?;
    let message = if patient.notes().is_empty() {
        CmdMessage::info(format!("Patient {} has no notes.", patient.name()))
    } else {
        CmdMessage::info(format!("Displaying notes for {}", patient.name()))
    };

    Ok(CmdResult::default()
        .with_message(message)
        .with_notes(NotesView::Patient(display_patient(patient, index))))
}

/// Shows every patient, so the listed indexes match what later commands
/// resolve against.
fn view_all(book: &mut PatientBook) -> CmdResult {
    book.show_all();
    CmdResult::default()
        .with_message(CmdMessage::info("Displaying notes for all patients"))
        .with_notes(NotesView::All(index_patients(book.patients())))
}
