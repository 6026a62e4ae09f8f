use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::indexed_patients;

pub const UNDO_WORD: &str = "undo";
pub const REDO_WORD: &str = "redo";

pub const UNDO_USAGE: &str = "undo: Reverts the most recent change to patient data.";
pub const REDO_USAGE: &str = "redo: Reapplies the most recently undone change.";

pub fn undo(book: &mut PatientBook) -> Result<CmdResult> {
    book.undo()?;
    Ok(restored(book, "Previous command has been undone!"))
}

pub fn redo(book: &mut PatientBook) -> Result<CmdResult> {
    book.redo()?;
    Ok(restored(book, "Previously undone command has been recovered!"))
}

fn restored(book: &mut PatientBook, message: &str) -> CmdResult {
    book.show_all();
    CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_listed_patients(indexed_patients(book))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::PatientFilter;
    use crate::commands::{add, delete, edit_note, find};
    use crate::fixtures::patient;
    use crate::error::CarebookError;
    use crate::fixtures::{alice, carl, typical_book};
    use crate::index::DisplayIndex;

    #[test]
    fn nothing_to_undo_on_fresh_book() {
        let mut book = PatientBook::new();
        let err = undo(&mut book).unwrap_err();
        assert!(matches!(err, CarebookError::UndoUnavailable));
        assert_eq!(err.to_string(), "No command to undo!");
    }

    #[test]
    fn nothing_to_redo_at_newest_snapshot() {
        let mut book = typical_book();
        let err = redo(&mut book).unwrap_err();
        assert_eq!(err.to_string(), "No command to redo!");
    }

    #[test]
    fn add_then_undo_then_redo() {
        let mut book = PatientBook::new();
        add::run(&mut book, alice()).unwrap();
        book.save_state();

        undo(&mut book).unwrap();
        assert!(book.patients().is_empty());

        let result = redo(&mut book).unwrap();
        assert!(book.has_patient(&alice()));
        assert_eq!(result.listed_patients.len(), 1);
    }

    #[test]
    fn undo_restores_deleted_patient_with_notes() {
        let mut book = typical_book();
        delete::run(&mut book, DisplayIndex::from_one_based(1)).unwrap();
        book.save_state();

        undo(&mut book).unwrap();
        assert_eq!(book.patients()[0].as_ref(), &alice());
    }

    #[test]
    fn undo_reverts_note_edit() {
        let mut book = typical_book();
        edit_note::run(
            &mut book,
            DisplayIndex::from_one_based(1),
            "4th Session with Alice",
            "Changed",
        )
        .unwrap();
        book.save_state();

        undo(&mut book).unwrap();
        assert_eq!(book.patients()[0].notes(), alice().notes());
        assert!(book.has_patient(&carl()));
    }

    fn book_after_filtered_delete() -> PatientBook {
        let mut book = PatientBook::new();
        add::run(&mut book, patient("Alice", "91234567", "1 Clementi Rd")).unwrap();
        book.save_state();
        add::run(&mut book, patient("Bob", "999", "Somewhere")).unwrap();
        book.save_state();

        find::run(&mut book, &["bob".to_string()]).unwrap();
        delete::run(&mut book, DisplayIndex::from_one_based(1)).unwrap();
        book.save_state();
        book
    }

    #[test]
    fn undo_shows_all_patients() {
        let mut book = book_after_filtered_delete();
        find::run(&mut book, &["alice".to_string()]).unwrap();

        let result = undo(&mut book).unwrap();
        assert_eq!(book.filter(), &PatientFilter::All);
        assert_eq!(book.filtered_patients().len(), 2);
        assert_eq!(result.listed_patients.len(), 2);
    }

    #[test]
    fn redo_shows_all_patients() {
        let mut book = book_after_filtered_delete();
        undo(&mut book).unwrap();
        find::run(&mut book, &["bob".to_string()]).unwrap();

        let result = redo(&mut book).unwrap();
        assert_eq!(book.filter(), &PatientFilter::All);
        assert_eq!(book.filtered_patients().len(), 1);
        assert_eq!(result.listed_patients.len(), 1);
        assert_eq!(result.listed_patients[0].patient.name().as_str(), "Alice");
    }
}
