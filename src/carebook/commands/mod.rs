//! # Command Layer
//!
//! One module per user command, each exposing a `run` function that takes the
//! [`PatientBook`] plus already-typed arguments and returns a [`CmdResult`].
//! [`Command`] ties them together: it is what the parser produces and what the
//! API executes.
//!
//! ## Execution Contract
//!
//! Every `run` function:
//! 1. Resolves display indexes against the *filtered* patient list.
//! 2. Validates everything it needs before touching the book.
//! 3. Applies at most one book mutation, building new immutable patients
//!    rather than changing stored ones.
//!
//! [`Command::execute`] then saves exactly one history snapshot for a
//! successful mutating command. A failed command returns before any mutation,
//! so the book and its history are exactly as they were.

use crate::book::PatientBook;
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayPatient};
use crate::model::{Note, Patient};
use std::sync::Arc;

pub mod add;
pub mod clear;
pub mod delete;
pub mod delete_note;
pub mod edit;
pub mod edit_note;
pub mod filter_note;
pub mod find;
pub mod helpers;
pub mod list;
pub mod note;
pub mod session;
pub mod undo;
pub mod view_notes;

pub use edit::EditPatientDescriptor;
pub use view_notes::ViewTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Note data for the presentation layer. Each variant is a different shape
/// the UI renders differently.
#[derive(Debug, Clone)]
pub enum NotesView {
    /// Every note of one patient (possibly none).
    Patient(DisplayPatient),
    /// The notes of one patient whose titles matched `keyword`.
    Filtered {
        patient: DisplayPatient,
        keyword: String,
        notes: Vec<Note>,
    },
    /// Every patient in the book with their notes; patients without notes
    /// are included with an empty note set.
    All(Vec<DisplayPatient>),
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_patients: Vec<Arc<Patient>>,
    pub listed_patients: Vec<DisplayPatient>,
    pub notes: Option<NotesView>,
    pub messages: Vec<CmdMessage>,
    pub show_help: bool,
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_patients(mut self, patients: Vec<Arc<Patient>>) -> Self {
        self.affected_patients = patients;
        self
    }

    pub fn with_listed_patients(mut self, patients: Vec<DisplayPatient>) -> Self {
        self.listed_patients = patients;
        self
    }

    pub fn with_notes(mut self, notes: NotesView) -> Self {
        self.notes = Some(notes);
        self
    }

    /// All message texts, one per line.
    pub fn feedback(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A parsed user command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Patient),
    Edit {
        index: DisplayIndex,
        descriptor: EditPatientDescriptor,
    },
    Delete(DisplayIndex),
    AddNote {
        index: DisplayIndex,
        title: String,
        content: String,
    },
    EditNote {
        index: DisplayIndex,
        title: String,
        content: String,
    },
    DeleteNote {
        index: DisplayIndex,
        title: String,
    },
    FilterNotes {
        index: DisplayIndex,
        keyword: String,
    },
    ViewNotes(ViewTarget),
    Find(Vec<String>),
    List,
    Clear,
    Undo,
    Redo,
    Help,
    Exit,
}

impl Command {
    /// The keyword that invokes this command.
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Edit { .. } => edit::COMMAND_WORD,
            Command::Delete(_) => delete::COMMAND_WORD,
            Command::AddNote { .. } => note::COMMAND_WORD,
            Command::EditNote { .. } => edit_note::COMMAND_WORD,
            Command::DeleteNote { .. } => delete_note::COMMAND_WORD,
            Command::FilterNotes { .. } => filter_note::COMMAND_WORD,
            Command::ViewNotes(_) => view_notes::COMMAND_WORD,
            Command::Find(_) => find::COMMAND_WORD,
            Command::List => list::COMMAND_WORD,
            Command::Clear => clear::COMMAND_WORD,
            Command::Undo => undo::UNDO_WORD,
            Command::Redo => undo::REDO_WORD,
            Command::Help => session::HELP_WORD,
            Command::Exit => session::EXIT_WORD,
        }
    }

    /// True for commands that change patient data and so form an undo step.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Edit { .. }
                | Command::Delete(_)
                | Command::AddNote { .. }
                | Command::EditNote { .. }
                | Command::DeleteNote { .. }
                | Command::Clear
        )
    }

    /// True when a successful run leaves the book contents different from
    /// what was last persisted.
    pub fn changes_content(&self) -> bool {
        self.is_mutating() || matches!(self, Command::Undo | Command::Redo)
    }

    pub fn execute(&self, book: &mut PatientBook) -> Result<CmdResult> {
        let result = match self {
            Command::Add(patient) => add::run(book, patient.clone()),
            Command::Edit { index, descriptor } => edit::run(book, *index, descriptor),
            Command::Delete(index) => delete::run(book, *index),
            Command::AddNote {
                index,
                title,
                content,
            } => note::run(book, *index, title, content),
            Command::EditNote {
                index,
                title,
                content,
            } => edit_note::run(book, *index, title, content),
            Command::DeleteNote { index, title } => delete_note::run(book, *index, title),
            Command::FilterNotes { index, keyword } => filter_note::run(book, *index, keyword),
            Command::ViewNotes(target) => view_notes::run(book, target),
            Command::Find(keywords) => find::run(book, keywords),
            Command::List => list::run(book),
            Command::Clear => clear::run(book),
            Command::Undo => undo::undo(book),
            Command::Redo => undo::redo(book),
            Command::Help => session::help(),
            Command::Exit => session::exit(),
        }?;

        if self.is_mutating() {
            book.save_state();
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CarebookError;
    use crate::fixtures::{alice, benson, carl, patient, typical_book};

    fn idx(n: usize) -> DisplayIndex {
        DisplayIndex::from_one_based(n)
    }

    fn mutating_commands() -> Vec<Command> {
        vec![
            Command::Add(patient("Hoon Meier", "8482424", "little india")),
            Command::Edit {
                index: idx(1),
                descriptor: EditPatientDescriptor::default(),
            },
            Command::AddNote {
                index: idx(3),
                title: "Intake".into(),
                content: "First visit".into(),
            },
            Command::EditNote {
                index: idx(1),
                title: "4th session with alice".into(),
                content: "Revised".into(),
            },
            Command::DeleteNote {
                index: idx(2),
                title: "Intake assessment".into(),
            },
            Command::Delete(idx(7)),
            Command::Clear,
        ]
    }

    #[test]
    fn each_successful_mutation_adds_exactly_one_snapshot() {
        let mut book = typical_book();
        for command in mutating_commands() {
            let before = book.history().len();
            command.execute(&mut book).unwrap();
            assert_eq!(
                book.history().len(),
                before + 1,
                "{} should add one snapshot",
                command.word()
            );
        }
    }

    #[test]
    fn queries_do_not_add_snapshots() {
        let mut book = typical_book();
        let queries = vec![
            Command::ViewNotes(ViewTarget::All),
            Command::ViewNotes(ViewTarget::Index(idx(1))),
            Command::FilterNotes {
                index: idx(4),
                keyword: "session".into(),
            },
            Command::Find(vec!["meier".into()]),
            Command::List,
            Command::Help,
        ];
        for command in queries {
            command.execute(&mut book).unwrap();
        }
        assert_eq!(book.history().len(), 1);
    }

    #[test]
    fn failed_command_leaves_book_and_history_unchanged() {
        let mut book = typical_book();
        let before = book.snapshot();

        let failures = vec![
            Command::Add(alice()),
            Command::Delete(idx(99)),
            Command::AddNote {
                index: idx(1),
                title: "4TH SESSION WITH ALICE".into(),
                content: "again".into(),
            },
            Command::EditNote {
                index: idx(3),
                title: "anything".into(),
                content: "x".into(),
            },
            Command::Edit {
                index: idx(1),
                descriptor: EditPatientDescriptor {
                    name: Some(benson().name().clone()),
                    ..Default::default()
                },
            },
            Command::Redo,
        ];
        for command in failures {
            assert!(command.execute(&mut book).is_err(), "{}", command.word());
            assert_eq!(book.snapshot(), before);
            assert_eq!(book.history().len(), 1);
        }
    }

    #[test]
    fn undo_after_sequence_restores_start_and_redo_restores_end() {
        let mut book = typical_book();
        let start = book.snapshot();
        let commands = mutating_commands();

        for command in &commands {
            command.execute(&mut book).unwrap();
        }
        let end = book.snapshot();

        for _ in &commands {
            Command::Undo.execute(&mut book).unwrap();
        }
        assert_eq!(book.snapshot(), start);
        assert!(matches!(
            Command::Undo.execute(&mut book),
            Err(CarebookError::UndoUnavailable)
        ));

        for _ in &commands {
            Command::Redo.execute(&mut book).unwrap();
        }
        assert_eq!(book.snapshot(), end);
    }

    #[test]
    fn new_command_after_undo_discards_redo() {
        let mut book = crate::book::PatientBook::new();
        Command::Add(alice()).execute(&mut book).unwrap();
        Command::Undo.execute(&mut book).unwrap();
        Command::Add(carl()).execute(&mut book).unwrap();

        assert!(matches!(
            Command::Redo.execute(&mut book),
            Err(CarebookError::RedoUnavailable)
        ));
        assert!(book.has_patient(&carl()));
        assert!(!book.has_patient(&alice()));
    }

    #[test]
    fn feedback_joins_messages() {
        let result = CmdResult::default()
            .with_message(CmdMessage::success("one"))
            .with_message(CmdMessage::warning("two"));
        assert_eq!(result.feedback(), "one\ntwo");
    }
}
