use thiserror::Error;

/// Every failure a command can produce.
///
/// The `Display` output of each variant is the exact feedback shown to the
/// user; the CLI prints it verbatim.
#[derive(Error, Debug)]
pub enum CarebookError {
    #[error("{0}")]
    Validation(String),

    #[error("This patient already exists in the app")]
    DuplicatePatient,

    #[error("A note titled '{0}' already exists for this patient")]
    DuplicateNote(String),

    #[error("The patient does not exist in the app")]
    PatientNotFound,

    #[error("Note Title does not exist: {0}")]
    NoteNotFound(String),

    #[error("Patient {0} has no notes")]
    NoNotes(String),

    #[error("The patient index provided is invalid")]
    InvalidIndex,

    #[error("Invalid command format! \n{0}")]
    InvalidFormat(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("No command to undo!")]
    UndoUnavailable,

    #[error("No command to redo!")]
    RedoUnavailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CarebookError>;
