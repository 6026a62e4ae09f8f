//! # API Facade
//!
//! The single entry point for carebook operations, whatever the UI. It owns
//! the [`PatientBook`] and a [`DataStore`], and does three things:
//!
//! - **Parses** raw input into a [`Command`] (or accepts a typed one)
//! - **Executes** it against the book
//! - **Persists** the book after any command that changed patient data
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Presentation**: it returns [`CmdResult`], never strings for a terminal
//!
//! ## Persistence Failures
//!
//! A command's effect on the book stands even if saving fails afterwards.
//! The failure is logged and added to the result as a warning; the next
//! successful save writes the whole book again.
//!
//! ## Generic Over DataStore
//!
//! - Production: `CarebookApi<FileStore>`
//! - Testing: `CarebookApi<InMemoryStore>`

use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult, Command};
use crate::error::Result;
use crate::parser::parse_command;
use crate::store::DataStore;
use log::{debug, warn};

pub use crate::commands::{MessageLevel, NotesView};

pub struct CarebookApi<S: DataStore> {
    book: PatientBook,
    store: S,
}

impl<S: DataStore> CarebookApi<S> {
    /// Loads saved patients from `store`; starts empty when nothing was saved.
    pub fn open(store: S) -> Result<Self> {
        let book = match store.load()? {
            Some(patients) => PatientBook::with_patients(patients)?,
            None => PatientBook::new(),
        };
        debug!("api: opened book with {} patients", book.patients().len());
        Ok(Self { book, store })
    }

    /// Parses and runs one line of user input.
    pub fn execute(&mut self, input: &str) -> Result<CmdResult> {
        let command = parse_command(input)?;
        self.run(&command)
    }

    pub fn run(&mut self, command: &Command) -> Result<CmdResult> {
        debug!("api: running {}", command.word());
        let mut result = command.execute(&mut self.book)?;

        if command.changes_content() {
            if let Err(e) = self.store.save(self.book.patients()) {
                warn!("api: failed to save after {}: {}", command.word(), e);
                result.add_message(CmdMessage::warning(format!(
                    "Could not save patient data: {}",
                    e
                )));
            }
        }
        Ok(result)
    }

    pub fn book(&self) -> &PatientBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
