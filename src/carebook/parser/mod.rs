//! # Command Parsing
//!
//! Turns one line of user input into a typed [`Command`]. The first word
//! selects the command; the rest is handed to that command's parser, which
//! uses [`tokenizer`] for prefixed arguments (`n/NAME`, `nt/TITLE`, ...).
//!
//! Parsers validate field values through the model types, so a command
//! receives only well-formed names, phones, addresses, tags and indexes.
//! Note titles and contents are passed through as given; `Note::new` checks
//! them when the command runs.

use crate::commands::session::HELP_USAGE;
use crate::commands::{self, Command};
use crate::error::{CarebookError, Result};
use crate::index::DisplayIndex;
use std::str::FromStr;

pub mod notes;
pub mod patient;
pub mod tokenizer;

pub fn parse_command(input: &str) -> Result<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CarebookError::InvalidFormat(HELP_USAGE.to_string()));
    }

    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(split) => trimmed.split_at(split),
        None => (trimmed, ""),
    };

    match word {
        commands::add::COMMAND_WORD => patient::parse_add(args),
        commands::edit::COMMAND_WORD => patient::parse_edit(args),
        commands::delete::COMMAND_WORD => patient::parse_delete(args),
        commands::find::COMMAND_WORD => patient::parse_find(args),
        commands::note::COMMAND_WORD => notes::parse_note(args),
        commands::edit_note::COMMAND_WORD => notes::parse_edit_note(args),
        commands::delete_note::COMMAND_WORD => notes::parse_delete_note(args),
        commands::filter_note::COMMAND_WORD => notes::parse_filter_note(args),
        commands::view_notes::COMMAND_WORD => notes::parse_view_notes(args),
        commands::list::COMMAND_WORD => Ok(Command::List),
        commands::clear::COMMAND_WORD => Ok(Command::Clear),
        commands::undo::UNDO_WORD => Ok(Command::Undo),
        commands::undo::REDO_WORD => Ok(Command::Redo),
        commands::session::HELP_WORD => Ok(Command::Help),
        commands::session::EXIT_WORD => Ok(Command::Exit),
        other => Err(CarebookError::UnknownCommand(other.to_string())),
    }
}

/// Parses a display index, reporting `usage` when it is malformed.
pub(crate) fn parse_index(raw: &str, usage: &str) -> Result<DisplayIndex> {
    DisplayIndex::from_str(raw).map_err(|_| CarebookError::InvalidFormat(usage.to_string()))
}
