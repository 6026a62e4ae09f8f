use crate::commands::{delete_note, edit_note, filter_note, note, view_notes, Command, ViewTarget};
use crate::error::{CarebookError, Result};
use crate::index::DisplayIndex;

use super::parse_index;
use super::tokenizer::{tokenize, Prefix, PREFIX_NOTE_CONTENT, PREFIX_NOTE_TITLE};

const NOTE_PREFIXES: &[Prefix] = &[PREFIX_NOTE_TITLE, PREFIX_NOTE_CONTENT];

/// Index, title and content shared by `note` and `editnote`.
fn parse_titled_content(args: &str, usage: &str) -> Result<(DisplayIndex, String, String)> {
    let map = tokenize(args, NOTE_PREFIXES);
    let (Some(title), Some(content)) = (
        map.value(PREFIX_NOTE_TITLE),
        map.value(PREFIX_NOTE_CONTENT),
    ) else {
        return Err(CarebookError::InvalidFormat(usage.to_string()));
    };
    let index = parse_index(map.preamble(), usage)?;
    map.verify_no_duplicates(NOTE_PREFIXES)?;
    Ok((index, title.to_string(), content.to_string()))
}

pub fn parse_note(args: &str) -> Result<Command> {
    let (index, title, content) = parse_titled_content(args, note::USAGE)?;
    Ok(Command::AddNote {
        index,
        title,
        content,
    })
}

pub fn parse_edit_note(args: &str) -> Result<Command> {
    let (index, title, content) = parse_titled_content(args, edit_note::USAGE)?;
    Ok(Command::EditNote {
        index,
        title,
        content,
    })
}

pub fn parse_delete_note(args: &str) -> Result<Command> {
    let map = tokenize(args, &[PREFIX_NOTE_TITLE]);
    let Some(title) = map.value(PREFIX_NOTE_TITLE) else {
        return Err(CarebookError::InvalidFormat(delete_note::USAGE.to_string()));
    };
    let index = parse_index(map.preamble(), delete_note::USAGE)?;
    map.verify_no_duplicates(&[PREFIX_NOTE_TITLE])?;
    Ok(Command::DeleteNote {
        index,
        title: title.to_string(),
    })
}

pub fn parse_filter_note(args: &str) -> Result<Command> {
    let map = tokenize(args, &[PREFIX_NOTE_TITLE]);
    let keyword = match map.value(PREFIX_NOTE_TITLE) {
        Some(keyword) if !keyword.is_empty() => keyword,
        _ => return Err(CarebookError::InvalidFormat(filter_note::USAGE.to_string())),
    };
    let index = parse_index(map.preamble(), filter_note::USAGE)?;
    map.verify_no_duplicates(&[PREFIX_NOTE_TITLE])?;
    Ok(Command::FilterNotes {
        index,
        keyword: keyword.to_string(),
    })
}

pub const MESSAGE_SPECIAL_CHARACTERS: &str = "Special characters are not allowed!";

pub fn parse_view_notes(args: &str) -> Result<Command> {
    let target = args.trim();
    if target.is_empty() {
        return Err(CarebookError::InvalidFormat(view_notes::USAGE.to_string()));
    }
    if !target.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CarebookError::Validation(format!(
            "{} \n{}",
            MESSAGE_SPECIAL_CHARACTERS,
            view_notes::USAGE
        )));
    }
    if target.eq_ignore_ascii_case("all") {
        return Ok(Command::ViewNotes(ViewTarget::All));
    }
    let index = parse_index(target, view_notes::USAGE)?;
    Ok(Command::ViewNotes(ViewTarget::Index(index)))
}
