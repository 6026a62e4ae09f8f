use crate::commands::{
    add, clear, delete, delete_note, edit, edit_note, filter_note, find, list, note, undo,
    view_notes, CmdMessage, CmdResult,
};
use crate::error::Result;

pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

pub const HELP_USAGE: &str = "help: Shows program usage instructions.";
pub const EXIT_USAGE: &str = "exit: Exits the program.";

/// Usage text of every command, in the order shown by `help`.
pub fn usage_lines() -> Vec<&'static str> {
    vec![
        add::USAGE,
        edit::USAGE,
        delete::USAGE,
        note::USAGE,
        edit_note::USAGE,
        delete_note::USAGE,
        filter_note::USAGE,
        view_notes::USAGE,
        find::USAGE,
        list::USAGE,
        clear::USAGE,
        undo::UNDO_USAGE,
        undo::REDO_USAGE,
        HELP_USAGE,
        EXIT_USAGE,
    ]
}

pub fn help() -> Result<CmdResult> {
    let mut result = CmdResult::default().with_message(CmdMessage::info("Opened help window."));
    result.show_help = true;
    Ok(result)
}

pub fn exit() -> Result<CmdResult> {
    let mut result =
        CmdResult::default().with_message(CmdMessage::info("Exiting carebook as requested ..."));
    result.exit = true;
    Ok(result)
}
