use crate::book::{PatientBook, PatientFilter};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::indexed_patients;

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find: Finds all patients whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

pub fn run(book: &mut PatientBook, keywords: &[String]) -> Result<CmdResult> {
    book.update_filter(PatientFilter::name_keywords(keywords.iter().cloned()));
    let listed = indexed_patients(book);

    Ok(CmdResult::default()
        .with_message(CmdMessage::info(format!("{} patients listed!", listed.len())))
        .with_listed_patients(listed))
}
