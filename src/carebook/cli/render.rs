//! Turns `CmdResult` values into terminal text.
//!
//! Every function returns a `String`; printing is left to the caller so the
//! output can be checked in tests with colors switched off.

use carebook::api::{MessageLevel, NotesView};
use carebook::commands::CmdMessage;
use carebook::index::DisplayPatient;
use carebook::model::Note;
use chrono::{DateTime, Utc};
use colored::Colorize;
use once_cell::sync::Lazy;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const COL_INDEX: usize = 5;
const COL_PHONE: usize = 12;
const TIME_WIDTH: usize = 16;
const NOTE_INDENT: &str = "     ";

static TIME_FORMATTER: Lazy<Formatter> = Lazy::new(Formatter::new);

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| match message.level {
            MessageLevel::Info => message.content.dimmed().to_string(),
            MessageLevel::Success => message.content.green().to_string(),
            MessageLevel::Warning => message.content.yellow().to_string(),
            MessageLevel::Error => message.content.red().to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_error(error: &str) -> String {
    error.red().to_string()
}

/// One line per patient: index, name, phone, address and tags.
pub fn render_patient_list(patients: &[DisplayPatient]) -> String {
    if patients.is_empty() {
        return "No patients found.".dimmed().to_string();
    }
    patients
        .iter()
        .map(render_patient_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_patient_line(dp: &DisplayPatient) -> String {
    let patient = &dp.patient;
    let index = format!("{:>width$} ", format!("{}.", dp.index), width = COL_INDEX - 1);
    let name = patient.name().as_str();
    let phone = format!("{:<width$}", patient.phone().as_str(), width = COL_PHONE);
    let tags: String = patient
        .tags()
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let fixed = COL_INDEX + name.width() + 2 + COL_PHONE + tags.width() + 1;
    let address = truncate_to_width(patient.address().as_str(), LINE_WIDTH.saturating_sub(fixed));

    let mut line = format!(
        "{}{}  {}{}",
        index.yellow(),
        name.bold(),
        phone,
        address
    );
    if !tags.is_empty() {
        line.push(' ');
        line.push_str(&tags.cyan().to_string());
    }
    line
}

pub fn render_notes(view: &NotesView) -> String {
    match view {
        NotesView::Patient(dp) => {
            let notes = dp.patient.notes().to_vec();
            render_patient_notes(dp, &notes)
        }
        NotesView::Filtered { patient, notes, .. } => render_patient_notes(patient, notes),
        NotesView::All(patients) => patients
            .iter()
            .map(|dp| render_patient_notes(dp, &dp.patient.notes().to_vec()))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn render_patient_notes(dp: &DisplayPatient, notes: &[Note]) -> String {
    let mut lines = vec![format!(
        "{} {}",
        format!("{}.", dp.index).yellow(),
        dp.patient.name().as_str().bold()
    )];
    if notes.is_empty() {
        lines.push(format!("{}{}", NOTE_INDENT, "(no notes)".dimmed()));
    }
    for note in notes {
        lines.push(render_note_heading(note));
        for content_line in note.content().lines() {
            lines.push(format!("{}  {}", NOTE_INDENT, content_line));
        }
    }
    lines.join("\n")
}

fn render_note_heading(note: &Note) -> String {
    let available = LINE_WIDTH.saturating_sub(NOTE_INDENT.len() + TIME_WIDTH);
    let title = truncate_to_width(note.title(), available);
    let padding = available.saturating_sub(title.width());
    format!(
        "{}{}{}{}",
        NOTE_INDENT,
        title.bold(),
        " ".repeat(padding),
        format_time_ago(note.created_at()).dimmed()
    )
}

pub fn render_help(usage: &[&str]) -> String {
    usage
        .iter()
        .map(|u| {
            let (word, rest) = u.split_once(':').unwrap_or((*u, ""));
            format!("{}:{}", word.bold(), rest)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = TIME_FORMATTER.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
