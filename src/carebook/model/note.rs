use crate::error::{CarebookError, Result};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

pub const NOTE_CONSTRAINTS: &str = "Note must have title and content!";

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

fn next_sequence() -> u64 {
    NEXT_SEQUENCE.fetch_add(1, AtomicOrdering::Relaxed)
}

/// A titled, timestamped annotation attached to a patient.
///
/// Notes are values: editing one produces a new `Note` (see
/// [`Note::with_content`]). Chronological order is `(created_at, sequence)`,
/// where `sequence` is handed out at construction so two notes created in the
/// same clock tick still have a total order.
#[derive(Debug, Clone)]
pub struct Note {
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    sequence: u64,
}

impl Note {
    /// Creates a note stamped with the current time.
    pub fn new(title: &str, content: &str) -> Result<Self> {
        Self::restore(title, content, Utc::now())
    }

    /// Rebuilds a note with a known creation time (persistence, fixtures).
    pub fn restore(title: &str, content: &str, created_at: DateTime<Utc>) -> Result<Self> {
        if !is_valid_note(title, content) {
            return Err(CarebookError::Validation(NOTE_CONSTRAINTS.to_string()));
        }
        Ok(Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            created_at,
            sequence: next_sequence(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy with new content. Title, creation time and position in
    /// the patient's note order are kept.
    pub fn with_content(&self, content: &str) -> Result<Self> {
        if !is_valid_note(&self.title, content) {
            return Err(CarebookError::Validation(NOTE_CONSTRAINTS.to_string()));
        }
        Ok(Self {
            content: content.trim().to_string(),
            ..self.clone()
        })
    }

    /// Case-insensitive exact title match.
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.trim().to_lowercase()
    }

    pub fn chronological(&self, other: &Note) -> Ordering {
        self.created_at
            .cmp(&other.created_at)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.content == other.content
            && self.created_at == other.created_at
    }
}

impl Eq for Note {}

pub fn is_valid_note(title: &str, content: &str) -> bool {
    !title.trim().is_empty() && !content.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 11, hour, 0, 0).unwrap()
    }

    #[test]
    fn rejects_blank_title_or_content() {
        assert!(matches!(
            Note::new("  ", "content"),
            Err(CarebookError::Validation(_))
        ));
        assert!(matches!(
            Note::new("Title", ""),
            Err(CarebookError::Validation(_))
        ));
        assert!(Note::new("Title", "content").is_ok());
    }

    #[test]
    fn trims_title_and_content() {
        let note = Note::new("  Session 1 ", " content A\n").unwrap();
        assert_eq!(note.title(), "Session 1");
        assert_eq!(note.content(), "content A");
    }

    #[test]
    fn equality_ignores_sequence() {
        let a = Note::restore("T", "C", at(12)).unwrap();
        let b = Note::restore("T", "C", at(12)).unwrap();
        assert_eq!(a, b);

        let c = Note::restore("T", "C", at(13)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn same_timestamp_orders_by_construction() {
        let first = Note::restore("First", "C", at(12)).unwrap();
        let second = Note::restore("Second", "C", at(12)).unwrap();
        assert_eq!(first.chronological(&second), Ordering::Less);
        assert_eq!(second.chronological(&first), Ordering::Greater);
    }

    #[test]
    fn with_content_keeps_timestamp_and_order() {
        let original = Note::restore("Session", "old", at(9)).unwrap();
        let edited = original.with_content("new").unwrap();
        assert_eq!(edited.created_at(), original.created_at());
        assert_eq!(edited.chronological(&original), Ordering::Equal);
        assert_eq!(edited.content(), "new");
        assert!(original.with_content(" ").is_err());
    }

    #[test]
    fn title_match_is_case_insensitive() {
        let note = Note::new("Session 1", "content").unwrap();
        assert!(note.has_title("session 1"));
        assert!(note.has_title(" SESSION 1 "));
        assert!(!note.has_title("session"));
    }
}
