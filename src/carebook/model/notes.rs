use super::note::Note;

/// A patient's notes in chronological order.
///
/// The set never re-sorts existing entries: insertion places the note after
/// every note that is chronologically not greater, so equal timestamps keep
/// construction order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteSet {
    notes: Vec<Note>,
}

impl NoteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, note: Note) {
        let pos = self
            .notes
            .partition_point(|existing| existing.chronological(&note).is_le());
        self.notes.insert(pos, note);
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.has_title(title))
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.find_by_title(title).is_some()
    }

    /// Notes whose title contains `keyword`, ignoring case.
    pub fn filter_by_title(&self, keyword: &str) -> Vec<Note> {
        let needle = keyword.trim().to_lowercase();
        self.notes
            .iter()
            .filter(|n| n.title().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Copy of the set without the first note matching `title`.
    pub fn without(&self, title: &str) -> NoteSet {
        let mut notes = self.notes.clone();
        if let Some(pos) = notes.iter().position(|n| n.has_title(title)) {
            notes.remove(pos);
        }
        NoteSet { notes }
    }

    /// Copy of the set with `replacement` standing in for the note matching
    /// `title`. The replacement takes the old note's place.
    pub fn replacing(&self, title: &str, replacement: Note) -> NoteSet {
        let mut set = self.without(title);
        set.insert(replacement);
        set
    }

    pub fn to_vec(&self) -> Vec<Note> {
        self.notes.clone()
    }
}

impl FromIterator<Note> for NoteSet {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        let mut set = NoteSet::new();
        for note in iter {
            set.insert(note);
        }
        set
    }
}
