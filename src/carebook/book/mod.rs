//! # Patient Book
//!
//! [`PatientBook`] is the versioned record store every command works on. It
//! owns three things and is the only writer of each:
//!
//! - a [`PatientList`]: the current patients, unique by identity
//! - a [`History`]: snapshots of past contents plus a cursor
//! - a [`PatientFilter`]: which patients are displayed (and therefore what a
//!   1-based index refers to)
//!
//! ## Undo Model
//!
//! Undo is snapshot based. After a command mutates the list it calls
//! [`PatientBook::save_state`] exactly once, appending the new contents to the
//! history. Undo and redo move the history cursor and adopt the snapshot found
//! there. Because patients are immutable and shared behind `Arc`, a snapshot
//! costs one pointer per patient and redo reproduces the earlier state exactly.
//!
//! Every constructor saves the initial contents, so the first mutation can be
//! undone.

use crate::error::Result;
use crate::model::Patient;
use log::debug;
use std::sync::Arc;

pub mod filter;
pub mod history;
pub mod patient_list;

pub use filter::PatientFilter;
pub use history::{History, Snapshot};
pub use patient_list::PatientList;

#[derive(Debug)]
pub struct PatientBook {
    patients: PatientList,
    history: History,
    filter: PatientFilter,
}

impl Default for PatientBook {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientBook {
    /// An empty book whose history starts at the empty state.
    pub fn new() -> Self {
        let mut book = Self {
            patients: PatientList::new(),
            history: History::new(),
            filter: PatientFilter::All,
        };
        book.save_state();
        book
    }

    /// A book preloaded with `patients`, which become the earliest undo
    /// point. Fails if two patients share an identity.
    pub fn with_patients(patients: Vec<Patient>) -> Result<Self> {
        let mut list = PatientList::new();
        list.set_patients(patients.into_iter().map(Arc::new).collect())?;

        let mut book = Self {
            patients: list,
            history: History::new(),
            filter: PatientFilter::All,
        };
        book.save_state();
        Ok(book)
    }

    /// True if a patient with the same identity exists.
    pub fn has_patient(&self, patient: &Patient) -> bool {
        self.patients.contains(patient)
    }

    pub fn add_patient(&mut self, patient: Patient) -> Result<()> {
        self.patients.add(patient)
    }

    pub fn set_patient(&mut self, target: &Patient, edited: Patient) -> Result<()> {
        self.patients.set_patient(target, edited)
    }

    pub fn remove_patient(&mut self, patient: &Patient) -> Result<()> {
        self.patients.remove(patient)
    }

    /// Replaces every patient. Does not touch the history.
    pub fn reset_data(&mut self, patients: Vec<Arc<Patient>>) -> Result<()> {
        self.patients.set_patients(patients)
    }

    pub fn patients(&self) -> &[Arc<Patient>] {
        self.patients.as_slice()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.patients.as_slice().to_vec())
    }

    /// Records the current contents as the newest undo point, dropping any
    /// snapshots that were undone.
    pub fn save_state(&mut self) {
        let snapshot = self.snapshot();
        self.history.save(snapshot);
        debug!(
            "history: saved snapshot {} ({} patients)",
            self.history.len(),
            self.patients.len()
        );
    }

    /// Steps back one snapshot and adopts it as the current contents.
    pub fn undo(&mut self) -> Result<()> {
        let patients = self.history.undo()?.patients().to_vec();
        self.adopt(patients)
    }

    /// Steps forward one snapshot and adopts it as the current contents.
    pub fn redo(&mut self) -> Result<()> {
        let patients = self.history.redo()?.patients().to_vec();
        self.adopt(patients)
    }

    fn adopt(&mut self, patients: Vec<Arc<Patient>>) -> Result<()> {
        self.patients.set_patients(patients)?;
        debug!(
            "history: moved to snapshot {:?} of {}",
            self.history.cursor(),
            self.history.len()
        );
        Ok(())
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn filter(&self) -> &PatientFilter {
        &self.filter
    }

    pub fn update_filter(&mut self, filter: PatientFilter) {
        self.filter = filter;
    }

    pub fn show_all(&mut self) {
        self.filter = PatientFilter::All;
    }

    /// The patients currently displayed, in book order.
    pub fn filtered_patients(&self) -> Vec<Arc<Patient>> {
        self.patients
            .as_slice()
            .iter()
            .filter(|p| self.filter.matches(p))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CarebookError;
    use crate::fixtures::{alice, benson, carl, patient, typical_book};

    #[test]
    fn new_book_has_one_snapshot_and_nothing_to_undo() {
        let mut book = PatientBook::new();
        assert_eq!(book.history().len(), 1);
        assert!(matches!(book.undo(), Err(CarebookError::UndoUnavailable)));
    }

    #[test]
    fn with_patients_rejects_duplicates() {
        let result = PatientBook::with_patients(vec![alice(), alice()]);
        assert!(matches!(result, Err(CarebookError::DuplicatePatient)));
    }

    #[test]
    fn has_patient_uses_identity() {
        let mut book = PatientBook::new();
        book.add_patient(patient("Alice", "91234567", "1 Clementi Rd"))
            .unwrap();
        assert!(book.has_patient(&patient("Alice", "000", "elsewhere")));
        assert!(!book.has_patient(&patient("alice", "91234567", "1 Clementi Rd")));
    }

    #[test]
    fn undo_and_redo_adopt_snapshots() {
        let mut book = PatientBook::new();
        book.add_patient(alice()).unwrap();
        book.save_state();
        book.add_patient(benson()).unwrap();
        book.save_state();

        book.undo().unwrap();
        assert_eq!(book.patients().len(), 1);
        book.undo().unwrap();
        assert!(book.patients().is_empty());

        book.redo().unwrap();
        book.redo().unwrap();
        let names: Vec<_> = book.patients().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, vec!["Alice Pauline", "Benson Meier"]);
    }

    #[test]
    fn snapshots_are_unaffected_by_later_edits() {
        let mut book = PatientBook::new();
        book.add_patient(alice()).unwrap();
        book.save_state();
        let before = book.snapshot();

        let edited = patient("Alice Pauline", "80000000", "New address");
        book.set_patient(&alice(), edited).unwrap();
        book.save_state();

        book.undo().unwrap();
        assert_eq!(book.snapshot(), before);
        assert_eq!(book.patients()[0].as_ref(), &alice());
    }

    #[test]
    fn filtered_patients_follow_filter() {
        let mut book = typical_book();
        book.update_filter(PatientFilter::name_keywords(["meier"]));
        let shown = book.filtered_patients();
        assert_eq!(shown.len(), 2);
        assert!(shown.iter().all(|p| p.name().as_str().ends_with("Meier")));

        book.show_all();
        assert_eq!(book.filtered_patients().len(), book.patients().len());
        assert!(book.has_patient(&carl()));
    }
}
