use crate::book::PatientBook;
use crate::error::Result;
use crate::index::{index_patients, DisplayIndex, DisplayPatient};
use crate::model::Patient;
use std::sync::Arc;

/// The displayed patients with their display indexes.
pub fn indexed_patients(book: &PatientBook) -> Vec<DisplayPatient> {
    index_patients(&book.filtered_patients())
}

/// Resolves `index` against the displayed list.
pub fn resolve_index(book: &PatientBook, index: DisplayIndex) -> Result<Arc<Patient>> {
    let shown = book.filtered_patients();
    index.resolve(&shown).map(Arc::clone)
}

pub fn display_patient(patient: Arc<Patient>, index: DisplayIndex) -> DisplayPatient {
    DisplayPatient { patient, index }
}
