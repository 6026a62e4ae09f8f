use crate::error::{CarebookError, Result};
use crate::model::Patient;
use std::sync::Arc;

/// Patients in insertion order, never holding two with the same identity.
///
/// Duplicate detection uses [`Patient::is_same_patient`], never `==`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientList {
    patients: Vec<Arc<Patient>>,
}

impl PatientList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, patient: &Patient) -> bool {
        self.patients.iter().any(|p| p.is_same_patient(patient))
    }

    pub fn add(&mut self, patient: Patient) -> Result<()> {
        if self.contains(&patient) {
            return Err(CarebookError::DuplicatePatient);
        }
        self.patients.push(Arc::new(patient));
        Ok(())
    }

    /// Swaps `target` for `edited` in place.
    ///
    /// `target` is located by structural equality so the exact record shown
    /// to the user is replaced. `edited` may share `target`'s identity but
    /// not any other patient's.
    pub fn set_patient(&mut self, target: &Patient, edited: Patient) -> Result<()> {
        let pos = self
            .patients
            .iter()
            .position(|p| p.as_ref() == target)
            .ok_or(CarebookError::PatientNotFound)?;

        if !target.is_same_patient(&edited) && self.contains(&edited) {
            return Err(CarebookError::DuplicatePatient);
        }

        self.patients[pos] = Arc::new(edited);
        Ok(())
    }

    pub fn remove(&mut self, patient: &Patient) -> Result<()> {
        let pos = self
            .patients
            .iter()
            .position(|p| p.as_ref() == patient)
            .ok_or(CarebookError::PatientNotFound)?;
        self.patients.remove(pos);
        Ok(())
    }

    /// Replaces the whole list. Fails without touching the current contents
    /// when `patients` contains two patients with the same identity.
    pub fn set_patients(&mut self, patients: Vec<Arc<Patient>>) -> Result<()> {
        if !patients_are_unique(&patients) {
            return Err(CarebookError::DuplicatePatient);
        }
        self.patients = patients;
        Ok(())
    }

    pub fn as_slice(&self) -> &[Arc<Patient>] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

fn patients_are_unique(patients: &[Arc<Patient>]) -> bool {
    patients.iter().enumerate().all(|(i, p)| {
        patients[i + 1..]
            .iter()
            .all(|other| !p.is_same_patient(other))
    })
}
