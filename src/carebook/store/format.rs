//! Serialized shape of the patient book.

use crate::error::{CarebookError, Result};
use crate::model::{Address, Name, Note, NoteSet, Patient, Phone, Tags};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoredBook {
    #[serde(default)]
    pub patients: Vec<StoredPatient>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoredPatient {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: Vec<StoredNote>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredNote {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl StoredBook {
    pub fn from_patients(patients: &[Arc<Patient>]) -> Self {
        Self {
            patients: patients
                .iter()
                .map(|p| StoredPatient::from(p.as_ref()))
                .collect(),
        }
    }

    /// Validates every record and rejects repeated identities.
    pub fn into_patients(self) -> Result<Vec<Patient>> {
        let mut patients: Vec<Patient> = Vec::with_capacity(self.patients.len());
        for stored in self.patients {
            let patient = stored.into_patient()?;
            if patients.iter().any(|p| p.is_same_patient(&patient)) {
                return Err(CarebookError::DuplicatePatient);
            }
            patients.push(patient);
        }
        Ok(patients)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&Patient> for StoredPatient {
    fn from(patient: &Patient) -> Self {
        Self {
            name: patient.name().to_string(),
            phone: patient.phone().to_string(),
            address: patient.address().to_string(),
            tags: patient.tags().iter().map(|t| t.as_str().to_string()).collect(),
            notes: patient
                .notes()
                .iter()
                .map(|n| StoredNote {
                    title: n.title().to_string(),
                    content: n.content().to_string(),
                    created_at: n.created_at(),
                })
                .collect(),
        }
    }
}

impl StoredPatient {
    fn into_patient(self) -> Result<Patient> {
        let notes = self
            .notes
            .iter()
            .map(|n| Note::restore(&n.title, &n.content, n.created_at))
            .collect::<Result<NoteSet>>()?;

        Ok(Patient::with_all(
            Name::parse(&self.name)?,
            Phone::parse(&self.phone)?,
            Address::parse(&self.address)?,
            Tags::parse(&self.tags)?,
            notes,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{alice, daniel, typical_patients};

    #[test]
    fn round_trip_preserves_every_field() {
        let patients: Vec<Arc<Patient>> = typical_patients().into_iter().map(Arc::new).collect();
        let json = StoredBook::from_patients(&patients).to_json().unwrap();

        let loaded = StoredBook::from_json(&json).unwrap().into_patients().unwrap();
        let expected: Vec<Patient> = typical_patients();
        assert_eq!(loaded, expected);
    }

    #[test]
    fn note_keys_are_camel_case() {
        let json = StoredBook::from_patients(&[Arc::new(alice())]).to_json().unwrap();
        assert!(json.contains("\"createdAt\": \"2023-03-11T12:00:00Z\""));
        assert!(json.contains("\"tags\": [\n        \"friends\"\n      ]"));
    }

    #[test]
    fn sub_second_timestamps_survive() {
        let note = Note::restore(
            "Precise",
            "content",
            DateTime::parse_from_rfc3339("2025-01-02T03:04:05.123456789Z")
                .unwrap()
                .with_timezone(&Utc),
        )
        .unwrap();
        let mut notes = NoteSet::new();
        notes.insert(note.clone());
        let patient = Arc::new(daniel().with_notes(notes));

        let json = StoredBook::from_patients(&[patient]).to_json().unwrap();
        let loaded = StoredBook::from_json(&json).unwrap().into_patients().unwrap();
        assert_eq!(loaded[0].notes().to_vec(), vec![note]);
    }

    #[test]
    fn invalid_records_are_rejected() {
        let bad_phone = r#"{"patients":[{"name":"Amy","phone":"abc","address":"x"}]}"#;
        assert!(matches!(
            StoredBook::from_json(bad_phone).unwrap().into_patients(),
            Err(CarebookError::Validation(_))
        ));

        let blank_note = r#"{"patients":[{"name":"Amy","phone":"123","address":"x",
            "notes":[{"title":" ","content":"c","createdAt":"2025-01-01T00:00:00Z"}]}]}"#;
        assert!(StoredBook::from_json(blank_note)
            .unwrap()
            .into_patients()
            .is_err());
    }

    #[test]
    fn duplicate_patients_are_rejected() {
        let json = r#"{"patients":[
            {"name":"Amy","phone":"123","address":"x"},
            {"name":"Amy","phone":"456","address":"y"}]}"#;
        assert!(matches!(
            StoredBook::from_json(json).unwrap().into_patients(),
            Err(CarebookError::DuplicatePatient)
        ));
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let json = r#"{"patients":[{"name":"Amy","phone":"123","address":"x"}]}"#;
        let loaded = StoredBook::from_json(json).unwrap().into_patients().unwrap();
        assert!(loaded[0].tags().is_empty());
        assert!(loaded[0].notes().is_empty());
        assert!(StoredBook::from_json("{}").unwrap().patients.is_empty());
    }
}
