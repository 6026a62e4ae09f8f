//! Typical patients for tests.

use crate::book::PatientBook;
use crate::model::{Address, Name, Note, NoteSet, Patient, Phone, Tags};
use chrono::{DateTime, NaiveDateTime, Utc};

pub fn timestamp(iso: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S")
        .expect("fixture timestamp")
        .and_utc()
}

/// A patient without tags or notes.
pub fn patient(name: &str, phone: &str, address: &str) -> Patient {
    build(name, phone, address, &[], vec![])
}

pub fn build(
    name: &str,
    phone: &str,
    address: &str,
    tags: &[&str],
    notes: Vec<(&str, &str, &str)>,
) -> Patient {
    let notes: NoteSet = notes
        .into_iter()
        .map(|(title, content, at)| Note::restore(title, content, timestamp(at)).unwrap())
        .collect();
    Patient::with_all(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        Address::parse(address).unwrap(),
        Tags::parse(tags.iter().copied()).unwrap(),
        notes,
    )
}

pub fn alice() -> Patient {
    build(
        "Alice Pauline",
        "94351253",
        "123, Jurong West Ave 6, #08-111",
        &["friends"],
        vec![(
            "4th Session with Alice",
            "Discussed progress",
            "2023-03-11T12:00:00",
        )],
    )
}

pub fn benson() -> Patient {
    build(
        "Benson Meier",
        "98765432",
        "311, Clementi Ave 2, #02-25",
        &["owesMoney", "friends"],
        vec![(
            "Intake assessment",
            "Reports poor sleep",
            "2025-03-11T12:00:00",
        )],
    )
}

pub fn carl() -> Patient {
    patient("Carl Kurz", "95352563", "wall street")
}

pub fn daniel() -> Patient {
    build(
        "Daniel Meier",
        "87652533",
        "10th street",
        &["friends"],
        vec![
            ("Session 1", "Initial consult", "2025-03-12T12:00:00"),
            ("Session 2", "Follow-up on sleep", "2025-03-19T12:00:00"),
            ("Medication", "Started melatonin", "2025-03-19T12:30:00"),
        ],
    )
}

pub fn elle() -> Patient {
    patient("Elle Meyer", "9482224", "michegan ave")
}

pub fn fiona() -> Patient {
    patient("Fiona Kunz", "9482427", "little tokyo")
}

pub fn george() -> Patient {
    patient("George Best", "9482442", "4th street")
}

pub fn typical_patients() -> Vec<Patient> {
    vec![alice(), benson(), carl(), daniel(), elle(), fiona(), george()]
}

pub fn typical_book() -> PatientBook {
    PatientBook::with_patients(typical_patients()).expect("typical patients are unique")
}
