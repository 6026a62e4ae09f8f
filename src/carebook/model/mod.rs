//! # Domain Model
//!
//! Core value types: [`Patient`] and its validated fields, [`Tags`], and the
//! chronologically ordered [`NoteSet`] of [`Note`]s.
//!
//! All types here are immutable values. Field types validate in their `parse`
//! constructors, so a `Patient` can only be assembled from values that
//! already passed validation; the patient itself does not re-check them.

pub mod note;
pub mod notes;
pub mod patient;
pub mod tags;

pub use note::Note;
pub use notes::NoteSet;
pub use patient::{Address, Name, Patient, Phone};
pub use tags::{Tag, Tags};
