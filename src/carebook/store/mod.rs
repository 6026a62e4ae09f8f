//! # Storage Layer
//!
//! The [`DataStore`] trait is how the API persists the patient book between
//! sessions. The book itself never touches storage: the API loads once at
//! startup and saves after every command that changes patient data.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file, the production backend
//! - [`memory::InMemoryStore`]: keeps the serialized JSON in memory, for tests
//!
//! Both write the same document (see [`format`]), so a test against the
//! in-memory store exercises the real serialization.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "patients": [
//!     {
//!       "name": "Alice Pauline",
//!       "phone": "94351253",
//!       "address": "123, Jurong West Ave 6",
//!       "tags": ["friends"],
//!       "notes": [
//!         { "title": "Intake", "content": "...", "createdAt": "2025-03-11T12:00:00Z" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! History is not persisted; a fresh session starts with nothing to undo.

use crate::error::Result;
use crate::model::Patient;
use std::sync::Arc;

pub mod format;
pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Reads the saved patients, or `None` when nothing was saved yet.
    /// Stored data is validated exactly like user input.
    fn load(&self) -> Result<Option<Vec<Patient>>>;

    /// Replaces the saved patients.
    fn save(&mut self, patients: &[Arc<Patient>]) -> Result<()>;
}
