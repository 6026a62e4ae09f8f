use crate::error::{CarebookError, Result};
use crate::model::Patient;
use std::sync::Arc;

/// The book's patient content at one point in time.
///
/// Patients are immutable, so a snapshot shares them with the live list
/// instead of deep-copying; cloning a snapshot only bumps reference counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    patients: Vec<Arc<Patient>>,
}

impl Snapshot {
    pub fn new(patients: Vec<Arc<Patient>>) -> Self {
        Self { patients }
    }

    pub fn patients(&self) -> &[Arc<Patient>] {
        &self.patients
    }
}

/// Linear undo/redo log.
///
/// Holds every saved snapshot and a cursor at the current one. Saving while
/// the cursor is behind the tail drops the undone snapshots first. Once the
/// first snapshot is saved the cursor is always a valid index.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, snapshot: Snapshot) {
        if !self.snapshots.is_empty() {
            self.snapshots.truncate(self.cursor + 1);
        }
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn undo(&mut self) -> Result<&Snapshot> {
        if !self.can_undo() {
            return Err(CarebookError::UndoUnavailable);
        }
        self.cursor -= 1;
        Ok(&self.snapshots[self.cursor])
    }

    pub fn redo(&mut self) -> Result<&Snapshot> {
        if !self.can_redo() {
            return Err(CarebookError::RedoUnavailable);
        }
        self.cursor += 1;
        Ok(&self.snapshots[self.cursor])
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the current snapshot, `None` before the first save.
    pub fn cursor(&self) -> Option<usize> {
        if self.snapshots.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }
}
