use super::format::StoredBook;
use super::DataStore;
use crate::error::{CarebookError, Result};
use crate::model::Patient;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Stores the book as one pretty-printed JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CarebookError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<Vec<Patient>>> {
        if !self.path.exists() {
            debug!("store: no data file at {}", self.path.display());
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(CarebookError::Io)?;
        let patients = StoredBook::from_json(&content)?.into_patients()?;
        debug!(
            "store: loaded {} patients from {}",
            patients.len(),
            self.path.display()
        );
        Ok(Some(patients))
    }

    fn save(&mut self, patients: &[Arc<Patient>]) -> Result<()> {
        self.ensure_parent()?;
        let content = StoredBook::from_patients(patients).to_json()?;
        fs::write(&self.path, content).map_err(CarebookError::Io)?;
        debug!(
            "store: saved {} patients to {}",
            patients.len(),
            self.path.display()
        );
        Ok(())
    }
}
