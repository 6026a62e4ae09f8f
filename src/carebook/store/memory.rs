use super::format::StoredBook;
use super::DataStore;
use crate::error::Result;
use crate::model::Patient;
use std::sync::Arc;

/// Keeps the serialized book in memory. Nothing outlives the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    json: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `patients`, as if saved by an earlier session.
    pub fn with_patients(patients: Vec<Patient>) -> Result<Self> {
        let patients: Vec<Arc<Patient>> = patients.into_iter().map(Arc::new).collect();
        let mut store = Self::new();
        store.save(&patients)?;
        store.saves = 0;
        Ok(store)
    }

    /// The last saved document.
    pub fn contents(&self) -> Option<&str> {
        self.json.as_deref()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<Patient>>> {
        match &self.json {
            None => Ok(None),
            Some(json) => StoredBook::from_json(json)?.into_patients().map(Some),
        }
    }

    fn save(&mut self, patients: &[Arc<Patient>]) -> Result<()> {
        self.json = Some(StoredBook::from_patients(patients).to_json()?);
        self.saves += 1;
        Ok(())
    }
}
