//! Persistence of field records.
//!
//! The host owns the real storage (a database table of field definitions);
//! it plugs in through [`FieldStore`]. [`MemoryFieldStore`] keeps records in
//! memory for embedding and tests.

use rustc_hash::FxHashMap;

use crate::error::StoreError;
use crate::model::{FieldId, FieldRecord};

/// Storage of datetime field records, keyed by field id.
pub trait FieldStore {
    /// Loads a record, `Ok(None)` if none is stored under `id`.
    fn load(&self, id: &FieldId) -> Result<Option<FieldRecord>, StoreError>;

    /// Inserts or replaces the record stored under `id`.
    fn save(&mut self, id: FieldId, record: FieldRecord) -> Result<(), StoreError>;

    /// Removes the record stored under `id`, returning it.
    fn delete(&mut self, id: &FieldId) -> Result<Option<FieldRecord>, StoreError>;

    /// Loads a record that must exist.
    fn load_required(&self, id: &FieldId) -> Result<FieldRecord, StoreError> {
        self.load(id)?.ok_or(StoreError::NotFound { id: *id })
    }
}

/// In-memory [`FieldStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryFieldStore {
    records: FxHashMap<FieldId, FieldRecord>,
}

impl MemoryFieldStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no record is stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FieldStore for MemoryFieldStore {
    fn load(&self, id: &FieldId) -> Result<Option<FieldRecord>, StoreError> {
        Ok(self.records.get(id).cloned())
    }

    fn save(&mut self, id: FieldId, record: FieldRecord) -> Result<(), StoreError> {
        self.records.insert(id, record);
        Ok(())
    }

    fn delete(&mut self, id: &FieldId) -> Result<Option<FieldRecord>, StoreError> {
        Ok(self.records.remove(id))
    }
}
