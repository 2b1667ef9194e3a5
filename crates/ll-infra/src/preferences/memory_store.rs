use std::collections::HashMap;
use std::sync::Mutex;

use ll_core::ports::{PreferenceStoreError, PreferenceStorePort};
use ll_core::profile::{PreferenceKey, PreferenceValue};

/// Process-local preference store. Nothing survives the process.
#[derive(Default)]
pub struct InMemoryPreferenceStore {
    entries: Mutex<HashMap<PreferenceKey, PreferenceValue>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store.
    pub fn with_entries(entries: impl IntoIterator<Item = (PreferenceKey, PreferenceValue)>) -> Self {
        Self {
            entries: Mutex::new(entries.into_iter().collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PreferenceStorePort for InMemoryPreferenceStore {
    fn get(&self, key: PreferenceKey) -> Result<Option<PreferenceValue>, PreferenceStoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| PreferenceStoreError::Storage("preference lock poisoned".into()))?;
        Ok(entries.get(&key).cloned())
    }

    fn set(&self, key: PreferenceKey, value: PreferenceValue) -> Result<(), PreferenceStoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| PreferenceStoreError::Storage("preference lock poisoned".into()))?;
        entries.insert(key, value);
        Ok(())
    }
}
