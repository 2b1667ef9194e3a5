use crate::ports::errors::PreferenceStoreError;
use crate::profile::{PreferenceKey, PreferenceValue};

/// Durable key-value store for user settings and the session flag.
///
/// Reads after a write in the same call see the written value. An absent key
/// is `Ok(None)`; callers decide the zero value.
pub trait PreferenceStorePort: Send + Sync {
    fn get(&self, key: PreferenceKey) -> Result<Option<PreferenceValue>, PreferenceStoreError>;

    fn set(&self, key: PreferenceKey, value: PreferenceValue) -> Result<(), PreferenceStoreError>;

    /// Read a key, falling back to the key's zero value when absent.
    fn get_or_zero(&self, key: PreferenceKey) -> Result<PreferenceValue, PreferenceStoreError> {
        Ok(self.get(key)?.unwrap_or_else(|| key.zero_value()))
    }

    /// Write several entries. Backends that can commit a batch in one step
    /// should override this.
    fn set_many(
        &self,
        entries: Vec<(PreferenceKey, PreferenceValue)>,
    ) -> Result<(), PreferenceStoreError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}
