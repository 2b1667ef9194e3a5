//! File-based preference store
//!
//! Persists every preference entry as one JSON object keyed by the storage
//! name of the key. A missing or empty file is an empty store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use ll_core::ports::{PreferenceStoreError, PreferenceStorePort};
use ll_core::profile::{PreferenceKey, PreferenceValue};
use tracing::debug;

pub const DEFAULT_PREFERENCES_FILE: &str = "preferences.json";

type Entries = BTreeMap<String, PreferenceValue>;

pub struct FilePreferenceStore {
    path: PathBuf,
    // Serialises read-modify-write cycles within the process.
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store with the default file name inside `base_dir`.
    pub fn with_defaults(base_dir: impl AsRef<Path>) -> Self {
        Self::new(base_dir.as_ref().join(DEFAULT_PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, PreferenceStoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(PreferenceStoreError::Storage(format!(
                    "read preferences failed: {}: {e}",
                    self.path.display()
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            PreferenceStoreError::Corrupt(format!("{}: {e}", self.path.display()))
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), PreferenceStoreError> {
        serde_json::to_string_pretty(entries)
            .context("serialize preferences failed")
            .and_then(|content| self.atomic_write(&content))
            .map_err(|e| PreferenceStoreError::Storage(format!("{e:#}")))
    }

    /// Write to a sibling temp file, then rename over the target, so the file
    /// holds either the previous or the new contents.
    fn atomic_write(&self, content: &str) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("create preferences dir failed: {}", dir.display()))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("write temp preferences failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "rename temp preferences to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }

    fn update(
        &self,
        entries: Vec<(PreferenceKey, PreferenceValue)>,
    ) -> Result<(), PreferenceStoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| PreferenceStoreError::Storage("preference lock poisoned".into()))?;

        let mut stored = self.read_entries()?;
        for (key, value) in entries {
            stored.insert(key.as_str().to_string(), value);
        }
        self.write_entries(&stored)?;

        debug!(path = %self.path.display(), "preferences written");
        Ok(())
    }
}

impl PreferenceStorePort for FilePreferenceStore {
    fn get(&self, key: PreferenceKey) -> Result<Option<PreferenceValue>, PreferenceStoreError> {
        Ok(self.read_entries()?.remove(key.as_str()))
    }

    fn set(&self, key: PreferenceKey, value: PreferenceValue) -> Result<(), PreferenceStoreError> {
        self.update(vec![(key, value)])
    }

    /// One file write for the whole batch.
    fn set_many(
        &self,
        entries: Vec<(PreferenceKey, PreferenceValue)>,
    ) -> Result<(), PreferenceStoreError> {
        self.update(entries)
    }
}
