mod file_store;
mod memory_store;

pub use file_store::{FilePreferenceStore, DEFAULT_PREFERENCES_FILE};
pub use memory_store::InMemoryPreferenceStore;
