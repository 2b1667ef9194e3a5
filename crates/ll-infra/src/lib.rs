//! # ll-infra
//!
//! Infrastructure adapters for the Little Lemon ports: preference files,
//! the SQLite menu cache and platform directories.

pub mod db;
pub mod fs;
pub mod menu;
pub mod preferences;

pub use db::pool::{init_db_pool, DbPool};
pub use db::repositories::DieselMenuRepository;
pub use fs::DirsAppDirsAdapter;
pub use menu::{bundled_menu, InMemoryMenuRepository};
pub use preferences::{FilePreferenceStore, InMemoryPreferenceStore};
