//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and infrastructure
//! implementations, so the view-models can run against a real file/SQLite
//! backend or an in-memory fake.
//!
//! All ports are synchronous: every operation completes immediately on the
//! caller's thread.

pub mod app_dirs;
pub mod errors;
pub mod menu_repository;
pub mod preferences;


pub use app_dirs::AppDirsPort;
pub use errors::{AppDirsError, MenuRepositoryError, PreferenceStoreError};
pub use menu_repository::MenuRepositoryPort;
pub use preferences::PreferenceStorePort;
