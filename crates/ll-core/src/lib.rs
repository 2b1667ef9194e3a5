//! # ll-core
//!
//! Core domain models and business rules for Little Lemon.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod app_dirs;
pub mod config;
pub mod menu;
pub mod ports;
pub mod profile;
pub mod validation;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use menu::{Category, Dish, MenuFilter, MenuPredicate, SortSpec};
pub use profile::{NotificationPreferences, PreferenceKey, PreferenceValue, SessionStatus, UserProfile};
pub use validation::{validate_user_input, ProfileDraft, ValidationError, ValidationResult};
