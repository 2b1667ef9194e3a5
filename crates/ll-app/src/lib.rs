//! Little Lemon application layer
//!
//! Use cases over the core ports, plus the view-models a UI binds to.

pub mod app_paths;
pub mod deps;
pub mod observable;
pub mod usecases;
pub mod view_models;

pub use app_paths::AppPaths;
pub use deps::AppDeps;
pub use observable::Observable;
pub use view_models::{ErrorBanner, MenuViewModel, ProfileViewModel};
