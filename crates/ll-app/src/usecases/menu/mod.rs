//! Menu cache use cases.

mod query_menu;
mod seed_menu;

pub use query_menu::QueryMenu;
pub use seed_menu::{SeedMenu, SeedOutcome};
