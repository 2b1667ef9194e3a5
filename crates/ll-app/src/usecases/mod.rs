pub mod menu;
pub mod profile;

pub use menu::{QueryMenu, SeedMenu, SeedOutcome};
pub use profile::{ApplyLogout, ApplyProfileEdit, ApplyRegistration, GetSessionStatus, LoadPreferences};
