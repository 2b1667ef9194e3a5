//! View-models bound by the onboarding, home, menu and profile screens.

mod menu;
mod profile;

pub use menu::MenuViewModel;
pub use profile::{ErrorBanner, ProfileViewModel};
