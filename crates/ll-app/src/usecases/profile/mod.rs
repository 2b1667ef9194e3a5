//! Profile and session use cases over the preference store.

mod apply_logout;
mod apply_profile_edit;
mod apply_registration;
mod get_session_status;
mod load_preferences;

pub use apply_logout::ApplyLogout;
pub use apply_profile_edit::ApplyProfileEdit;
pub use apply_registration::ApplyRegistration;
pub use get_session_status::GetSessionStatus;
pub use load_preferences::LoadPreferences;
