//! User profile domain models
//!
//! The profile is never stored as a record. It lives in the preference store
//! as nine discrete entries, one per [`PreferenceKey`].

mod keys;
mod model;
mod session;

pub use keys::{PreferenceKey, PreferenceValue};
pub use model::{NotificationPreferences, UserProfile};
pub use session::SessionStatus;
