use std::sync::Arc;

use anyhow::Result;
use ll_core::ports::PreferenceStorePort;
use ll_core::profile::{PreferenceKey, SessionStatus};

/// Reads the stored login flag. The home screen uses this to decide whether
/// the profile entry point is shown.
pub struct GetSessionStatus {
    preferences: Arc<dyn PreferenceStorePort>,
}

impl GetSessionStatus {
    pub fn new(preferences: Arc<dyn PreferenceStorePort>) -> Self {
        Self { preferences }
    }

    pub fn execute(&self) -> Result<SessionStatus> {
        let flag = self.preferences.get_or_zero(PreferenceKey::IsLoggedIn)?;
        Ok(SessionStatus::from_flag(flag.as_bool()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ll_infra::InMemoryPreferenceStore;

    #[test]
    fn test_absent_flag_is_logged_out() {
        let store = Arc::new(InMemoryPreferenceStore::new());

        assert_eq!(
            GetSessionStatus::new(store).execute().unwrap(),
            SessionStatus::LoggedOut
        );
    }

    #[test]
    fn test_stored_flag_is_logged_in() {
        let store = Arc::new(InMemoryPreferenceStore::with_entries([(
            PreferenceKey::IsLoggedIn,
            true.into(),
        )]));

        assert_eq!(
            GetSessionStatus::new(store).execute().unwrap(),
            SessionStatus::LoggedIn
        );
    }
}
