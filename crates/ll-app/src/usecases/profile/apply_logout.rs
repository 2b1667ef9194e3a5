use std::sync::Arc;

use anyhow::{Context, Result};
use ll_core::ports::PreferenceStorePort;
use ll_core::profile::PreferenceKey;
use tracing::{info, info_span};

/// Use case for logging out.
///
/// Resets every profile entry to its zero value, not just the login flag:
/// names, email, phone number and notification toggles are all wiped.
pub struct ApplyLogout {
    preferences: Arc<dyn PreferenceStorePort>,
}

impl ApplyLogout {
    pub fn new(preferences: Arc<dyn PreferenceStorePort>) -> Self {
        Self { preferences }
    }

    pub fn execute(&self) -> Result<()> {
        let _span = info_span!("usecase.apply_logout.execute").entered();

        let entries = PreferenceKey::ALL
            .into_iter()
            .map(|key| (key, key.zero_value()))
            .collect();

        self.preferences
            .set_many(entries)
            .context("persist logout")?;

        info!("user logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::{ApplyRegistration, LoadPreferences};
    use ll_core::profile::UserProfile;
    use ll_core::validation::ProfileDraft;
    use ll_infra::InMemoryPreferenceStore;

    #[test]
    fn test_logout_wipes_every_field() {
        let store = Arc::new(InMemoryPreferenceStore::with_entries([(
            PreferenceKey::PhoneNumber,
            "+15551234".into(),
        )]));
        ApplyRegistration::new(store.clone())
            .execute(&ProfileDraft::new("Ana", "Lee", "ana@lemon.com", ""))
            .unwrap();

        ApplyLogout::new(store.clone()).execute().unwrap();

        let profile = LoadPreferences::new(store).execute().unwrap();
        assert_eq!(profile, UserProfile::default());
    }

    #[test]
    fn test_logout_when_already_logged_out() {
        let store = Arc::new(InMemoryPreferenceStore::new());

        ApplyLogout::new(store.clone()).execute().unwrap();

        assert_eq!(
            store.get(PreferenceKey::IsLoggedIn).unwrap(),
            Some(false.into())
        );
        assert_eq!(store.len(), PreferenceKey::ALL.len());
    }
}
