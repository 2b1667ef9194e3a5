use std::sync::Arc;

use anyhow::{Context, Result};
use ll_core::ports::PreferenceStorePort;
use ll_core::profile::{NotificationPreferences, PreferenceKey, PreferenceValue};
use ll_core::validation::ProfileDraft;
use tracing::{info, info_span};

/// Use case for completing onboarding.
///
/// ## Behavior / 行为
/// - Persists first name, last name and email
/// - Marks the session as logged in
/// - Opts the user into all four notification kinds
/// - Leaves the phone number untouched (only a profile edit stores it)
///
/// The draft is re-checked so that a logged-in flag is never written next
/// to invalid identity fields.
pub struct ApplyRegistration {
    preferences: Arc<dyn PreferenceStorePort>,
}

impl ApplyRegistration {
    pub fn new(preferences: Arc<dyn PreferenceStorePort>) -> Self {
        Self { preferences }
    }

    pub fn execute(&self, draft: &ProfileDraft) -> Result<()> {
        let _span = info_span!("usecase.apply_registration.execute").entered();

        draft.validate()?;

        let opt_in = NotificationPreferences::all_enabled();
        let entries: Vec<(PreferenceKey, PreferenceValue)> = vec![
            (PreferenceKey::FirstName, draft.first_name.clone().into()),
            (PreferenceKey::LastName, draft.last_name.clone().into()),
            (PreferenceKey::Email, draft.email.clone().into()),
            (PreferenceKey::IsLoggedIn, true.into()),
            (PreferenceKey::OrderStatuses, opt_in.order_statuses.into()),
            (PreferenceKey::PasswordChanges, opt_in.password_changes.into()),
            (PreferenceKey::SpecialOffers, opt_in.special_offers.into()),
            (PreferenceKey::Newsletter, opt_in.newsletter.into()),
        ];

        self.preferences
            .set_many(entries)
            .context("persist registration")?;

        info!("user registered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ll_core::validation::ValidationError;
    use ll_infra::InMemoryPreferenceStore;

    #[test]
    fn test_registration_logs_in_and_opts_in() {
        let store = Arc::new(InMemoryPreferenceStore::new());

        ApplyRegistration::new(store.clone())
            .execute(&ProfileDraft::new("Ana", "Lee", "ana@lemon.com", ""))
            .unwrap();

        assert_eq!(
            store.get(PreferenceKey::FirstName).unwrap(),
            Some("Ana".into())
        );
        assert_eq!(
            store.get(PreferenceKey::IsLoggedIn).unwrap(),
            Some(true.into())
        );
        for key in [
            PreferenceKey::OrderStatuses,
            PreferenceKey::PasswordChanges,
            PreferenceKey::SpecialOffers,
            PreferenceKey::Newsletter,
        ] {
            assert_eq!(store.get(key).unwrap(), Some(true.into()), "{key}");
        }
    }

    #[test]
    fn test_registration_does_not_store_phone_number() {
        let store = Arc::new(InMemoryPreferenceStore::new());

        ApplyRegistration::new(store.clone())
            .execute(&ProfileDraft::new("Ana", "Lee", "ana@lemon.com", "+15551234"))
            .unwrap();

        assert_eq!(store.get(PreferenceKey::PhoneNumber).unwrap(), None);
    }

    #[test]
    fn test_invalid_draft_persists_nothing() {
        let store = Arc::new(InMemoryPreferenceStore::new());

        let err = ApplyRegistration::new(store.clone())
            .execute(&ProfileDraft::new("Ana", "Lee", "ana@lemon", ""))
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::InvalidEmail)
        );
        assert!(store.is_empty());
    }
}
