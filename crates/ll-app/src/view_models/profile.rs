//! # Profile View-Model / 用户资料视图模型
//!
//! Holds the known profile, validates candidate edits and drives the
//! registration, profile edit and logout flows.
//!
//! ## Observable state / 可观察状态
//! - [`UserProfile`]: last persisted snapshot, refreshed after every write
//! - [`ErrorBanner`]: inline validation message; a new message replaces the old one

use std::sync::Arc;

use anyhow::Result;
use ll_core::ports::PreferenceStorePort;
use ll_core::profile::{NotificationPreferences, SessionStatus, UserProfile};
use ll_core::validation::{ProfileDraft, ValidationError, ValidationResult};
use tokio::sync::watch;
use tracing::debug;

use crate::deps::AppDeps;
use crate::observable::Observable;
use crate::usecases::{
    ApplyLogout, ApplyProfileEdit, ApplyRegistration, GetSessionStatus, LoadPreferences,
};

/// Inline error shown under a form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorBanner {
    pub message: String,
    pub visible: bool,
}

impl ErrorBanner {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn shown(error: ValidationError) -> Self {
        Self {
            message: error.to_string(),
            visible: true,
        }
    }
}

pub struct ProfileViewModel {
    load_preferences: LoadPreferences,
    apply_registration: ApplyRegistration,
    apply_profile_edit: ApplyProfileEdit,
    apply_logout: ApplyLogout,
    get_session_status: GetSessionStatus,
    profile: Observable<UserProfile>,
    error: Observable<ErrorBanner>,
}

impl ProfileViewModel {
    /// Build the view-model and hydrate it from the store.
    pub fn new(preferences: Arc<dyn PreferenceStorePort>) -> Result<Self> {
        let load_preferences = LoadPreferences::new(preferences.clone());
        let initial = load_preferences.execute()?;

        Ok(Self {
            load_preferences,
            apply_registration: ApplyRegistration::new(preferences.clone()),
            apply_profile_edit: ApplyProfileEdit::new(preferences.clone()),
            apply_logout: ApplyLogout::new(preferences.clone()),
            get_session_status: GetSessionStatus::new(preferences),
            profile: Observable::new(initial),
            error: Observable::default(),
        })
    }

    pub fn from_deps(deps: &AppDeps) -> Result<Self> {
        Self::new(deps.preferences.clone())
    }

    /// Check a form. A failure publishes its message to the error banner;
    /// a success hides it.
    pub fn validate_user_input(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone_number: &str,
    ) -> ValidationResult {
        let result = ValidationResult::from(ll_core::validate_user_input(
            first_name,
            last_name,
            email,
            phone_number,
        ));

        let banner = match result.error {
            Some(error) => ErrorBanner::shown(error),
            None => ErrorBanner::hidden(),
        };
        self.error.set(banner);

        result
    }

    fn validate_draft(&self, draft: &ProfileDraft) -> ValidationResult {
        self.validate_user_input(
            &draft.first_name,
            &draft.last_name,
            &draft.email,
            &draft.phone_number,
        )
    }

    /// Onboarding submit. On success the user is logged in and opted into
    /// every notification.
    pub fn register(&self, draft: &ProfileDraft) -> Result<ValidationResult> {
        let result = self.validate_draft(draft);
        if !result.is_valid {
            debug!(error = %result.error_message, "registration rejected");
            return Ok(result);
        }

        self.apply_registration.execute(draft)?;
        self.reload()?;
        Ok(result)
    }

    /// Profile editor "Save changes". The login flag is carried over from the
    /// current profile.
    pub fn save_changes(
        &self,
        draft: &ProfileDraft,
        notifications: NotificationPreferences,
    ) -> Result<ValidationResult> {
        let result = self.validate_draft(draft);
        if !result.is_valid {
            debug!(error = %result.error_message, "profile edit rejected");
            return Ok(result);
        }

        let edited = UserProfile {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            phone_number: draft.phone_number.clone(),
            notifications,
            is_logged_in: self.profile.get().is_logged_in,
        };
        self.apply_profile_edit.execute(&edited)?;
        self.reload()?;
        Ok(result)
    }

    /// Profile editor "Discard changes": the last persisted profile, for the
    /// editor to reset its fields to. Hides any pending error.
    pub fn discard_changes(&self) -> UserProfile {
        self.error.set(ErrorBanner::hidden());
        self.profile.get()
    }

    pub fn logout(&self) -> Result<()> {
        self.apply_logout.execute()?;
        self.error.set(ErrorBanner::hidden());
        self.reload()?;
        Ok(())
    }

    /// Re-read the store and publish the result.
    pub fn reload(&self) -> Result<UserProfile> {
        let profile = self.load_preferences.execute()?;
        self.profile.set(profile.clone());
        Ok(profile)
    }

    pub fn session_status(&self) -> Result<SessionStatus> {
        self.get_session_status.execute()
    }

    pub fn profile(&self) -> UserProfile {
        self.profile.get()
    }

    pub fn error_banner(&self) -> ErrorBanner {
        self.error.get()
    }

    pub fn subscribe_profile(&self) -> watch::Receiver<UserProfile> {
        self.profile.subscribe()
    }

    pub fn subscribe_error(&self) -> watch::Receiver<ErrorBanner> {
        self.error.subscribe()
    }
}
