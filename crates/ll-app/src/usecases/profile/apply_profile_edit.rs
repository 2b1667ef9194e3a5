use std::sync::Arc;

use anyhow::{Context, Result};
use ll_core::ports::PreferenceStorePort;
use ll_core::profile::{PreferenceKey, UserProfile};
use tracing::{info, info_span};

/// Use case for saving the profile editor.
///
/// Persists all nine entries, including the phone number and the
/// notification toggles at whatever values the editor holds.
pub struct ApplyProfileEdit {
    preferences: Arc<dyn PreferenceStorePort>,
}

impl ApplyProfileEdit {
    pub fn new(preferences: Arc<dyn PreferenceStorePort>) -> Self {
        Self { preferences }
    }

    pub fn execute(&self, profile: &UserProfile) -> Result<()> {
        let _span = info_span!("usecase.apply_profile_edit.execute").entered();

        profile.draft().validate()?;

        let entries = PreferenceKey::ALL
            .into_iter()
            .map(|key| (key, profile.value_of(key)))
            .collect();

        self.preferences
            .set_many(entries)
            .context("persist profile edit")?;

        info!(
            notifications = ?profile.notifications,
            "profile updated"
        );
        Ok(())
    }
}
