use std::sync::Arc;

use anyhow::{Context, Result};
use ll_core::ports::PreferenceStorePort;
use ll_core::profile::{PreferenceKey, UserProfile};
use tracing::{debug, info_span};

/// Use case for hydrating the profile from the preference store.
///
/// ## Behavior / 行为
/// - Reads each of the nine profile keys
/// - Absent strings read as empty, absent flags as `false`
/// - No side effects beyond the reads
pub struct LoadPreferences {
    preferences: Arc<dyn PreferenceStorePort>,
}

impl LoadPreferences {
    pub fn new(preferences: Arc<dyn PreferenceStorePort>) -> Self {
        Self { preferences }
    }

    pub fn execute(&self) -> Result<UserProfile> {
        let _span = info_span!("usecase.load_preferences.execute").entered();

        let mut profile = UserProfile::default();
        for key in PreferenceKey::ALL {
            let value = self
                .preferences
                .get_or_zero(key)
                .with_context(|| format!("read preference {key}"))?;
            profile.apply_value(key, value);
        }

        debug!(
            session = ?profile.session_status(),
            "preferences loaded"
        );
        Ok(profile)
    }
}
