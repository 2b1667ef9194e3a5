use serde::{Deserialize, Serialize};

use super::{PreferenceKey, PreferenceValue, SessionStatus};
use crate::validation::ProfileDraft;

/// Email notification opt-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub order_statuses: bool,
    pub password_changes: bool,
    pub special_offers: bool,
    pub newsletter: bool,
}

impl NotificationPreferences {
    /// Every notification enabled. Applied on first registration.
    pub fn all_enabled() -> Self {
        Self {
            order_statuses: true,
            password_changes: true,
            special_offers: true,
            newsletter: true,
        }
    }
}

/// Snapshot of the nine profile entries held by the preference store.
///
/// Invariant: `is_logged_in` implies first name, last name and email passed
/// validation when they were last saved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub notifications: NotificationPreferences,
    pub is_logged_in: bool,
}

impl UserProfile {
    pub fn session_status(&self) -> SessionStatus {
        SessionStatus::from_flag(self.is_logged_in)
    }

    /// The editable text fields, as submitted by a form.
    pub fn draft(&self) -> ProfileDraft {
        ProfileDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
        }
    }

    pub fn value_of(&self, key: PreferenceKey) -> PreferenceValue {
        match key {
            PreferenceKey::FirstName => self.first_name.clone().into(),
            PreferenceKey::LastName => self.last_name.clone().into(),
            PreferenceKey::Email => self.email.clone().into(),
            PreferenceKey::PhoneNumber => self.phone_number.clone().into(),
            PreferenceKey::OrderStatuses => self.notifications.order_statuses.into(),
            PreferenceKey::PasswordChanges => self.notifications.password_changes.into(),
            PreferenceKey::SpecialOffers => self.notifications.special_offers.into(),
            PreferenceKey::Newsletter => self.notifications.newsletter.into(),
            PreferenceKey::IsLoggedIn => self.is_logged_in.into(),
        }
    }

    /// Write one stored entry into the snapshot. A value of the wrong type
    /// lands as the field's zero value.
    pub fn apply_value(&mut self, key: PreferenceKey, value: PreferenceValue) {
        match key {
            PreferenceKey::FirstName => self.first_name = value.into_text(),
            PreferenceKey::LastName => self.last_name = value.into_text(),
            PreferenceKey::Email => self.email = value.into_text(),
            PreferenceKey::PhoneNumber => self.phone_number = value.into_text(),
            PreferenceKey::OrderStatuses => self.notifications.order_statuses = value.as_bool(),
            PreferenceKey::PasswordChanges => self.notifications.password_changes = value.as_bool(),
            PreferenceKey::SpecialOffers => self.notifications.special_offers = value.as_bool(),
            PreferenceKey::Newsletter => self.notifications.newsletter = value.as_bool(),
            PreferenceKey::IsLoggedIn => self.is_logged_in = value.as_bool(),
        }
    }
}
