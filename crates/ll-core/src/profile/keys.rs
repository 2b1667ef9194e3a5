use serde::{Deserialize, Serialize};

/// Well-known preference store keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    OrderStatuses,
    PasswordChanges,
    SpecialOffers,
    Newsletter,
    IsLoggedIn,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 9] = [
        PreferenceKey::FirstName,
        PreferenceKey::LastName,
        PreferenceKey::Email,
        PreferenceKey::PhoneNumber,
        PreferenceKey::OrderStatuses,
        PreferenceKey::PasswordChanges,
        PreferenceKey::SpecialOffers,
        PreferenceKey::Newsletter,
        PreferenceKey::IsLoggedIn,
    ];

    /// Storage name of the key. These names are persisted and must not change.
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::FirstName => "first_name_preference",
            PreferenceKey::LastName => "last_name_preference",
            PreferenceKey::Email => "email_preference",
            PreferenceKey::PhoneNumber => "phone_number_preference",
            PreferenceKey::OrderStatuses => "order_statuses_preference",
            PreferenceKey::PasswordChanges => "password_updates_preference",
            PreferenceKey::SpecialOffers => "special_offers_preference",
            PreferenceKey::Newsletter => "newsletter_subscription_preference",
            PreferenceKey::IsLoggedIn => "logged_in_status",
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(
            self,
            PreferenceKey::OrderStatuses
                | PreferenceKey::PasswordChanges
                | PreferenceKey::SpecialOffers
                | PreferenceKey::Newsletter
                | PreferenceKey::IsLoggedIn
        )
    }

    /// Value a key reads as when it has never been written.
    pub fn zero_value(&self) -> PreferenceValue {
        if self.is_flag() {
            PreferenceValue::Bool(false)
        } else {
            PreferenceValue::Text(String::new())
        }
    }
}

impl std::fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primitive value held by the preference store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Bool(bool),
    Text(String),
}

impl PreferenceValue {
    /// Text content, or empty for anything else.
    pub fn into_text(self) -> String {
        match self {
            PreferenceValue::Text(s) => s,
            PreferenceValue::Bool(_) => String::new(),
        }
    }

    /// Flag content, or `false` for anything else.
    pub fn as_bool(&self) -> bool {
        matches!(self, PreferenceValue::Bool(true))
    }
}

impl From<&str> for PreferenceValue {
    fn from(value: &str) -> Self {
        PreferenceValue::Text(value.to_string())
    }
}

impl From<String> for PreferenceValue {
    fn from(value: String) -> Self {
        PreferenceValue::Text(value)
    }
}

impl From<bool> for PreferenceValue {
    fn from(value: bool) -> Self {
        PreferenceValue::Bool(value)
    }
}
