use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Text fields submitted by the onboarding or profile form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl ProfileDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_user_input(
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone_number,
        )
    }
}

/// Validate a profile form. Only the first failing check is reported.
pub fn validate_user_input(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone_number: &str,
) -> Result<(), ValidationError> {
    if first_name.is_empty() || last_name.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingField);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_phone_number(phone_number) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

/// Syntactic sanity check: `local@domain` with a `.` in the domain part.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && domain.contains('.')
        }
        _ => false,
    }
}

/// Empty, or `+` followed by one or more ASCII digits.
pub fn is_valid_phone_number(phone_number: &str) -> bool {
    if phone_number.is_empty() {
        return true;
    }
    phone_number
        .strip_prefix('+')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}
