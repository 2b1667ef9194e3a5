use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User input errors. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Please complete all required fields.")]
    MissingField,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number format.")]
    InvalidPhone,
}

/// Outcome of validating a profile form, consumed immediately by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: String,
    pub error: Option<ValidationError>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: String::new(),
            error: None,
        }
    }

    pub fn invalid(error: ValidationError) -> Self {
        Self {
            is_valid: false,
            error_message: error.to_string(),
            error: Some(error),
        }
    }
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => ValidationResult::valid(),
            Err(e) => ValidationResult::invalid(e),
        }
    }
}
