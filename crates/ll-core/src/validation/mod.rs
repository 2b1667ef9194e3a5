//! Profile input validation
//!
//! Checks run in a fixed order and stop at the first failure:
//! required fields, then email shape, then phone shape.

mod error;
mod rules;

pub use error::{ValidationError, ValidationResult};
pub use rules::{is_valid_email, is_valid_phone_number, validate_user_input, ProfileDraft};
