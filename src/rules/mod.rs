//! Password validation rules
//!
//! Each rule checks a single property of the password and reports the
//! matching [`PasswordError`] when the property does not hold.

mod length;
mod pattern;
mod variety;

pub use length::{has_min_length, MIN_LENGTH};
pub use pattern::no_triple_repeat;
pub use variety::{has_digit, has_lowercase, has_special_char, has_uppercase, SPECIAL_CHARS};

use thiserror::Error;

/// Reason a password was rejected.
///
/// The display text of each variant is the human-readable message reported
/// to callers and written into batch reports.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordError {
    #[error("The password must be at least 6 characters long")]
    TooShort,
    #[error("The password must contain at least one digit")]
    MissingDigit,
    #[error("The password must contain at least one uppercase alphabetic character")]
    MissingUppercase,
    #[error("The password must contain at least one lowercase alphabetic character")]
    MissingLowercase,
    #[error("The password cannot contain more than two of the same character in sequence")]
    RepeatedCharacter,
    #[error("The password must contain at least one special character")]
    MissingSpecialChar,
    #[error("The password is OK but weak - it contains fewer than 10 characters.")]
    TooWeak,
    #[error("The passwords do not match")]
    Mismatch,
}

impl PasswordError {
    /// Returns the human-readable message for this reason.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result type for rule functions.
/// - `Ok(())` - Rule passed
/// - `Err(reason)` - Rule failed with the given reason
pub type RuleResult = Result<(), PasswordError>;
