//! Character variety rules - digits, uppercase, lowercase, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::{PasswordError, RuleResult};

/// Characters accepted as "special" by [`has_special_char`].
pub const SPECIAL_CHARS: &str = r#"!@#$%^&*()_+=-{}[]:;"'?/>.<,\|`~"#;

/// Checks that the password contains at least one ASCII digit.
pub fn has_digit(password: &SecretString) -> RuleResult {
    if password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return Ok(());
    }
    Err(PasswordError::MissingDigit)
}

/// Checks that the password contains at least one letter in `A-Z`.
pub fn has_uppercase(password: &SecretString) -> RuleResult {
    if password.expose_secret().chars().any(|c| c.is_ascii_uppercase()) {
        return Ok(());
    }
    Err(PasswordError::MissingUppercase)
}

/// Checks that the password contains at least one letter in `a-z`.
pub fn has_lowercase(password: &SecretString) -> RuleResult {
    if password.expose_secret().chars().any(|c| c.is_ascii_lowercase()) {
        return Ok(());
    }
    Err(PasswordError::MissingLowercase)
}

/// Checks that the password contains at least one character of [`SPECIAL_CHARS`].
///
/// Whitespace and non-ASCII symbols do not count.
pub fn has_special_char(password: &SecretString) -> RuleResult {
    if password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARS.contains(c))
    {
        return Ok(());
    }
    Err(PasswordError::MissingSpecialChar)
}
