//! Password confirmation - compares a password with its re-typed copy.

use secrecy::{ExposeSecret, SecretString};

use crate::rules::{PasswordError, RuleResult};

/// Returns `true` if both passwords are exactly equal.
///
/// No normalization is applied: case, whitespace and Unicode form all matter.
pub fn compare_passwords(password: &SecretString, confirmation: &SecretString) -> bool {
    password.expose_secret() == confirmation.expose_secret()
}

/// Fails with `PasswordError::Mismatch` unless both passwords are exactly equal.
pub fn compare_or_fail(password: &SecretString, confirmation: &SecretString) -> RuleResult {
    if compare_passwords(password, confirmation) {
        return Ok(());
    }
    Err(PasswordError::Mismatch)
}
