//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::{PasswordError, RuleResult};

/// Minimum number of characters a valid password must have.
pub const MIN_LENGTH: usize = 6;

/// Checks if the password meets the minimum length requirement.
///
/// # Errors
/// - `PasswordError::TooShort` if the password has fewer than [`MIN_LENGTH`] characters
pub fn has_min_length(password: &SecretString) -> RuleResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Err(PasswordError::TooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_too_short() {
        let pwd = SecretString::new("Ab1!x".to_string().into());
        assert_eq!(has_min_length(&pwd), Err(PasswordError::TooShort));
    }

    #[test]
    fn test_length_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert_eq!(has_min_length(&pwd), Err(PasswordError::TooShort));
    }

    #[test]
    fn test_length_exactly_minimum() {
        let pwd = SecretString::new("abcdef".to_string().into());
        assert_eq!(has_min_length(&pwd), Ok(()));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // five characters, ten bytes
        let pwd = SecretString::new("ééééé".to_string().into());
        assert_eq!(has_min_length(&pwd), Err(PasswordError::TooShort));
    }
}
