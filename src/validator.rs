//! Password validator - ordered rule evaluation and strength classification.

use secrecy::{ExposeSecret, SecretString};

use crate::rules::{
    has_digit, has_lowercase, has_min_length, has_special_char, has_uppercase, no_triple_repeat,
    PasswordError, RuleResult, MIN_LENGTH,
};

/// Outcome of [`is_valid_password`]: `Ok(())` when valid, otherwise the
/// first failing rule.
pub type ValidationOutcome = Result<(), PasswordError>;

/// Passwords at least this long are classified as [`Strength::Strong`].
pub const STRONG_LENGTH: usize = 10;

/// Strength of a password that already passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Weak,
    Strong,
}

// Evaluation order. The first failing rule is the one reported.
const RULES: [(&str, fn(&SecretString) -> RuleResult); 6] = [
    ("length", has_min_length),
    ("digit", has_digit),
    ("uppercase", has_uppercase),
    ("lowercase", has_lowercase),
    ("special", has_special_char),
    ("repeat", no_triple_repeat),
];

/// Validates a password against every rule, stopping at the first failure.
///
/// Rules run in this order: length, digit, uppercase, lowercase, special
/// character, repeated characters. A password missing both a digit and an
/// uppercase letter therefore reports `MissingDigit`.
///
/// # Example
///
/// ```rust
/// use pwd_checker::{is_valid_password, PasswordError};
/// use secrecy::SecretString;
///
/// let good = SecretString::new("Abc123!@".to_string().into());
/// assert!(is_valid_password(&good).is_ok());
///
/// let short = SecretString::new("ab".to_string().into());
/// assert_eq!(is_valid_password(&short), Err(PasswordError::TooShort));
/// ```
pub fn is_valid_password(password: &SecretString) -> ValidationOutcome {
    for (rule_name, rule_fn) in RULES {
        if let Err(reason) = rule_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!("password rejected by rule: {}", rule_name);
            #[cfg(not(feature = "tracing"))]
            let _ = rule_name;
            return Err(reason);
        }
    }
    Ok(())
}

/// Classifies a valid password as weak (6 to 9 characters) or strong.
///
/// # Errors
///
/// Returns the validation failure if the password is not valid, since
/// strength is only defined for valid passwords.
pub fn classify_strength(password: &SecretString) -> Result<Strength, PasswordError> {
    is_valid_password(password)?;
    if password.expose_secret().chars().count() < STRONG_LENGTH {
        return Ok(Strength::Weak);
    }
    Ok(Strength::Strong)
}

/// Fails with `PasswordError::TooWeak` when the password is 6 to 9 characters long.
///
/// Does not validate the password; run [`is_valid_password`] first.
pub fn check_not_weak(password: &SecretString) -> RuleResult {
    let len = password.expose_secret().chars().count();
    if (MIN_LENGTH..STRONG_LENGTH).contains(&len) {
        return Err(PasswordError::TooWeak);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_valid_password() {
        assert_eq!(is_valid_password(&secret("Abc123!@")), Ok(()));
    }

    #[test]
    fn test_short_password_always_too_short() {
        for pwd in ["", "a", "ab", "aaaaa", "A1!aa", "Ab1!x"] {
            assert_eq!(
                is_valid_password(&secret(pwd)),
                Err(PasswordError::TooShort),
                "password {:?}",
                pwd
            );
        }
    }

    #[test]
    fn test_missing_digit_reported_before_other_rules() {
        assert_eq!(
            is_valid_password(&secret("Abcdef!@")),
            Err(PasswordError::MissingDigit)
        );
        // missing digit and uppercase
        assert_eq!(
            is_valid_password(&secret("abcdef!@")),
            Err(PasswordError::MissingDigit)
        );
    }

    #[test]
    fn test_each_rule_in_order() {
        let cases = [
            ("abc12!@", PasswordError::MissingUppercase),
            ("ABC12!@", PasswordError::MissingLowercase),
            ("Abc123xy", PasswordError::MissingSpecialChar),
            ("Abbc123!", PasswordError::RepeatedCharacter),
        ];
        for (pwd, expected) in cases {
            assert_eq!(is_valid_password(&secret(pwd)), Err(expected), "password {:?}", pwd);
        }
    }

    #[test]
    fn test_special_char_checked_before_repeat() {
        // both rules fail, special char wins
        assert_eq!(
            is_valid_password(&secret("Aabb1234")),
            Err(PasswordError::MissingSpecialChar)
        );
    }

    #[test]
    fn test_validation_is_repeatable() {
        let pwd = secret("Abcc12!x");
        let first = is_valid_password(&pwd);
        assert_eq!(first, Err(PasswordError::RepeatedCharacter));
        assert_eq!(is_valid_password(&pwd), first);
    }

    #[test]
    fn test_classify_strength() {
        assert_eq!(classify_strength(&secret("Abc123!@")), Ok(Strength::Weak));
        assert_eq!(classify_strength(&secret("Abcdef123!@")), Ok(Strength::Strong));
    }

    #[test]
    fn test_classify_strength_boundaries() {
        assert_eq!(classify_strength(&secret("Ab1!cd")), Ok(Strength::Weak));
        assert_eq!(classify_strength(&secret("Ab1!cdefg")), Ok(Strength::Weak));
        assert_eq!(classify_strength(&secret("Ab1!cdefgh")), Ok(Strength::Strong));
    }

    #[test]
    fn test_classify_strength_invalid_password() {
        assert_eq!(
            classify_strength(&secret("abcdefghijkl")),
            Err(PasswordError::MissingDigit)
        );
    }

    #[test]
    fn test_check_not_weak() {
        assert_eq!(check_not_weak(&secret("Abc123!@")), Err(PasswordError::TooWeak));
        assert_eq!(check_not_weak(&secret("Ab1!cd")), Err(PasswordError::TooWeak));
        assert_eq!(check_not_weak(&secret("Abcdef123!@")), Ok(()));
        // below the valid length range
        assert_eq!(check_not_weak(&secret("Ab1!")), Ok(()));
    }
}
