//! Pattern rule - rejects repeated adjacent characters.

use secrecy::{ExposeSecret, SecretString};
use super::{PasswordError, RuleResult};

/// Checks the password for repeated adjacent characters.
///
/// Every position `i` in `0..=len - 3` is compared with its successor and the
/// rule fails on the first equal pair. This is stricter than a true
/// "three in a row" check: `"aab"` fails. The last pair is never compared, so
/// `"abb"` passes. Passwords shorter than three characters always pass.
///
/// # Errors
/// - `PasswordError::RepeatedCharacter` on the first equal adjacent pair
pub fn no_triple_repeat(password: &SecretString) -> RuleResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() < 3 {
        return Ok(());
    }

    // pairs starting at 0..=len-3; the final pair is never compared
    let repeated = chars
        .windows(2)
        .take(chars.len() - 2)
        .any(|w| w[0] == w[1]);

    if repeated {
        return Err(PasswordError::RepeatedCharacter);
    }
    Ok(())
}
