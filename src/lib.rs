//! Password rule validation library
//!
//! This library checks passwords against a fixed, ordered set of rules
//! and scans batches of candidate passwords for invalid entries.
//!
//! Rules run in this order, and the first failure is the one reported:
//! length (at least 6), digit, uppercase, lowercase, special character,
//! repeated adjacent characters.
//!
//! # Features
//!
//! - `async` (default): Enables async list loading and channel-based batch scanning
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_LIST_PATH`: Custom path to the password list file
//!   (default: `./passwords.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_checker::{classify_strength, is_valid_password, load_password_list, scan_batch};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! match is_valid_password(&password) {
//!     Ok(()) => println!("Strength: {:?}", classify_strength(&password)),
//!     Err(reason) => println!("Invalid: {}", reason),
//! }
//!
//! let passwords = load_password_list().expect("Failed to load password list");
//! for entry in scan_batch(&passwords) {
//!     println!("{}", entry.to_report_line());
//! }
//! ```

// Internal modules
mod batch;
mod confirm;
mod password_list;
mod rules;
mod validator;

// Public API
pub use batch::{scan_batch, BatchResult, InvalidPassword};
pub use confirm::{compare_or_fail, compare_passwords};
pub use password_list::{
    get_password_list_path, load_password_list, load_password_list_from_path, PasswordListError,
};
pub use rules::{
    has_digit, has_lowercase, has_min_length, has_special_char, has_uppercase, no_triple_repeat,
    PasswordError, RuleResult, MIN_LENGTH, SPECIAL_CHARS,
};
pub use validator::{
    check_not_weak, classify_strength, is_valid_password, Strength, ValidationOutcome,
    STRONG_LENGTH,
};

#[cfg(feature = "async")]
pub use batch::scan_batch_tx;

#[cfg(feature = "async")]
pub use password_list::load_password_list_async;
