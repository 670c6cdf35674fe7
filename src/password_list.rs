//! Password list loading
//!
//! Reads candidate passwords, one per line, from a text file.

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_LIST_PATH: &str = "./passwords.txt";
const LIST_EXTENSION: &str = ".txt";

#[derive(Error, Debug)]
pub enum PasswordListError {
    #[error("Password list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read password list file: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Returns the password list file path.
///
/// Priority:
/// 1. Environment variable `PWD_LIST_PATH`
/// 2. Default path `./passwords.txt`
pub fn get_password_list_path() -> PathBuf {
    std::env::var("PWD_LIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LIST_PATH))
}

/// Loads the password list from the configured path.
///
/// # Environment Variable
///
/// Set `PWD_LIST_PATH` to specify a custom file location.
/// If not set, defaults to `./passwords.txt`.
///
/// # Errors
///
/// See [`load_password_list_from_path`].
pub fn load_password_list() -> Result<Vec<SecretString>, PasswordListError> {
    load_password_list_from_path(get_password_list_path())
}

/// Loads the password list from a specific file.
///
/// A `.txt` suffix is appended when the name does not already contain one,
/// so `"passwords"` and `"passwords.txt"` refer to the same file.
///
/// The whole file is read before any password is returned: on error no
/// partial list is produced.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
pub fn load_password_list_from_path<P: AsRef<Path>>(
    name: P,
) -> Result<Vec<SecretString>, PasswordListError> {
    let path = resolve_list_path(name.as_ref());

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Password list loading FAILED: FileNotFound {:?}", path);
        return Err(PasswordListError::FileNotFound(path));
    }

    let content = std::fs::read_to_string(&path)?;
    let passwords = parse_password_list(&content);

    #[cfg(feature = "tracing")]
    tracing::info!("Password list loaded: {} passwords from {:?}", passwords.len(), path);

    Ok(passwords)
}

/// Async version of [`load_password_list_from_path`].
#[cfg(feature = "async")]
pub async fn load_password_list_async<P: AsRef<Path>>(
    name: P,
) -> Result<Vec<SecretString>, PasswordListError> {
    let path = resolve_list_path(name.as_ref());

    if !tokio::fs::try_exists(&path).await? {
        #[cfg(feature = "tracing")]
        tracing::error!("Password list loading FAILED: FileNotFound {:?}", path);
        return Err(PasswordListError::FileNotFound(path));
    }

    let content = tokio::fs::read_to_string(&path).await?;
    Ok(parse_password_list(&content))
}

fn resolve_list_path(name: &Path) -> PathBuf {
    if name.to_string_lossy().contains(LIST_EXTENSION) {
        return name.to_path_buf();
    }
    let mut with_ext = name.as_os_str().to_owned();
    with_ext.push(LIST_EXTENSION);
    PathBuf::from(with_ext)
}

// One password per line, line terminators stripped. Trailing blank lines
// are dropped; interior lines are kept verbatim.
fn parse_password_list(content: &str) -> Vec<SecretString> {
    let mut lines: Vec<&str> = content.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    lines
        .into_iter()
        .map(|l| SecretString::new(l.into()))
        .collect()
}
