//! Batch scanner - validates a list of passwords and collects the failures.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::PasswordError;
use crate::validator::is_valid_password;

/// A password rejected during a batch scan, with the first failing reason.
#[derive(Debug)]
pub struct InvalidPassword {
    pub password: SecretString,
    pub reason: PasswordError,
}

impl InvalidPassword {
    /// Returns the human-readable reason message.
    pub fn message(&self) -> String {
        self.reason.message()
    }

    /// Formats the entry as `"<password> - <message>"`.
    ///
    /// The result exposes the password in clear text.
    pub fn to_report_line(&self) -> String {
        format!("{} - {}", self.password.expose_secret(), self.reason)
    }
}

/// Invalid entries of a scan, in input order.
pub type BatchResult = Vec<InvalidPassword>;

/// Validates every password and returns the invalid ones.
///
/// Each password is evaluated independently: a failure never stops the scan.
/// Valid passwords are omitted and the output keeps the input order.
pub fn scan_batch(passwords: &[SecretString]) -> BatchResult {
    let invalid: BatchResult = passwords
        .iter()
        .filter_map(scan_one)
        .collect();

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Batch scanned: {} passwords, {} invalid",
        passwords.len(),
        invalid.len()
    );

    invalid
}

fn scan_one(password: &SecretString) -> Option<InvalidPassword> {
    is_valid_password(password)
        .err()
        .map(|reason| InvalidPassword {
            password: SecretString::new(password.expose_secret().into()),
            reason,
        })
}

/// Async version that sends the batch result via channel.
///
/// The token is checked before each password. A cancelled scan sends
/// nothing, so the receiver never observes a partial batch.
#[cfg(feature = "async")]
pub async fn scan_batch_tx(
    passwords: Vec<SecretString>,
    token: CancellationToken,
    tx: mpsc::Sender<BatchResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("batch scan is about to start...");

    let mut invalid = BatchResult::new();
    for password in &passwords {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Batch scan cancelled, discarding partial result");
            return;
        }
        if let Some(entry) = scan_one(password) {
            invalid.push(entry);
        }
        tokio::task::yield_now().await;
    }

    if let Err(e) = tx.send(invalid).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send batch scan result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
