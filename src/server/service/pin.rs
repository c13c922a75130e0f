//! PIN protection for the application.
//!
//! The PIN is never stored in clear text: the file at the configured path holds the
//! Base64 encoded SHA-256 hash of the PIN. Until a PIN is set the default PIN applies.

use std::path::PathBuf;

use base64::{engine::general_purpose::STANDARD, Engine};
use sha2::{Digest, Sha256};

use crate::server::error::pin::PinError;

/// PIN accepted while no PIN file exists
pub const DEFAULT_PIN: &str = "1234";

/// Minimum number of characters of a new PIN
pub const MIN_PIN_LENGTH: usize = 4;

/// Service checking and changing the application PIN.
#[derive(Clone, Debug)]
pub struct PinService {
    pin_file_path: PathBuf,
}

impl PinService {
    /// Creates a PIN service backed by the PIN file at `pin_file_path`.
    ///
    /// The file does not need to exist yet.
    pub fn new(pin_file_path: impl Into<PathBuf>) -> Self {
        Self {
            pin_file_path: pin_file_path.into(),
        }
    }

    /// Checks a PIN against the stored hash.
    ///
    /// When no PIN file exists the PIN is compared with [`DEFAULT_PIN`]. A PIN file that
    /// exists but cannot be read is logged and treated the same way, so a damaged file
    /// does not lock users out.
    ///
    /// # Arguments
    /// - `pin` - PIN entered by the user
    ///
    /// # Returns
    /// - `true` - The PIN matches
    /// - `false` - The PIN is empty or does not match
    pub async fn validate_pin(&self, pin: &str) -> bool {
        if pin.is_empty() {
            return false;
        }

        match tokio::fs::read_to_string(&self.pin_file_path).await {
            Ok(stored_hash) => hash_pin(pin) == stored_hash.trim(),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => pin == DEFAULT_PIN,
            Err(err) => {
                tracing::error!(
                    path = %self.pin_file_path.display(),
                    "Failed to read PIN file, falling back to default PIN: {}",
                    err
                );

                pin == DEFAULT_PIN
            }
        }
    }

    /// Replaces the PIN after checking the current one.
    ///
    /// # Arguments
    /// - `current_pin` - PIN currently in use
    /// - `new_pin` - PIN to store, at least [`MIN_PIN_LENGTH`] characters
    ///
    /// # Returns
    /// - `Ok(true)` - The new PIN was stored
    /// - `Ok(false)` - The new PIN is too short or the current PIN does not match
    /// - `Err(PinError::Storage)` - The PIN file could not be written
    pub async fn change_pin(&self, current_pin: &str, new_pin: &str) -> Result<bool, PinError> {
        if new_pin.chars().count() < MIN_PIN_LENGTH {
            return Ok(false);
        }

        if !self.validate_pin(current_pin).await {
            return Ok(false);
        }

        self.write_pin(new_pin).await?;

        tracing::info!("Application PIN changed");

        Ok(true)
    }

    /// Whether a PIN has been stored, as opposed to the default PIN being in effect
    pub async fn is_pin_set(&self) -> bool {
        matches!(tokio::fs::try_exists(&self.pin_file_path).await, Ok(true))
    }

    /// Stores a PIN without checking the current one, used for first time setup
    pub async fn set_initial_pin(&self, pin: &str) -> Result<(), PinError> {
        if pin.chars().count() < MIN_PIN_LENGTH {
            return Err(PinError::TooShort(MIN_PIN_LENGTH));
        }

        self.write_pin(pin).await
    }

    async fn write_pin(&self, pin: &str) -> Result<(), PinError> {
        if let Some(parent) = self.pin_file_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.pin_file_path, hash_pin(pin)).await?;

        Ok(())
    }
}

/// Base64 encoded SHA-256 hash of the UTF-8 bytes of `pin`
fn hash_pin(pin: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(pin.as_bytes());

    STANDARD.encode(hasher.finalize())
}
