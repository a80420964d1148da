use std::sync::Mutex;

use keyring::Entry;
use thiserror::Error;
use tracing::warn;

/// Service name under which the token is stored in the OS keychain
const SERVICE_NAME: &str = "attest";

/// Account name for the API bearer token entry
const TOKEN_ACCOUNT: &str = "api-token";

/// A credential write or delete failed.
#[derive(Debug, Error)]
#[error("credential store error: {0}")]
pub struct CredentialError(#[source] Box<dyn std::error::Error + Send + Sync>);

impl CredentialError {
    fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(err))
    }
}

/// Durable storage for the bearer token.
///
/// `get` never fails: a store that cannot be read means the user cannot prove
/// their identity, and callers must treat that the same as being logged out.
/// At most one token is stored at a time.
pub trait CredentialStore: Send + Sync {
    /// Current token, or `None` when absent or unreadable.
    fn get(&self) -> Option<String>;

    /// Overwrite the stored token. Atomic with respect to `get`: no reader
    /// observes a partially written value.
    fn set(&self, token: &str) -> Result<(), CredentialError>;

    /// Remove the stored token. Clearing an already-empty store is not an
    /// error.
    fn clear(&self) -> Result<(), CredentialError>;
}

/// OS keychain implementation backed by the `keyring` crate.
#[derive(Debug, Default)]
pub struct KeyringStore;

impl KeyringStore {
    pub fn new() -> Self {
        Self
    }

    fn entry() -> Result<Entry, keyring::Error> {
        Entry::new(SERVICE_NAME, TOKEN_ACCOUNT)
    }
}

impl CredentialStore for KeyringStore {
    fn get(&self) -> Option<String> {
        let entry = match Self::entry() {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "keychain unavailable, treating as logged out");
                return None;
            }
        };
        match entry.get_password() {
            Ok(token) => Some(token),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                warn!(error = %e, "failed to read token from keychain, treating as logged out");
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<(), CredentialError> {
        let entry = Self::entry().map_err(CredentialError::new)?;
        entry.set_password(token).map_err(CredentialError::new)
    }

    fn clear(&self) -> Result<(), CredentialError> {
        let entry = Self::entry().map_err(CredentialError::new)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(CredentialError::new(e)),
        }
    }
}

/// In-memory implementation for tests and embedders without an OS keychain.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token already present.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set(&self, token: &str) -> Result<(), CredentialError> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}
