//! Persisted key/value state.
//!
//! ARCHITECTURE
//! ============
//! The console keeps its session in a small string key/value store that
//! survives restarts. The store is injected as `Arc<dyn KeyValueStore>` so
//! the session layer can be tested against [`MemoryStore`] and run against
//! [`FileStore`] in the CLI.
//!
//! Reads never perform I/O: [`FileStore`] serves reads from its in-memory
//! map and writes through to disk on every mutation.

pub mod credentials;
pub mod file;

use std::collections::HashMap;
use std::sync::Mutex;

pub use credentials::CredentialStore;
pub use file::FileStore;

use crate::error::ErrorCode;

// =============================================================================
// KEYS
// =============================================================================

pub const ACCESS_TOKEN_KEY: &str = "access-token";
pub const REFRESH_TOKEN_KEY: &str = "refresh-token";
pub const CURRENT_USER_KEY: &str = "current-user";
pub const DEMO_MODE_KEY: &str = "demo-mode-flag";
pub const THEME_KEY: &str = "theme-preference";

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store io failed: {0}")]
    Io(String),
    #[error("store contents are not valid JSON: {0}")]
    Corrupt(String),
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "E_STORE_IO",
            Self::Corrupt(_) => "E_STORE_CORRUPT",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

// =============================================================================
// STORE TRAIT
// =============================================================================

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove several keys in one write. Missing keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal cannot be persisted.
    fn remove(&self, keys: &[&str]) -> Result<(), StoreError>;
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// Process-local store. State is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, keys: &[&str]) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
