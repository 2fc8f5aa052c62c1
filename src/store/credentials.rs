//! Typed credential view over the key/value store.
//!
//! Readers (bearer stage, demo router, guards via the session manager) get
//! plain getters. Mutators are crate-private and only called by
//! `SessionManager`, which keeps tokens and the current user in lockstep.
//!
//! Every mutation holds one write lock shared by all clones, so a logout
//! cannot land between a check and the write that depends on it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{ACCESS_TOKEN_KEY, CURRENT_USER_KEY, DEMO_MODE_KEY, KeyValueStore, REFRESH_TOKEN_KEY, StoreError};
use crate::auth::models::CurrentUser;

const CREDENTIAL_KEYS: [&str; 4] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, CURRENT_USER_KEY, DEMO_MODE_KEY];

/// Snapshot of the persisted credential fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credential {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_demo: bool,
}

#[derive(Clone)]
pub struct CredentialStore {
    kv: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl CredentialStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv, write_lock: Arc::new(Mutex::new(())) }
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.kv.get(ACCESS_TOKEN_KEY)
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.kv.get(REFRESH_TOKEN_KEY)
    }

    /// The cached user. A malformed entry reads as absent.
    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        let raw = self.kv.get(CURRENT_USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed cached user");
                None
            }
        }
    }

    #[must_use]
    pub fn is_demo(&self) -> bool {
        self.kv.get(DEMO_MODE_KEY).as_deref() == Some("true")
    }

    #[must_use]
    pub fn snapshot(&self) -> Credential {
        Credential { access_token: self.access_token(), refresh_token: self.refresh_token(), is_demo: self.is_demo() }
    }

    /// Persist a full session. On a partial write the store is cleared so
    /// tokens never outlive (or precede) the cached user.
    pub(crate) fn set_session(
        &self,
        access: &str,
        refresh: &str,
        user: &CurrentUser,
        demo: bool,
    ) -> Result<(), StoreError> {
        let user_json = serde_json::to_string(user).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        let _guard = self.lock();
        let result = self
            .kv
            .set(CURRENT_USER_KEY, &user_json)
            .and_then(|()| self.kv.set(ACCESS_TOKEN_KEY, access))
            .and_then(|()| self.kv.set(REFRESH_TOKEN_KEY, refresh))
            .and_then(|()| if demo { self.kv.set(DEMO_MODE_KEY, "true") } else { self.kv.remove(&[DEMO_MODE_KEY]) });
        if result.is_err() {
            let _ = self.kv.remove(&CREDENTIAL_KEYS);
        }
        result
    }

    /// Overwrite only the access token, provided the session that issued
    /// `refresh` is still the stored one and still has a user.
    ///
    /// Returns `Ok(false)` without writing when the session changed.
    pub(crate) fn replace_access_token(&self, refresh: &str, access: &str) -> Result<bool, StoreError> {
        let _guard = self.lock();
        let same_session = self.kv.get(REFRESH_TOKEN_KEY).as_deref() == Some(refresh)
            && self.kv.get(CURRENT_USER_KEY).is_some();
        if !same_session {
            return Ok(false);
        }
        self.kv.set(ACCESS_TOKEN_KEY, access)?;
        Ok(true)
    }

    /// Remove all four credential fields.
    pub(crate) fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.lock();
        self.kv.remove(&CREDENTIAL_KEYS)
    }
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;
