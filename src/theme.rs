//! Persisted light/dark preference.

use std::fmt;

use crate::store::{KeyValueStore, StoreError, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stored preference; absent or unrecognised values read as light.
    #[must_use]
    pub fn load(kv: &dyn KeyValueStore) -> Self {
        match kv.get(THEME_KEY).as_deref() {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the preference cannot be persisted.
    pub fn save(self, kv: &dyn KeyValueStore) -> Result<(), StoreError> {
        kv.set(THEME_KEY, self.as_str())
    }

    /// Flip the stored preference and return the new value.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference cannot be persisted.
    pub fn toggle(kv: &dyn KeyValueStore) -> Result<Self, StoreError> {
        let next = Self::load(kv).flipped();
        next.save(kv)?;
        tracing::debug!(theme = next.as_str(), "theme toggled");
        Ok(next)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
