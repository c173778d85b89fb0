//! Session storage backends.
//!
//! The session is a small key-value store holding a JSON `user` entry. The binary reads it
//! from the environment (or `.env`); tests use a plain `HashMap`.

use std::collections::HashMap;

/// Read-only key-value access to the session store.
pub trait SessionStorage {
    /// Returns the raw value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;
}

impl SessionStorage for HashMap<String, String> {
    fn get_item(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Session storage backed by environment variables.
///
/// Key `user` is read from `EXPENSE_DESK_USER`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSessionStorage;

impl EnvSessionStorage {
    /// Environment variable holding the value for `key`.
    #[must_use]
    pub fn variable_name(key: &str) -> String {
        format!("EXPENSE_DESK_{}", key.to_uppercase())
    }
}

impl SessionStorage for EnvSessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        std::env::var(Self::variable_name(key)).ok()
    }
}
