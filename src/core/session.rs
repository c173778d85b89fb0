//! Session context - who is filing bills.
//!
//! The context is read once from a [`SessionStorage`] and then passed explicitly to the
//! components that need the submitter's identity.

use crate::{
    config::session::SessionStorage,
    errors::{Error, Result},
};
use serde::Deserialize;

/// Storage key of the serialized user.
pub const USER_KEY: &str = "user";

/// Kind of account the session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// Identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionContext {
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub email: String,
}

impl SessionContext {
    #[must_use]
    pub fn new(user_type: UserType, email: impl Into<String>) -> Self {
        Self {
            user_type,
            email: email.into(),
        }
    }

    /// Reads and parses the `user` entry of `storage`.
    ///
    /// # Errors
    /// `Error::Session` when no user is stored, `Error::Json` when the entry is malformed.
    pub fn from_storage(storage: &impl SessionStorage) -> Result<Self> {
        let raw = storage.get_item(USER_KEY).ok_or_else(|| Error::Session {
            message: "no user in session storage".to_string(),
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}
