//! Unified error types for the expense desk.
//!
//! Store rejections keep the message they were raised with (`Erreur 404`, `Erreur 500`)
//! so callers can surface it unchanged.

use thiserror::Error;

/// Every failure the bill workflow can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Underlying SeaORM failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Malformed JSON (session payloads)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No usable session context
    #[error("Session error: {message}")]
    Session {
        /// What went wrong
        message: String,
    },

    /// The store rejected an operation; the message is shown verbatim
    #[error("{message}")]
    Store {
        /// Human-readable rejection, e.g. `Erreur 500`
        message: String,
    },

    /// Amount field is not a finite, non-negative number
    #[error("Invalid amount: {value:?}")]
    InvalidAmount {
        /// Raw field value
        value: String,
    },

    /// A form field holds a value outside its allowed set
    #[error("Invalid value {value:?} for field `{field}`")]
    InvalidField {
        /// Field name
        field: &'static str,
        /// Raw field value
        value: String,
    },

    /// Date is not a zero-padded year-month-day
    #[error("Invalid bill date: {value:?}")]
    InvalidDate {
        /// Raw field value
        value: String,
    },

    /// Submit fired before any attachment was accepted
    #[error("No accepted attachment to submit")]
    MissingAttachment,

    /// Submit fired while a previous submission is still in flight
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    /// Operation requires a bill that has been persisted
    #[error("Bill has not been persisted yet")]
    NotPersisted,
}

impl Error {
    /// Builds a store rejection carrying `message`.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
