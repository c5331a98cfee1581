//! Store error types

use phonebook_domain::ContactField;
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Why a contact's input values were refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A mandatory field was empty
    #[error("Missing {0}")]
    MissingField(ContactField),

    /// Phone number not in `(DDD) DDD-DDDD` form
    #[error("Invalid phone number '{0}', expected format (123) 456-7890")]
    InvalidPhone(String),

    /// Email address not in `local@domain.tld` form
    #[error("Invalid email address '{0}'")]
    InvalidEmail(String),
}

/// Errors that can occur during directory and persistence operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Input values failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A contact with the same full name already exists
    #[error("Contact '{0}' already exists")]
    Duplicate(String),

    /// Referenced contact or file does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Persisted data or import input is malformed
    #[error("Invalid format: {0}")]
    Format(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Format(err.to_string())
    }
}

impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return StoreError::Format(err.to_string());
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io) => StoreError::Io(io),
            other => StoreError::Format(format!("{:?}", other)),
        }
    }
}
