//! Store layer error types
//!
//! Defines all errors that can occur in the document store and its accessors.

use thiserror::Error;

/// Errors that can occur in the store layer
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading from the underlying store failed
    #[error("Store read failed: {0}")]
    Read(String),

    /// Writing to the underlying store failed
    #[error("Store write failed: {0}")]
    Write(String),

    /// Serialization/deserialization of a document failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A document with this id already exists in the collection
    #[error("Duplicate document id: {0}")]
    DuplicateId(String),

    /// A document with the same value in a unique field already exists
    #[error("Duplicate value for unique field: {0}")]
    UniqueViolation(String),

    /// A user with this username already exists
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    /// Referenced user does not exist
    #[error("User not found: {0}")]
    UserNotFound(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
