//! Storage error types.
//!
//! Used by [`crate::MessageStore`] implementations and callers of storage APIs.
//! A missing row is not an error: lookups return `Ok(None)`.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Schema error: {0}")]
    Schema(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}
