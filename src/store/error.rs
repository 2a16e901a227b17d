//! Store-specific error types
//!
//! Errors that can occur while reading or mutating the persisted feed
//! settings and user preferences.
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`DecodeError`** / **`EncodeError`**: bincode failures on stored preferences
//! - **`InvalidTag`**: A tag that is empty or not valid UTF-8
//! - **`Poisoned`**: The in-memory store lock was poisoned by a panicking writer

use thiserror::Error;

/// Store-specific errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding data: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding data: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// Tag failed validation before reaching the store
    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    /// In-memory state lock was poisoned
    #[error("Store lock poisoned")]
    Poisoned,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
