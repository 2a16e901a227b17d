//! Search-specific error types
//!
//! Errors a tag search provider can report. The filter controller never
//! surfaces these to the user; a failed lookup renders as "no results".

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// Query was empty after trimming
    #[error("Search query is empty")]
    EmptyQuery,

    /// The provider could not complete the lookup
    #[error("Search provider failed: {0}")]
    ProviderError(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
