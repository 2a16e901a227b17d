//! Filter controller errors

use thiserror::Error;

/// Errors raised by the tag filter controller
#[derive(Debug, Error)]
pub enum FilterError {
    /// Controller could not be constructed
    #[error("Failed to build tag filter: {0}")]
    BuildError(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
