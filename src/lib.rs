//! Feedtags - follow, unfollow and block tags that shape a personalized feed
//!
//! The [`filter`] module holds the tag filter controller: live search with
//! stale-result protection, follow/block state reconciliation and an undo
//! window for unblocking. Preferences are persisted through the
//! [`store`] traits, with a sled-backed implementation for the CLI.

use thiserror::Error;

pub mod categories;
pub mod cli;
pub mod commands;
pub mod config;
pub mod filter;
pub mod flags;
pub mod onboarding;
pub mod preferences;
pub mod search;
pub mod store;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FeedTagsError {
    /// Store error
    #[error("Store error: {0}")]
    StoreError(#[from] store::StoreError),
    /// Search error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Tag filter error
    #[error("Tag filter error: {0}")]
    FilterError(#[from] filter::FilterError),
    /// Tag catalog error
    #[error("Tag catalog error: {0}")]
    CatalogError(#[from] categories::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Prompt failed
    #[error("Input error: {0}")]
    InputError(#[from] ui::InputError),
    /// JSON output failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, FeedTagsError>;
