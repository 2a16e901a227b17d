//! Feed settings storage
//!
//! Holds the user's followed (`include`) and blocked tag sets along with the
//! settings-panel preferences. Two backends are provided:
//!
//! - [`SledStore`]: persistent, backed by the sled embedded database
//! - [`MemoryStore`]: in-process, records every mutation call
//!
//! Both enforce follow/block mutual exclusion: following a tag removes it from
//! the blocked set and blocking a tag removes it from the followed set.
//! Inserting a tag that is already present is a no-op.
//!
//! # Examples
//!
//! ```
//! use feedtags::store::{FeedSettingsStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.follow_tags(&["rust".to_string()]).unwrap();
//! store.block_tags(&["rust".to_string()]).unwrap();
//!
//! let settings = store.feed_settings().unwrap();
//! assert!(settings.is_blocked("rust"));
//! assert!(!settings.is_followed("rust"));
//! ```

pub mod error;
pub mod memory;
pub mod sled_store;

pub use error::StoreError;
pub use memory::{MemoryStore, StoreCall};
pub use sled_store::SledStore;

use crate::preferences::UserPreferences;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Snapshot of a user's tag preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSettings {
    /// Followed tags
    pub include_tags: BTreeSet<String>,
    /// Blocked tags
    pub blocked_tags: BTreeSet<String>,
}

impl FeedSettings {
    /// Whether the tag is in the followed set
    #[must_use]
    pub fn is_followed(&self, tag: &str) -> bool {
        self.include_tags.contains(tag)
    }

    /// Whether the tag is in the blocked set
    #[must_use]
    pub fn is_blocked(&self, tag: &str) -> bool {
        self.blocked_tags.contains(tag)
    }

    /// All tags the user has expressed a preference on, deduplicated
    #[must_use]
    pub fn known_tags(&self) -> BTreeSet<String> {
        self.include_tags.union(&self.blocked_tags).cloned().collect()
    }
}

/// Read and mutation surface for the followed/blocked tag sets
///
/// Mutations take `&self`; implementations use interior mutability so a
/// store can be shared between the controller and deferred unblock actions.
pub trait FeedSettingsStore: Send + Sync {
    /// Current followed and blocked sets
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn feed_settings(&self) -> Result<FeedSettings, StoreError>;

    /// Add tags to the followed set, removing them from the blocked set
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a tag is invalid or the backend write fails.
    fn follow_tags(&self, tags: &[String]) -> Result<(), StoreError>;

    /// Remove tags from the followed set
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend write fails.
    fn unfollow_tags(&self, tags: &[String]) -> Result<(), StoreError>;

    /// Add tags to the blocked set, removing them from the followed set
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a tag is invalid or the backend write fails.
    fn block_tags(&self, tags: &[String]) -> Result<(), StoreError>;

    /// Remove tags from the blocked set
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend write fails.
    fn unblock_tags(&self, tags: &[String]) -> Result<(), StoreError>;
}

/// Persistence for the settings panel
pub trait PreferenceStore: Send + Sync {
    /// Load stored preferences, or defaults when none were saved
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if stored preferences cannot be read or decoded.
    fn load_preferences(&self) -> Result<UserPreferences, StoreError>;

    /// Replace stored preferences
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding or the backend write fails.
    fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), StoreError>;
}

/// Reject tags that can never be matched (empty or whitespace-only)
///
/// # Errors
///
/// Returns `StoreError::InvalidTag` for blank tags.
pub fn validate_tags(tags: &[String]) -> Result<(), StoreError> {
    match tags.iter().find(|tag| tag.trim().is_empty()) {
        Some(_) => Err(StoreError::InvalidTag("tag must not be empty".to_string())),
        None => Ok(()),
    }
}
