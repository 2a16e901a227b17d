//! Sled-backed store
//!
//! Uses three sled trees:
//! - `include`: followed tags (key = tag bytes, empty value)
//! - `blocked`: blocked tags (key = tag bytes, empty value)
//! - `preferences`: a single bincode-encoded `UserPreferences` record

use super::{FeedSettings, FeedSettingsStore, PreferenceStore, StoreError, validate_tags};
use crate::preferences::UserPreferences;
use sled::{Db, Tree};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

const PREFERENCES_KEY: &[u8] = b"current";

/// Persistent feed settings store
pub struct SledStore {
    db: Db,
    include: Tree,
    blocked: Tree,
    preferences: Tree,
}

impl SledStore {
    /// Opens or creates a store at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use feedtags::store::SledStore;
    /// let store = SledStore::open("my_feed_db").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database or its trees cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let include = db.open_tree("include")?;
        let blocked = db.open_tree("blocked")?;
        let preferences = db.open_tree("preferences")?;
        Ok(Self {
            db,
            include,
            blocked,
            preferences,
        })
    }

    /// Flush pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the flush fails.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }

    fn read_tags(tree: &Tree) -> Result<BTreeSet<String>, StoreError> {
        let mut tags = BTreeSet::new();
        for key in tree.iter().keys() {
            let key = key?;
            let tag = String::from_utf8(key.to_vec())
                .map_err(|e| StoreError::InvalidTag(format!("stored tag is not UTF-8: {e}")))?;
            tags.insert(tag);
        }
        Ok(tags)
    }
}

impl FeedSettingsStore for SledStore {
    fn feed_settings(&self) -> Result<FeedSettings, StoreError> {
        Ok(FeedSettings {
            include_tags: Self::read_tags(&self.include)?,
            blocked_tags: Self::read_tags(&self.blocked)?,
        })
    }

    fn follow_tags(&self, tags: &[String]) -> Result<(), StoreError> {
        validate_tags(tags)?;
        for tag in tags {
            self.blocked.remove(tag.as_bytes())?;
            self.include.insert(tag.as_bytes(), Vec::new())?;
        }
        info!(?tags, "followed tags");
        Ok(())
    }

    fn unfollow_tags(&self, tags: &[String]) -> Result<(), StoreError> {
        for tag in tags {
            self.include.remove(tag.as_bytes())?;
        }
        info!(?tags, "unfollowed tags");
        Ok(())
    }

    fn block_tags(&self, tags: &[String]) -> Result<(), StoreError> {
        validate_tags(tags)?;
        for tag in tags {
            self.include.remove(tag.as_bytes())?;
            self.blocked.insert(tag.as_bytes(), Vec::new())?;
        }
        info!(?tags, "blocked tags");
        Ok(())
    }

    fn unblock_tags(&self, tags: &[String]) -> Result<(), StoreError> {
        for tag in tags {
            self.blocked.remove(tag.as_bytes())?;
        }
        info!(?tags, "unblocked tags");
        Ok(())
    }
}

impl PreferenceStore for SledStore {
    fn load_preferences(&self) -> Result<UserPreferences, StoreError> {
        match self.preferences.get(PREFERENCES_KEY)? {
            Some(value) => {
                let (preferences, _): (UserPreferences, usize) =
                    bincode::serde::decode_from_slice(&value, bincode::config::standard())?;
                Ok(preferences)
            }
            None => Ok(UserPreferences::default()),
        }
    }

    fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), StoreError> {
        let value = bincode::serde::encode_to_vec(preferences, bincode::config::standard())?;
        self.preferences.insert(PREFERENCES_KEY, value)?;
        Ok(())
    }
}
