//! In-process store
//!
//! Keeps feed settings and preferences behind a `RwLock` and records every
//! mutation call in order, so callers can observe exactly which store entry
//! points were invoked.

use super::{FeedSettings, FeedSettingsStore, PreferenceStore, StoreError, validate_tags};
use crate::preferences::UserPreferences;
use std::sync::{Mutex, RwLock};

/// A recorded mutation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Follow(Vec<String>),
    Unfollow(Vec<String>),
    Block(Vec<String>),
    Unblock(Vec<String>),
}

/// Store that lives only for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: RwLock<FeedSettings>,
    preferences: RwLock<Option<UserPreferences>>,
    calls: Mutex<Vec<StoreCall>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing settings
    ///
    /// The seed is taken as-is, even if a tag is in both sets.
    #[must_use]
    pub fn with_settings(settings: FeedSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
            ..Self::default()
        }
    }

    /// All mutation calls received so far, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record(&self, call: StoreCall) -> Result<(), StoreError> {
        self.calls.lock().map_err(|_| StoreError::Poisoned)?.push(call);
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut FeedSettings)) -> Result<(), StoreError> {
        let mut settings = self.settings.write().map_err(|_| StoreError::Poisoned)?;
        f(&mut settings);
        Ok(())
    }
}

impl FeedSettingsStore for MemoryStore {
    fn feed_settings(&self) -> Result<FeedSettings, StoreError> {
        self.settings
            .read()
            .map(|settings| settings.clone())
            .map_err(|_| StoreError::Poisoned)
    }

    fn follow_tags(&self, tags: &[String]) -> Result<(), StoreError> {
        validate_tags(tags)?;
        self.record(StoreCall::Follow(tags.to_vec()))?;
        self.update(|settings| {
            for tag in tags {
                settings.blocked_tags.remove(tag);
                settings.include_tags.insert(tag.clone());
            }
        })
    }

    fn unfollow_tags(&self, tags: &[String]) -> Result<(), StoreError> {
        self.record(StoreCall::Unfollow(tags.to_vec()))?;
        self.update(|settings| {
            for tag in tags {
                settings.include_tags.remove(tag);
            }
        })
    }

    fn block_tags(&self, tags: &[String]) -> Result<(), StoreError> {
        validate_tags(tags)?;
        self.record(StoreCall::Block(tags.to_vec()))?;
        self.update(|settings| {
            for tag in tags {
                settings.include_tags.remove(tag);
                settings.blocked_tags.insert(tag.clone());
            }
        })
    }

    fn unblock_tags(&self, tags: &[String]) -> Result<(), StoreError> {
        self.record(StoreCall::Unblock(tags.to_vec()))?;
        self.update(|settings| {
            for tag in tags {
                settings.blocked_tags.remove(tag);
            }
        })
    }
}

impl PreferenceStore for MemoryStore {
    fn load_preferences(&self) -> Result<UserPreferences, StoreError> {
        let stored = self.preferences.read().map_err(|_| StoreError::Poisoned)?;
        Ok(stored.clone().unwrap_or_default())
    }

    fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), StoreError> {
        let mut stored = self.preferences.write().map_err(|_| StoreError::Poisoned)?;
        *stored = Some(preferences.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_follow_is_idempotent() {
        let store = MemoryStore::new();
        store.follow_tags(&tags(&["rust"])).unwrap();
        let once = store.feed_settings().unwrap();

        store.follow_tags(&tags(&["rust"])).unwrap();
        let twice = store.feed_settings().unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice.include_tags.len(), 1);
    }

    #[test]
    fn test_block_removes_follow() {
        let store = MemoryStore::new();
        store.follow_tags(&tags(&["rust", "go"])).unwrap();
        store.block_tags(&tags(&["go"])).unwrap();

        let settings = store.feed_settings().unwrap();
        assert!(settings.is_followed("rust"));
        assert!(!settings.is_followed("go"));
        assert!(settings.is_blocked("go"));
    }

    #[test]
    fn test_follow_removes_block() {
        let store = MemoryStore::new();
        store.block_tags(&tags(&["php"])).unwrap();
        store.follow_tags(&tags(&["php"])).unwrap();

        let settings = store.feed_settings().unwrap();
        assert!(settings.is_followed("php"));
        assert!(!settings.is_blocked("php"));
    }

    #[test]
    fn test_unfollow_and_unblock_missing_tags() {
        let store = MemoryStore::new();
        store.unfollow_tags(&tags(&["nope"])).unwrap();
        store.unblock_tags(&tags(&["nope"])).unwrap();

        assert_eq!(store.feed_settings().unwrap(), FeedSettings::default());
    }

    #[test]
    fn test_calls_are_recorded_in_order() {
        let store = MemoryStore::new();
        store.follow_tags(&tags(&["a"])).unwrap();
        store.block_tags(&tags(&["b"])).unwrap();
        store.unblock_tags(&tags(&["b"])).unwrap();

        assert_eq!(
            store.calls(),
            vec![
                StoreCall::Follow(tags(&["a"])),
                StoreCall::Block(tags(&["b"])),
                StoreCall::Unblock(tags(&["b"])),
            ]
        );
    }

    #[test]
    fn test_invalid_tag_is_not_recorded() {
        let store = MemoryStore::new();
        assert!(store.follow_tags(&tags(&[""])).is_err());
        assert!(store.calls().is_empty());
    }

    #[test]
    fn test_preferences_default_until_saved() {
        let store = MemoryStore::new();
        assert_eq!(store.load_preferences().unwrap(), UserPreferences::default());

        let prefs = UserPreferences {
            insane_mode: true,
            ..UserPreferences::default()
        };
        store.save_preferences(&prefs).unwrap();
        assert_eq!(store.load_preferences().unwrap(), prefs);
    }
}
