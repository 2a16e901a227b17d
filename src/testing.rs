//! Testing utilities for feedtags
//!
//! Provides a `TestStore` wrapper for temporary sled stores and a scripted
//! search provider for driving the controller.
//!
//! Only available when compiled with `cfg(test)`.

use crate::search::{SearchError, TagSearchProvider};
use crate::store::SledStore;
use std::cell::RefCell;
use std::collections::HashMap;
use tempfile::TempDir;

/// Sled store living in a temporary directory
///
/// The directory is removed when the wrapper goes out of scope.
pub struct TestStore {
    // Declared first so the store is closed before its directory goes away
    store: SledStore,
    _dir: TempDir,
}

impl TestStore {
    /// # Panics
    /// Panics if the temporary directory or the store cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = SledStore::open(dir.path().join("db")).expect("Failed to open test store");
        Self { store, _dir: dir }
    }

    #[must_use]
    pub const fn store(&self) -> &SledStore {
        &self.store
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Search provider answering from a fixed table
///
/// Unknown queries return no results. Every lookup is recorded.
#[derive(Debug, Default)]
pub struct ScriptedSearch {
    answers: HashMap<String, Vec<String>>,
    fail: bool,
    calls: RefCell<Vec<String>>,
}

impl ScriptedSearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose every lookup fails
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with(mut self, query: &str, tags: &[&str]) -> Self {
        self.answers.insert(
            query.to_string(),
            tags.iter().map(|t| (*t).to_string()).collect(),
        );
        self
    }

    /// Queries looked up so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl TagSearchProvider for ScriptedSearch {
    fn search_tags(&self, query: &str) -> Result<Vec<String>, SearchError> {
        self.calls.borrow_mut().push(query.to_string());
        if self.fail {
            return Err(SearchError::ProviderError("scripted failure".to_string()));
        }
        Ok(self.answers.get(query).cloned().unwrap_or_default())
    }
}
