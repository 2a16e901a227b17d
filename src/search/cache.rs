//! Query-keyed search result cache
//!
//! Results are shared as `Arc<Vec<String>>` so the controller can hold the
//! currently displayed list without copying it out of the cache. Only
//! successful lookups are cached.

use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_CAPACITY: u64 = 256;
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);
/// Longest time-to-live; moka refuses anything near its 1000 year limit
pub const MAX_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Bounded, time-limited cache of search results
#[derive(Clone)]
pub struct SearchCache {
    inner: Cache<String, Arc<Vec<String>>>,
}

impl SearchCache {
    /// `ttl` is capped at [`MAX_TTL`]
    #[must_use]
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl.min(MAX_TTL))
                .build(),
        }
    }

    #[must_use]
    pub fn get(&self, query: &str) -> Option<Arc<Vec<String>>> {
        self.inner.get(query)
    }

    pub fn insert(&self, query: String, tags: Arc<Vec<String>>) {
        self.inner.insert(query, tags);
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }
}

impl std::fmt::Debug for SearchCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchCache")
            .field("entries", &self.inner.entry_count())
            .finish()
    }
}
