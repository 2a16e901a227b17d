//! Request generations for tag search
//!
//! Every distinct lookup gets a monotonically increasing generation number.
//! Exactly one generation is current at a time; a result is accepted only if
//! its ticket carries the current generation, so lookups that resolve after
//! the user moved on are dropped no matter what order they arrive in.
//!
//! Re-entering a query that still has a lookup outstanding re-adopts that
//! lookup's generation instead of issuing a new one. Every ticket must be
//! settled, with a failure if the lookup is given up, or retyping its query
//! waits on it forever. Returning to browse mode drops all outstanding
//! lookups.
//!
//! ```
//! use feedtags::search::QueryTracker;
//!
//! let mut tracker = QueryTracker::new();
//! let first = tracker.issue("a").unwrap();
//! let second = tracker.issue("ab").unwrap();
//!
//! assert!(tracker.settle(&second));
//! assert!(!tracker.settle(&first));
//! ```

use std::collections::HashMap;

/// Handle for one outstanding lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Tracks the current query generation and outstanding lookups
#[derive(Debug, Default)]
pub struct QueryTracker {
    last_generation: u64,
    current: Option<(String, u64)>,
    in_flight: HashMap<String, u64>,
}

impl QueryTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `query` current and return a ticket if a lookup must be issued
    ///
    /// Returns `None` when a lookup for the same query is already in flight;
    /// that lookup becomes current again.
    pub fn issue(&mut self, query: &str) -> Option<SearchTicket> {
        if let Some(&generation) = self.in_flight.get(query) {
            self.current = Some((query.to_string(), generation));
            return None;
        }

        let generation = self.bump(query);
        self.in_flight.insert(query.to_string(), generation);
        Some(SearchTicket {
            generation,
            query: query.to_string(),
        })
    }

    /// Make `query` current without a lookup (result already known)
    pub fn adopt(&mut self, query: &str) -> u64 {
        self.bump(query)
    }

    /// No query is current (browse mode); outstanding lookups are forgotten
    pub fn clear(&mut self) {
        self.current = None;
        self.in_flight.clear();
    }

    /// Mark the ticket's lookup finished; returns whether it is still current
    pub fn settle(&mut self, ticket: &SearchTicket) -> bool {
        if self.in_flight.get(&ticket.query) == Some(&ticket.generation) {
            self.in_flight.remove(&ticket.query);
        }
        self.is_current(ticket)
    }

    #[must_use]
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        matches!(&self.current, Some((_, generation)) if *generation == ticket.generation)
    }

    /// The current query is waiting on a lookup
    #[must_use]
    pub fn is_pending(&self) -> bool {
        match &self.current {
            Some((query, generation)) => self.in_flight.get(query) == Some(generation),
            None => false,
        }
    }

    fn bump(&mut self, query: &str) -> u64 {
        self.last_generation += 1;
        self.current = Some((query.to_string(), self.last_generation));
        self.last_generation
    }
}
