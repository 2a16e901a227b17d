//! Tag search
//!
//! - [`TagSearchProvider`]: where results come from
//! - [`SearchCache`]: results by query string
//! - [`QueryTracker`]: which lookup is authoritative right now

pub mod cache;
pub mod error;
pub mod provider;
pub mod tracker;

pub use cache::SearchCache;
pub use error::SearchError;
pub use provider::{CatalogSearch, TagSearchProvider};
pub use tracker::{QueryTracker, SearchTicket};
