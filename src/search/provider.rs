//! Tag search providers
//!
//! A provider maps a query string to matching tag names. The controller does
//! not care how the lookup is performed; anything implementing
//! [`TagSearchProvider`] can be plugged in, including plain closures.

use super::SearchError;
use crate::categories::TagCatalog;

/// Source of tag search results
pub trait TagSearchProvider {
    /// Look up tags matching `query`
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if the lookup cannot be completed.
    fn search_tags(&self, query: &str) -> Result<Vec<String>, SearchError>;
}

impl<F> TagSearchProvider for F
where
    F: Fn(&str) -> Result<Vec<String>, SearchError>,
{
    fn search_tags(&self, query: &str) -> Result<Vec<String>, SearchError> {
        self(query)
    }
}

/// Local provider searching the category catalog plus any extra known tags
///
/// Matching is a case-insensitive substring test. Tags starting with the
/// query rank first, then alphabetical order.
#[derive(Debug, Clone)]
pub struct CatalogSearch {
    tags: Vec<String>,
    limit: usize,
}

impl CatalogSearch {
    #[must_use]
    pub fn new(catalog: &TagCatalog, limit: usize) -> Self {
        Self {
            tags: catalog.all_tags().into_iter().collect(),
            limit,
        }
    }

    /// Make additional tags searchable (e.g. the user's followed tags)
    #[must_use]
    pub fn with_known_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.tags.extend(tags);
        self.tags.sort();
        self.tags.dedup();
        self
    }
}

impl TagSearchProvider for CatalogSearch {
    fn search_tags(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let mut matches: Vec<(bool, &String)> = self
            .tags
            .iter()
            .filter_map(|tag| {
                let lowered = tag.to_lowercase();
                lowered
                    .contains(&needle)
                    .then(|| (!lowered.starts_with(&needle), tag))
            })
            .collect();
        matches.sort();

        Ok(matches
            .into_iter()
            .take(self.limit)
            .map(|(_, tag)| tag.clone())
            .collect())
    }
}
