//! Unit tests for search error types

#[cfg(test)]
mod tests {
    use crate::search::error::SearchError;
    use std::error::Error;

    #[test]
    fn test_empty_query_error() {
        let error = SearchError::EmptyQuery;
        assert_eq!(error.to_string(), "Search query is empty");
    }

    #[test]
    fn test_provider_error() {
        let error = SearchError::ProviderError("timeout".to_string());
        assert_eq!(error.to_string(), "Search provider failed: timeout");
    }

    #[test]
    fn test_error_debug() {
        let error = SearchError::ProviderError("boom".to_string());
        let debug = format!("{error:?}");
        assert!(debug.contains("ProviderError"));
        assert!(debug.contains("boom"));
    }

    #[test]
    fn test_error_source() {
        assert!(SearchError::EmptyQuery.source().is_none());
    }
}
