//! Command implementations
//!
//! Each command is a module with an `execute` function that takes parsed CLI
//! args and a [`CommandContext`] and runs the operation against the store.

pub mod browse;
pub mod config;
pub mod onboarding;
pub mod prefs;
pub mod search;
pub mod status;
pub mod tags;

pub use browse::execute as browse;
pub use onboarding::execute as onboarding;
pub use search::execute as search;
pub use status::execute as status;

use crate::Result;
use crate::categories::TagCatalog;
use crate::config::AppConfig;
use crate::filter::TagSelectionController;
use crate::flags::AuthState;
use crate::search::{CatalogSearch, SearchCache};
use crate::store::{FeedSettingsStore, PreferenceStore};
use crate::ui::{OutputWriter, UserInput};
use std::sync::Arc;

/// Everything a command needs to run
pub struct CommandContext<'a> {
    pub feed: Arc<dyn FeedSettingsStore>,
    pub prefs: Arc<dyn PreferenceStore>,
    pub catalog: TagCatalog,
    pub config: &'a AppConfig,
    pub auth: AuthState,
    pub output: &'a dyn OutputWriter,
    pub input: &'a dyn UserInput,
}

impl<'a> CommandContext<'a> {
    /// Bind a store that handles both feed settings and preferences
    pub fn new<S>(
        store: Arc<S>,
        catalog: TagCatalog,
        config: &'a AppConfig,
        output: &'a dyn OutputWriter,
        input: &'a dyn UserInput,
    ) -> Self
    where
        S: FeedSettingsStore + PreferenceStore + 'static,
    {
        Self {
            feed: Arc::clone(&store) as Arc<dyn FeedSettingsStore>,
            prefs: store,
            catalog,
            config,
            auth: config.auth_state(),
            output,
            input,
        }
    }

    /// Act as a signed-out user
    #[must_use]
    pub fn anonymous(mut self) -> Self {
        self.auth = AuthState::Anonymous;
        self
    }

    /// Tag filter controller wired to the configuration
    ///
    /// # Errors
    ///
    /// Returns `FeedTagsError::FilterError` if the controller cannot be built.
    pub fn controller(&self) -> Result<TagSelectionController> {
        let search = &self.config.search;
        let controller = TagSelectionController::builder()
            .store(Arc::clone(&self.feed))
            .auth(self.auth.clone())
            .flags(self.config.flags.clone())
            .catalog(self.catalog.clone())
            .policy(self.config.unblock_policy)
            .undo_window(self.config.undo_window())
            .cache(SearchCache::new(search.cache_capacity, search.cache_ttl()))
            .build()?;
        Ok(controller)
    }

    /// Catalog search that also knows the user's own tags
    ///
    /// # Errors
    ///
    /// Returns `FeedTagsError::StoreError` if the feed settings cannot be read.
    pub fn search_provider(&self) -> Result<CatalogSearch> {
        let known = self.feed.feed_settings()?.known_tags();
        Ok(CatalogSearch::new(&self.catalog, self.config.search.result_limit).with_known_tags(known))
    }
}

/// Catalog from the configured file, or the built-in one
///
/// # Errors
///
/// Returns `FeedTagsError::CatalogError` if the configured file cannot be loaded.
pub fn load_catalog(config: &AppConfig) -> Result<TagCatalog> {
    match &config.categories_file {
        Some(path) => Ok(TagCatalog::load(path)?),
        None => Ok(TagCatalog::builtin()),
    }
}
