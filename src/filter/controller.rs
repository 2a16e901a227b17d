//! Tag selection controller
//!
//! Reconciles the live query, search results, the followed/blocked sets and
//! moderation intents into a [`FilterViewModel`]. The controller never owns
//! the tag sets; every change is routed to the [`FeedSettingsStore`].
//!
//! Searching is split in two so that any execution model can drive it:
//! [`on_query_change`](TagSelectionController::on_query_change) hands out a
//! [`SearchTicket`] when a lookup is needed, and
//! [`resolve_search`](TagSelectionController::resolve_search) accepts the
//! outcome whenever it arrives. Outcomes for superseded tickets are dropped.
//!
//! ```
//! use feedtags::filter::{FilterMode, TagSelectionController};
//! use feedtags::store::MemoryStore;
//! use std::sync::Arc;
//!
//! let mut controller = TagSelectionController::builder()
//!     .store(Arc::new(MemoryStore::new()))
//!     .build()
//!     .unwrap();
//!
//! let first = controller.on_query_change("r").unwrap();
//! let second = controller.on_query_change("ru").unwrap();
//!
//! controller.resolve_search(&second, Ok(vec!["rust".to_string()]));
//! controller.resolve_search(&first, Ok(vec!["react".to_string(), "rust".to_string()]));
//!
//! let view = controller.view_model().unwrap();
//! assert_eq!(view.mode, FilterMode::Search);
//! assert_eq!(view.items.len(), 1);
//! assert_eq!(view.items[0].tag, "rust");
//! ```

use super::error::FilterError;
use super::menu::{MenuAction, TagModerationMenu};
use super::unblock::{DEFAULT_UNDO_WINDOW, DeferredUnblock, MAX_UNDO_WINDOW, UnblockOutcome, UnblockPolicy};
use super::view::{FilterMode, FilterViewModel, MenuView};
use crate::categories::TagCatalog;
use crate::flags::{AuthState, FeatureFlags};
use crate::search::{QueryTracker, SearchCache, SearchError, SearchTicket, TagSearchProvider};
use crate::store::{FeedSettingsStore, StoreError};
use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Tag filter state and callbacks
pub struct TagSelectionController {
    store: Arc<dyn FeedSettingsStore>,
    auth: AuthState,
    flags: FeatureFlags,
    catalog: TagCatalog,
    policy: UnblockPolicy,
    undo_window: TimeDelta,
    cache: SearchCache,
    tracker: QueryTracker,
    query: String,
    results: Arc<Vec<String>>,
    menu: TagModerationMenu,
}

impl TagSelectionController {
    #[must_use]
    pub fn builder() -> TagSelectionControllerBuilder {
        TagSelectionControllerBuilder::new()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn mode(&self) -> FilterMode {
        FilterMode::for_query(self.query.as_str())
    }

    /// Analytics origin for mutations issued right now
    #[must_use]
    pub fn origin(&self) -> &'static str {
        self.mode().origin()
    }

    #[must_use]
    pub const fn menu(&self) -> &TagModerationMenu {
        &self.menu
    }

    #[must_use]
    pub const fn auth(&self) -> &AuthState {
        &self.auth
    }

    /// Whether the current query is waiting on a lookup
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.tracker.is_pending()
    }

    /// Update the query
    ///
    /// Returns a ticket when the caller must perform a lookup and pass its
    /// outcome to [`resolve_search`](Self::resolve_search). Returns `None` in
    /// browse mode, on a cache hit, or when the same query is already in flight.
    pub fn on_query_change(&mut self, query: &str) -> Option<SearchTicket> {
        self.query = query.to_string();

        if query.is_empty() {
            self.tracker.clear();
            return None;
        }

        if let Some(cached) = self.cache.get(query) {
            let generation = self.tracker.adopt(query);
            debug!(query, generation, "search cache hit");
            self.results = cached;
            return None;
        }

        let ticket = self.tracker.issue(query);
        match &ticket {
            Some(ticket) => debug!(query, generation = ticket.generation(), "issuing tag search"),
            None => debug!(query, "reusing in-flight tag search"),
        }
        ticket
    }

    /// Accept the outcome of a lookup
    ///
    /// Successful results are cached under their own query either way, but
    /// only shown if the ticket is still current. A failed lookup shows as
    /// no results. Returns whether the outcome was applied.
    pub fn resolve_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<String>, SearchError>,
    ) -> bool {
        let current = self.tracker.settle(ticket);

        let results = match outcome {
            Ok(tags) => {
                let tags = Arc::new(tags);
                self.cache.insert(ticket.query().to_string(), Arc::clone(&tags));
                tags
            }
            Err(e) => {
                warn!(query = ticket.query(), error = %e, "tag search failed");
                Arc::new(Vec::new())
            }
        };

        if current {
            debug!(query = ticket.query(), count = results.len(), "applying search results");
            self.results = results;
        } else {
            debug!(
                query = ticket.query(),
                generation = ticket.generation(),
                "dropping stale search results"
            );
        }
        current
    }

    /// Update the query and run any needed lookup synchronously
    pub fn search_with<P>(&mut self, query: &str, provider: &P) -> bool
    where
        P: TagSearchProvider + ?Sized,
    {
        match self.on_query_change(query) {
            Some(ticket) => {
                let outcome = provider.search_tags(ticket.query());
                self.resolve_search(&ticket, outcome)
            }
            None => false,
        }
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the mutation.
    pub fn on_follow(&mut self, tag: &str) -> Result<(), StoreError> {
        self.close_menu_unless(tag);
        info!(tag, origin = self.origin(), "follow tag");
        self.store.follow_tags(&[tag.to_string()])
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the mutation.
    pub fn on_unfollow(&mut self, tag: &str) -> Result<(), StoreError> {
        self.close_menu_unless(tag);
        info!(tag, origin = self.origin(), "unfollow tag");
        self.store.unfollow_tags(&[tag.to_string()])
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the mutation.
    pub fn on_block(&mut self, tag: &str) -> Result<(), StoreError> {
        self.close_menu_unless(tag);
        info!(tag, origin = self.origin(), "block tag");
        self.store.block_tags(&[tag.to_string()])
    }

    /// Unblock now or hand back a deferred unblock, per the policy
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if an immediate unblock is rejected by the store.
    pub fn on_unblock(&mut self, tag: &str) -> Result<UnblockOutcome, StoreError> {
        self.on_unblock_at(tag, Utc::now())
    }

    /// [`on_unblock`](Self::on_unblock) with an explicit clock
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if an immediate unblock is rejected by the store.
    pub fn on_unblock_at(&mut self, tag: &str, now: DateTime<Utc>) -> Result<UnblockOutcome, StoreError> {
        self.close_menu_unless(tag);
        if self.policy.is_instant(&self.auth, &self.flags) {
            info!(tag, origin = self.origin(), "unblock tag");
            self.store.unblock_tags(&[tag.to_string()])?;
            return Ok(UnblockOutcome::Applied);
        }

        debug!(tag, origin = self.origin(), "deferring unblock behind undo");
        Ok(UnblockOutcome::Deferred(DeferredUnblock::new(
            tag,
            Arc::clone(&self.store),
            now,
            self.undo_window,
        )))
    }

    /// Open the options menu for `tag`, closing any other
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the blocked set cannot be read.
    pub fn on_open_moderation_menu(&mut self, tag: &str) -> Result<(), StoreError> {
        let is_blocked = self.store.feed_settings()?.is_blocked(tag);
        self.menu.open(tag, is_blocked);
        Ok(())
    }

    pub fn on_close_moderation_menu(&mut self) {
        self.menu.close();
    }

    /// An action on another row dismisses the open menu
    fn close_menu_unless(&mut self, tag: &str) {
        if self.menu.selected().is_some_and(|open| open != tag) {
            self.menu.close();
        }
    }

    /// Block the menu's tag and close the menu
    ///
    /// Returns the blocked tag, or `None` if the menu does not offer Block.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the mutation.
    pub fn menu_block(&mut self) -> Result<Option<String>, StoreError> {
        let Some(tag) = self.menu.take(MenuAction::Block) else {
            return Ok(None);
        };
        self.on_block(&tag)?;
        Ok(Some(tag))
    }

    /// Unblock the menu's tag (subject to the policy) and close the menu
    ///
    /// Returns `None` if the menu does not offer Unblock.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if an immediate unblock is rejected by the store.
    pub fn menu_unblock(&mut self) -> Result<Option<UnblockOutcome>, StoreError> {
        let Some(tag) = self.menu.take(MenuAction::Unblock) else {
            return Ok(None);
        };
        self.on_unblock(&tag).map(Some)
    }

    /// Build the current view model
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the feed settings cannot be read.
    pub fn view_model(&self) -> Result<FilterViewModel, StoreError> {
        let settings = self.store.feed_settings()?;
        let layout = self.flags.feed_filter_variant().layout();
        let menu = MenuView::from(self.menu.state());

        let view = match self.mode() {
            FilterMode::Browse => FilterViewModel::browse(&self.catalog, &settings),
            FilterMode::Search => {
                let pending = self.tracker.is_pending();
                let mut view =
                    FilterViewModel::search(&self.query, &self.results, &settings).pending(pending);
                if pending && view.items.is_empty() {
                    view.empty_message = None;
                }
                view
            }
        };

        Ok(view.with_layout(layout).with_menu(menu))
    }
}

/// Builder for `TagSelectionController`
pub struct TagSelectionControllerBuilder {
    store: Option<Arc<dyn FeedSettingsStore>>,
    auth: AuthState,
    flags: FeatureFlags,
    catalog: TagCatalog,
    policy: UnblockPolicy,
    undo_window: TimeDelta,
    cache: Option<SearchCache>,
}

impl TagSelectionControllerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            auth: AuthState::Anonymous,
            flags: FeatureFlags::default(),
            catalog: TagCatalog::builtin(),
            policy: UnblockPolicy::default(),
            undo_window: DEFAULT_UNDO_WINDOW,
            cache: None,
        }
    }

    /// Set the feed settings store (required)
    #[must_use]
    pub fn store(mut self, store: Arc<dyn FeedSettingsStore>) -> Self {
        self.store = Some(store);
        self
    }

    #[must_use]
    pub fn auth(mut self, auth: AuthState) -> Self {
        self.auth = auth;
        self
    }

    #[must_use]
    pub fn flags(mut self, flags: FeatureFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn catalog(mut self, catalog: TagCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub const fn policy(mut self, policy: UnblockPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn undo_window(mut self, window: TimeDelta) -> Self {
        self.undo_window = window;
        self
    }

    /// Share a result cache, e.g. across controller instances
    #[must_use]
    pub fn cache(mut self, cache: SearchCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// # Errors
    ///
    /// Returns `FilterError::BuildError` if no store was provided or the undo
    /// window is negative or longer than [`MAX_UNDO_WINDOW`].
    pub fn build(self) -> Result<TagSelectionController, FilterError> {
        let store = self
            .store
            .ok_or_else(|| FilterError::BuildError("Feed settings store is required".to_string()))?;

        if self.undo_window < TimeDelta::zero() {
            return Err(FilterError::BuildError(
                "Undo window must not be negative".to_string(),
            ));
        }
        if self.undo_window > MAX_UNDO_WINDOW {
            return Err(FilterError::BuildError(format!(
                "Undo window must not exceed {} hours",
                MAX_UNDO_WINDOW.num_hours()
            )));
        }

        Ok(TagSelectionController {
            store,
            auth: self.auth,
            flags: self.flags,
            catalog: self.catalog,
            policy: self.policy,
            undo_window: self.undo_window,
            cache: self.cache.unwrap_or_default(),
            tracker: QueryTracker::new(),
            query: String::new(),
            results: Arc::new(Vec::new()),
            menu: TagModerationMenu::new(),
        })
    }
}

impl Default for TagSelectionControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
