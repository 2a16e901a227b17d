//! Tag filter: follow/unfollow/block/unblock with live search
//!
//! [`TagSelectionController`] is the entry point. It owns the transient view
//! state (query, results, open menu) and routes every preference change to a
//! [`FeedSettingsStore`](crate::store::FeedSettingsStore).

pub mod controller;
pub mod error;
pub mod menu;
pub mod unblock;
pub mod view;

pub use controller::{TagSelectionController, TagSelectionControllerBuilder};
pub use error::FilterError;
pub use menu::{MenuAction, MenuState, TagModerationMenu};
pub use unblock::{DeferredUnblock, MAX_UNDO_WINDOW, UnblockOutcome, UnblockPolicy};
pub use view::{CategoryGroup, EMPTY_MESSAGE, FilterMode, FilterViewModel, MenuView, TagRow};
