//! Unblock routing
//!
//! Unblocking a tag is either applied immediately or handed back to the
//! caller as a [`DeferredUnblock`]: the caller shows an "Undo" affordance and
//! either commits once the window has passed or cancels. Which path is taken
//! is decided by the configured [`UnblockPolicy`].

use crate::flags::{AuthState, FeatureFlags};
use crate::store::{FeedSettingsStore, StoreError};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_UNDO_WINDOW: TimeDelta = TimeDelta::seconds(5);

/// Longest undo window a controller accepts
pub const MAX_UNDO_WINDOW: TimeDelta = TimeDelta::hours(24);

/// When an unblock skips the undo step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnblockPolicy {
    /// Instant for anonymous users with the personalized feed enabled,
    /// deferred for everyone else
    #[default]
    AnonymousInstant,
    AlwaysDeferred,
    AlwaysInstant,
}

impl UnblockPolicy {
    #[must_use]
    pub const fn is_instant(self, auth: &AuthState, flags: &FeatureFlags) -> bool {
        match self {
            Self::AnonymousInstant => flags.personalized_feed && !auth.is_authenticated(),
            Self::AlwaysDeferred => false,
            Self::AlwaysInstant => true,
        }
    }
}

/// Result of an unblock request
#[derive(Debug)]
pub enum UnblockOutcome {
    /// The store was updated
    Applied,
    /// Nothing happened yet; commit or cancel the contained action
    Deferred(DeferredUnblock),
}

impl UnblockOutcome {
    #[must_use]
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

type UnblockAction = Box<dyn FnOnce() -> Result<(), StoreError> + Send>;

/// Pending unblock of a single tag
///
/// Consumed by [`commit`](Self::commit) or [`cancel`](Self::cancel), so the
/// store is updated at most once. Dropping it is the same as cancelling.
pub struct DeferredUnblock {
    tag: String,
    deadline: DateTime<Utc>,
    action: UnblockAction,
}

impl DeferredUnblock {
    pub(crate) fn new(
        tag: &str,
        store: Arc<dyn FeedSettingsStore>,
        created_at: DateTime<Utc>,
        window: TimeDelta,
    ) -> Self {
        let tags = vec![tag.to_string()];
        Self {
            tag: tag.to_string(),
            deadline: created_at
                .checked_add_signed(window)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            action: Box::new(move || store.unblock_tags(&tags)),
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// End of the undo window
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.deadline
    }

    /// Time left in the undo window, zero once expired
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> TimeDelta {
        (self.deadline - now).max(TimeDelta::zero())
    }

    /// Apply the unblock
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the mutation.
    pub fn commit(self) -> Result<(), StoreError> {
        info!(tag = %self.tag, "committing deferred unblock");
        (self.action)()
    }

    /// Discard the unblock (user pressed "Undo")
    pub fn cancel(self) {
        debug!(tag = %self.tag, "deferred unblock cancelled");
    }
}

impl fmt::Debug for DeferredUnblock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredUnblock")
            .field("tag", &self.tag)
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}
