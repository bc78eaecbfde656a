//! Hydration entries: one logged intake event per row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{EntryId, UserId};

/// A single logged intake event.
///
/// Created once through the log-entry operation and never mutated
/// afterwards. The aggregator only ever reads snapshots of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HydrationEntry {
    /// Unique entry identifier (immutable after creation).
    pub id: EntryId,
    /// Owner of the entry.
    pub user_id: UserId,
    /// Amount consumed in milliliters. Always positive.
    #[schema(example = 250)]
    pub amount: i32,
    /// Moment the intake was recorded.
    pub timestamp: DateTime<Utc>,
    /// Free-text drink label, e.g. `"water"` or `"tea"`. Never empty.
    #[serde(rename = "type")]
    #[schema(example = "water")]
    pub kind: String,
}

/// Validated input for a new entry, before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    /// Owner of the entry.
    pub user_id: UserId,
    /// Amount consumed in milliliters.
    pub amount: i32,
    /// Drink label.
    pub kind: String,
    /// Recording time; defaults to creation time when `None`.
    pub timestamp: Option<DateTime<Utc>>,
}

impl HydrationEntry {
    /// Materializes a [`NewEntry`] into a stored entry with a fresh ID.
    ///
    /// `now` is used as the timestamp when the input did not carry one.
    #[must_use]
    pub fn from_new(new: NewEntry, now: DateTime<Utc>) -> Self {
        Self {
            id: EntryId::new(),
            user_id: new.user_id,
            amount: new.amount,
            timestamp: new.timestamp.unwrap_or(now),
            kind: new.kind,
        }
    }
}
