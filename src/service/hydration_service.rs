//! Hydration service: entry logging, statistics, and goal management.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::validation::MAX_ENTRY_TYPE_LEN;
use crate::domain::{
    DEFAULT_DAILY_GOAL, HydrationEntry, HydrationStats, NewEntry, UserId, compute_stats,
    validate_entry, validate_goal,
};
use crate::error::ServiceError;
use crate::persistence::EntryStore;

/// Orchestration layer for hydration operations.
///
/// Stateless coordinator over an injected [`EntryStore`]. Validation runs
/// before any write; statistics are computed in memory from a snapshot of
/// the user's entries.
#[derive(Debug, Clone)]
pub struct HydrationService {
    store: Arc<dyn EntryStore>,
}

impl HydrationService {
    /// Creates a new `HydrationService`.
    #[must_use]
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    /// Validates and stores a new entry, returning it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] when the amount is not
    /// positive or the type is empty or too long, and
    /// [`ServiceError::Storage`] on write failure.
    pub async fn log_entry(&self, new: NewEntry) -> Result<HydrationEntry, ServiceError> {
        if !validate_entry(new.amount, &new.kind) {
            return Err(ServiceError::InvalidRequest(
                "amount must be at least 1 and type must not be empty".to_string(),
            ));
        }
        if new.kind.chars().count() > MAX_ENTRY_TYPE_LEN {
            return Err(ServiceError::InvalidRequest(format!(
                "type must be at most {MAX_ENTRY_TYPE_LEN} characters"
            )));
        }

        let entry = HydrationEntry::from_new(new, Utc::now());
        self.store.insert_entry(&entry).await?;

        tracing::info!(
            user_id = %entry.user_id,
            entry_id = %entry.id,
            amount = entry.amount,
            "entry logged"
        );
        Ok(entry)
    }

    /// Returns the user's entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] on query failure.
    pub async fn list_entries(&self, user_id: UserId) -> Result<Vec<HydrationEntry>, ServiceError> {
        Ok(self.store.list_entries(user_id).await?)
    }

    /// Computes statistics relative to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] on query failure.
    pub async fn stats(&self, user_id: UserId) -> Result<HydrationStats, ServiceError> {
        self.stats_at(user_id, Utc::now()).await
    }

    /// Computes statistics relative to `now`.
    ///
    /// A user without a stored goal gets [`DEFAULT_DAILY_GOAL`] persisted for
    /// them. A failure to persist that default is logged and the default is
    /// used anyway.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] if the goal or entries cannot be read.
    pub async fn stats_at(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> Result<HydrationStats, ServiceError> {
        let goal = match self.store.get_goal(user_id).await? {
            Some(goal) => goal,
            None => match self.store.init_goal(user_id, DEFAULT_DAILY_GOAL).await {
                Ok(goal) => {
                    tracing::info!(%user_id, goal, "default goal created");
                    goal
                }
                Err(e) => {
                    tracing::warn!(%user_id, error = %e, "failed to create default goal");
                    DEFAULT_DAILY_GOAL
                }
            },
        };

        let entries = self.store.list_entries(user_id).await?;
        Ok(compute_stats(&entries, goal, now))
    }

    /// Sets the user's daily goal, returning the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] when `goal < 1` and
    /// [`ServiceError::Storage`] on write failure.
    pub async fn update_goal(&self, user_id: UserId, goal: i32) -> Result<i32, ServiceError> {
        if !validate_goal(goal) {
            return Err(ServiceError::InvalidRequest(
                "goal must be at least 1".to_string(),
            ));
        }

        self.store.upsert_goal(user_id, goal).await?;
        tracing::info!(%user_id, goal, "goal updated");
        Ok(goal)
    }
}
