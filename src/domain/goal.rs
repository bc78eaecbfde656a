//! Per-user daily intake goal.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::UserId;

/// Goal assumed for users who never set one, in milliliters.
pub const DEFAULT_DAILY_GOAL: i32 = 2000;

/// A user's daily intake target. One row per user, upserted, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserGoal {
    /// Owner of the goal (primary key).
    pub user_id: UserId,
    /// Target intake per day in milliliters.
    pub daily_goal: i32,
    /// First time a goal was stored for this user.
    pub created_at: DateTime<Utc>,
    /// Last time the goal value changed.
    pub updated_at: DateTime<Utc>,
}

impl UserGoal {
    /// Creates a fresh goal row stamped with `now`.
    #[must_use]
    pub fn new(user_id: UserId, daily_goal: i32, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            daily_goal,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the goal value, keeping the creation time.
    pub fn set(&mut self, daily_goal: i32, now: DateTime<Utc>) {
        self.daily_goal = daily_goal;
        self.updated_at = now;
    }
}
