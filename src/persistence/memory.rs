//! In-memory store used by tests and when persistence is disabled.
//!
//! Each collection sits behind its own [`tokio::sync::RwLock`], so reads of
//! one collection never wait on writes to another. Goal upserts happen under
//! a single write lock, which gives the same last-write-wins guarantee as the
//! PostgreSQL `ON CONFLICT` upsert.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{EntryStore, StoreError, UserStore};
use crate::domain::{HydrationEntry, NewUser, User, UserGoal, UserId};

/// Process-local store for users, entries, and goals.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<UserId, User>>,
    entries: RwLock<HashMap<UserId, Vec<HydrationEntry>>>,
    goals: RwLock<HashMap<UserId, UserGoal>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the full goal row for `user_id`, if any.
    #[cfg(test)]
    pub(crate) async fn goal_row(&self, user_id: UserId) -> Option<UserGoal> {
        self.goals.read().await.get(&user_id).cloned()
    }

    /// Number of stored goal rows.
    #[cfg(test)]
    pub(crate) async fn goal_count(&self) -> usize {
        self.goals.read().await.len()
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn list_entries(&self, user_id: UserId) -> Result<Vec<HydrationEntry>, StoreError> {
        let map = self.entries.read().await;
        let mut entries = map.get(&user_id).cloned().unwrap_or_default();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    async fn insert_entry(&self, entry: &HydrationEntry) -> Result<(), StoreError> {
        let mut map = self.entries.write().await;
        map.entry(entry.user_id).or_default().push(entry.clone());
        Ok(())
    }

    async fn get_goal(&self, user_id: UserId) -> Result<Option<i32>, StoreError> {
        Ok(self
            .goals
            .read()
            .await
            .get(&user_id)
            .map(|goal| goal.daily_goal))
    }

    async fn upsert_goal(&self, user_id: UserId, daily_goal: i32) -> Result<(), StoreError> {
        let now = Utc::now();
        let mut map = self.goals.write().await;
        map.entry(user_id)
            .and_modify(|goal| goal.set(daily_goal, now))
            .or_insert_with(|| UserGoal::new(user_id, daily_goal, now));
        Ok(())
    }

    async fn init_goal(&self, user_id: UserId, daily_goal: i32) -> Result<i32, StoreError> {
        let mut map = self.goals.write().await;
        let goal = map
            .entry(user_id)
            .or_insert_with(|| UserGoal::new(user_id, daily_goal, Utc::now()));
        Ok(goal.daily_goal)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut map = self.users.write().await;
        let taken = map
            .values()
            .any(|u| u.username == user.username || u.email == user.email);
        if taken || map.contains_key(&user.id) {
            return Err(StoreError::Conflict(
                "username or email already exists".to_string(),
            ));
        }
        let stored = User {
            id: user.id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        map.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let map = self.users.read().await;
        Ok(map.values().find(|u| u.username == username).cloned())
    }
}
