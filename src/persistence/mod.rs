//! Persistence layer: entry, goal, and user storage.
//!
//! Services depend on the [`EntryStore`] and [`UserStore`] traits only. Two
//! implementations exist: [`postgres::PostgresStore`] backed by
//! `sqlx::PgPool`, and [`memory::MemoryStore`] for tests and database-less
//! runs. The concrete store is chosen at startup and injected; there is no
//! global handle.

pub mod memory;
pub mod postgres;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::{HydrationEntry, NewUser, User, UserId};

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Storage failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint was violated.
    #[error("{0}")]
    Conflict(String),

    /// The database rejected a query or could not be reached.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Hydration entries and per-user daily goals.
#[async_trait]
pub trait EntryStore: Debug + Send + Sync {
    /// Returns every entry owned by `user_id`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on query failure.
    async fn list_entries(&self, user_id: UserId) -> Result<Vec<HydrationEntry>, StoreError>;

    /// Persists a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on write failure.
    async fn insert_entry(&self, entry: &HydrationEntry) -> Result<(), StoreError>;

    /// Returns the user's daily goal, or `None` if none was ever stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on query failure.
    async fn get_goal(&self, user_id: UserId) -> Result<Option<i32>, StoreError>;

    /// Inserts or overwrites the user's goal atomically. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on write failure.
    async fn upsert_goal(&self, user_id: UserId, daily_goal: i32) -> Result<(), StoreError>;

    /// Stores `daily_goal` only if the user has no goal yet, returning the
    /// goal in effect afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on write failure.
    async fn init_goal(&self, user_id: UserId, daily_goal: i32) -> Result<i32, StoreError>;
}

/// Registered user accounts.
#[async_trait]
pub trait UserStore: Debug + Send + Sync {
    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] when the username or email is taken.
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Looks a user up by exact username.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on query failure.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
}
