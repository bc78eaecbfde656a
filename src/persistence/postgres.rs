//! PostgreSQL implementation of the persistence layer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use super::{EntryStore, StoreError, UserStore};
use crate::domain::{EntryId, HydrationEntry, NewUser, User, UserId};

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

type EntryRow = (Uuid, Uuid, i32, DateTime<Utc>, String);
type UserRow = (Uuid, String, String, String, DateTime<Utc>);

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool with the given sizing and acquire timeout.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the database is unreachable.
    pub async fn connect(
        url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: std::time::Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .connect(url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.into()))
    }
}

/// Maps unique-constraint violations to [`StoreError::Conflict`].
fn classify(err: sqlx::Error, conflict_message: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::Conflict(conflict_message.to_string())
        }
        _ => StoreError::Database(err),
    }
}

fn entry_from_row((id, user_id, amount, timestamp, kind): EntryRow) -> HydrationEntry {
    HydrationEntry {
        id: EntryId::from_uuid(id),
        user_id: UserId::from_uuid(user_id),
        amount,
        timestamp,
        kind,
    }
}

fn user_from_row((id, username, email, password_hash, created_at): UserRow) -> User {
    User {
        id: UserId::from_uuid(id),
        username,
        email,
        password_hash,
        created_at,
    }
}

#[async_trait]
impl EntryStore for PostgresStore {
    async fn list_entries(&self, user_id: UserId) -> Result<Vec<HydrationEntry>, StoreError> {
        let rows = sqlx::query_as::<_, EntryRow>(
            "SELECT id, user_id, amount, timestamp, type FROM hydration_entries \
             WHERE user_id = $1 ORDER BY timestamp DESC",
        )
        .bind(*user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(entry_from_row).collect())
    }

    async fn insert_entry(&self, entry: &HydrationEntry) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO hydration_entries (id, user_id, amount, timestamp, type) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(*entry.id.as_uuid())
        .bind(*entry.user_id.as_uuid())
        .bind(entry.amount)
        .bind(entry.timestamp)
        .bind(&entry.kind)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_goal(&self, user_id: UserId) -> Result<Option<i32>, StoreError> {
        let goal = sqlx::query_scalar::<_, i32>(
            "SELECT daily_goal FROM user_goals WHERE user_id = $1",
        )
        .bind(*user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(goal)
    }

    async fn upsert_goal(&self, user_id: UserId, daily_goal: i32) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO user_goals (user_id, daily_goal) VALUES ($1, $2) \
             ON CONFLICT (user_id) DO UPDATE \
             SET daily_goal = EXCLUDED.daily_goal, updated_at = NOW()",
        )
        .bind(*user_id.as_uuid())
        .bind(daily_goal)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn init_goal(&self, user_id: UserId, daily_goal: i32) -> Result<i32, StoreError> {
        sqlx::query(
            "INSERT INTO user_goals (user_id, daily_goal) VALUES ($1, $2) \
             ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(*user_id.as_uuid())
        .bind(daily_goal)
        .execute(&self.pool)
        .await?;

        Ok(self.get_goal(user_id).await?.unwrap_or(daily_goal))
    }
}

#[async_trait]
impl UserStore for PostgresStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (id, username, email, password) VALUES ($1, $2, $3, $4) \
             RETURNING id, username, email, password, created_at",
        )
        .bind(*user.id.as_uuid())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "username or email already exists"))?;

        Ok(user_from_row(row))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, password, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(user_from_row))
    }
}
