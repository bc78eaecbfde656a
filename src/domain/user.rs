//! Registered user accounts, as owned by the auth service.

use chrono::{DateTime, Utc};

use super::UserId;

/// A stored user account.
///
/// `password_hash` is a PHC-format argon2 string; the plaintext password is
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Unique contact email.
    pub email: String,
    /// Salted password hash.
    pub password_hash: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user. The password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Pre-assigned identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Salted password hash.
    pub password_hash: String,
}
