//! Auth service DTOs: register, login, profile.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{User, UserId};

/// Request body for `POST /api/v1/register`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Unique login name (max 50 chars).
    #[schema(example = "john_doe")]
    pub username: String,
    /// Unique contact email.
    #[schema(example = "john@example.com")]
    pub email: String,
    /// Password, at least 6 characters.
    #[schema(example = "password123", min_length = 6)]
    pub password: String,
}

/// Response body for `POST /api/v1/register` (201 Created).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    /// Confirmation message.
    #[schema(example = "User registered successfully")]
    pub message: String,
    /// Identifier of the new user.
    pub user_id: UserId,
}

/// Request body for `POST /api/v1/login`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Login name.
    #[schema(example = "john_doe")]
    pub username: String,
    /// Password.
    #[schema(example = "password123")]
    pub password: String,
}

/// Public view of a user account.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    /// User identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// Response body for `POST /api/v1/login`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer token for the `Authorization` header.
    pub token: String,
    /// The authenticated user.
    pub user: UserInfo,
}

/// Response body for `GET /api/v1/profile`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    /// Authenticated user.
    pub user_id: UserId,
    /// Username carried in the token.
    pub username: String,
}
