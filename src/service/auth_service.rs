//! Auth service: registration and login.

use std::sync::{Arc, LazyLock};

use crate::auth::{TokenService, hash_password, verify_password};
use crate::domain::validation::{
    MIN_PASSWORD_LEN, validate_email, validate_password, validate_username,
};
use crate::domain::{NewUser, User, UserId};
use crate::error::ServiceError;
use crate::persistence::UserStore;

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Hash checked when the username is unknown, so both login failures cost
/// one argon2 verification.
static UNKNOWN_USER_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("unknown-user-placeholder").ok());

/// Orchestrates account creation and credential checks.
///
/// Owns the [`UserStore`] for accounts and the [`TokenService`] for
/// issuing bearer tokens on successful login.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    /// Creates a new `AuthService`.
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Returns a reference to the inner [`TokenService`].
    #[must_use]
    pub fn tokens(&self) -> &Arc<TokenService> {
        &self.tokens
    }

    /// Registers a new user and returns the assigned ID.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] for malformed fields,
    /// [`ServiceError::Conflict`] when the username or email is taken, and
    /// a 500-class error on storage or hashing failure.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserId, ServiceError> {
        if !validate_username(username) {
            return Err(ServiceError::InvalidRequest(
                "username is required and must be at most 50 characters".to_string(),
            ));
        }
        if !validate_email(email) {
            return Err(ServiceError::InvalidRequest(
                "email must be a valid address".to_string(),
            ));
        }
        if !validate_password(password) {
            return Err(ServiceError::InvalidRequest(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let password_hash = hash_password(password)?;
        let user = self
            .users
            .insert_user(NewUser {
                id: UserId::new(),
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user.id)
    }

    /// Checks credentials and issues a token.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Unauthorized`] for an unknown username or a
    /// wrong password (same message for both).
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, User), ServiceError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            if let Some(hash) = UNKNOWN_USER_HASH.as_deref() {
                let _ = verify_password(password, hash);
            }
            tracing::warn!(username, "login for unknown user");
            return Err(ServiceError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        if !verify_password(password, &user.password_hash) {
            tracing::warn!(username, "login with wrong password");
            return Err(ServiceError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.tokens.issue_token(user.id, &user.username)?;
        tracing::info!(user_id = %user.id, "user logged in");
        Ok((token, user))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use axum::http::StatusCode;
    use chrono::Duration;
    use secrecy::SecretString;

    fn make_service() -> AuthService {
        let tokens = Arc::new(TokenService::new(
            SecretString::from("auth-service-secret".to_string()),
            Duration::hours(24),
        ));
        AuthService::new(Arc::new(MemoryStore::new()), tokens)
    }

    #[tokio::test]
    async fn register_then_login() {
        let service = make_service();
        let Ok(user_id) = service
            .register("john_doe", "john@example.com", "password123")
            .await
        else {
            panic!("registration failed");
        };

        let Ok((token, user)) = service.login("john_doe", "password123").await else {
            panic!("login failed");
        };
        assert_eq!(user.id, user_id);
        assert_eq!(user.email, "john@example.com");
        assert_ne!(user.password_hash, "password123");

        let Ok(claims) = service.tokens().validate_token(&token) else {
            panic!("issued token should validate");
        };
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.username, "john_doe");
    }

    #[tokio::test]
    async fn register_rejects_bad_fields() {
        let service = make_service();
        let cases = [
            ("", "a@example.com", "password123"),
            ("user", "invalid-email", "password123"),
            ("user", "a@example.com", "123"),
        ];
        for (username, email, password) in cases {
            let Err(err) = service.register(username, email, password).await else {
                panic!("expected validation error for {username:?}/{email:?}");
            };
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(err.error_code(), 1001);
        }
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts() {
        let service = make_service();
        let first = service
            .register("john_doe", "john@example.com", "password123")
            .await;
        assert!(first.is_ok());

        let Err(err) = service
            .register("john_doe", "other@example.com", "password123")
            .await
        else {
            panic!("expected conflict");
        };
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let service = make_service();
        let _ = service
            .register("john_doe", "john@example.com", "password123")
            .await;

        let Err(wrong_password) = service.login("john_doe", "wrongpassword").await else {
            panic!("expected failure");
        };
        let Err(unknown_user) = service.login("nobody", "password123").await else {
            panic!("expected failure");
        };
        assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[test]
    fn unknown_user_hash_is_a_verifiable_phc_string() {
        let Some(hash) = UNKNOWN_USER_HASH.as_deref() else {
            panic!("placeholder hash should be computed");
        };
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("unknown-user-placeholder", hash));
        assert!(!verify_password("password123", hash));
    }
}
