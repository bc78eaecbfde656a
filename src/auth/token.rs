//! HMAC-signed bearer tokens.
//!
//! Tokens are standard three-segment JWTs (`header.payload.signature`)
//! signed with HS256. Both services share the secret, so the hydration
//! service verifies identity without calling the auth service.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret as _, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user.
    pub user_id: UserId,
    /// Username at the time of issuance.
    pub username: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Token issuance or validation failure.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The token's `exp` claim is in the past.
    #[error("token expired")]
    Expired,

    /// Bad signature, wrong algorithm, or malformed token.
    #[error("invalid token: {0}")]
    Invalid(jsonwebtoken::errors::Error),

    /// Signing failed.
    #[error("failed to encode token: {0}")]
    Encode(jsonwebtoken::errors::Error),
}

/// Issues and validates HS256 tokens with a fixed lifetime.
#[derive(Debug)]
pub struct TokenService {
    secret: SecretString,
    ttl: Duration,
    validation: Validation,
}

impl TokenService {
    /// Creates a token service signing with `secret`; tokens live for `ttl`.
    #[must_use]
    pub fn new(secret: SecretString, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "iat"]);
        Self {
            secret,
            ttl,
            validation,
        }
    }

    /// Token lifetime.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.secret.expose_secret().as_bytes())
    }

    fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.secret.expose_secret().as_bytes())
    }

    /// Issues a token for `user_id` valid from now for [`Self::ttl`].
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Encode`] if signing fails.
    pub fn issue_token(&self, user_id: UserId, username: &str) -> Result<String, TokenError> {
        self.issue_token_at(user_id, username, Utc::now())
    }

    /// Issues a token as if the current time were `issued_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Encode`] if signing fails.
    pub fn issue_token_at(
        &self,
        user_id: UserId,
        username: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            user_id,
            username: username.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key())
            .map_err(TokenError::Encode)
    }

    /// Verifies signature, algorithm, and expiry, returning the claims.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Expired`] for expired tokens and
    /// [`TokenError::Invalid`] for anything else that fails verification.
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key(), &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e),
            })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn service(secret: &str) -> TokenService {
        TokenService::new(SecretString::from(secret.to_string()), Duration::hours(24))
    }

    #[test]
    fn issue_then_validate() {
        let tokens = service("test-secret-key");
        let user_id = UserId::new();
        let Ok(token) = tokens.issue_token(user_id, "john_doe") else {
            panic!("token issued");
        };
        assert_eq!(token.split('.').count(), 3);

        let Ok(claims) = tokens.validate_token(&token) else {
            panic!("token should validate");
        };
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.username, "john_doe");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = service("test-secret-key");
        let issued = Utc::now() - Duration::hours(48);
        let Ok(token) = tokens.issue_token_at(UserId::new(), "old", issued) else {
            panic!("token issued");
        };
        assert!(matches!(
            tokens.validate_token(&token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let Ok(token) = service("secret-a").issue_token(UserId::new(), "eve") else {
            panic!("token issued");
        };
        assert!(matches!(
            service("secret-b").validate_token(&token),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let tokens = service("test-secret-key");
        let Ok(token) = tokens.issue_token(UserId::new(), "mallory") else {
            panic!("token issued");
        };
        let Ok(other) = tokens.issue_token(UserId::new(), "alice") else {
            panic!("token issued");
        };
        let mut parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        if let (Some(slot), Some(payload)) = (parts.get_mut(1), other_parts.get(1)) {
            *slot = *payload;
        }
        let forged = parts.join(".");
        assert!(tokens.validate_token(&forged).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let tokens = service("test-secret-key");
        assert!(tokens.validate_token("not.a.jwt").is_err());
        assert!(tokens.validate_token("").is_err());
    }

    #[test]
    fn tokens_for_different_users_differ() {
        let tokens = service("test-secret-key");
        let (Ok(a), Ok(b)) = (
            tokens.issue_token(UserId::new(), "a"),
            tokens.issue_token(UserId::new(), "b"),
        ) else {
            panic!("tokens issued");
        };
        assert_ne!(a, b);
    }
}
