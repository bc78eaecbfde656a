//! Bearer-token middleware shared by both services.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::token::TokenService;
use crate::domain::UserId;
use crate::error::ServiceError;

/// Authenticated caller, taken from validated token claims.
///
/// Inserted into request extensions by [`require_auth`]; handlers read it
/// with `Extension<AuthUser>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Authenticated user.
    pub user_id: UserId,
    /// Username carried in the token.
    pub username: String,
}

/// JWT validation middleware.
///
/// Extracts the `Authorization: Bearer <token>` header and validates the
/// token signature and expiry. On success, inserts [`AuthUser`] into request
/// extensions for handlers to use.
///
/// # Errors
///
/// Returns [`ServiceError::Unauthorized`] when the header is missing, is not
/// a bearer credential, or carries an invalid or expired token.
pub async fn require_auth(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ServiceError> {
    let user = {
        let auth_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or_else(|| ServiceError::Unauthorized("authorization header required".into()))?;

        let token = auth_header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ServiceError::Unauthorized("invalid token".into()))?;

        let claims = tokens.validate_token(token)?;
        AuthUser {
            user_id: claims.user_id,
            username: claims.username,
        }
    };

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
