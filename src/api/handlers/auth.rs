//! Auth endpoint handlers: register, login, profile.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router, middleware};

use crate::api::dto::{
    LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, RegisterResponse, UserInfo,
};
use crate::app_state::AuthState;
use crate::auth::{AuthUser, TokenService, require_auth};
use crate::error::{ErrorResponse, ServiceError};

/// `POST /register` — Create a user account.
///
/// # Errors
///
/// Returns [`ServiceError`] on invalid fields or a duplicate username/email.
#[utoipa::path(
    post,
    path = "/api/v1/register",
    tag = "Auth",
    summary = "Register new user",
    description = "Creates an account. Username and email must be unique; the password must have at least 6 characters.",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Invalid input or user already exists", body = ErrorResponse),
    )
)]
pub async fn register(
    State(state): State<AuthState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Json(req) = payload?;
    let user_id = state
        .auth_service
        .register(&req.username, &req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id,
        }),
    ))
}

/// `POST /login` — Exchange credentials for a bearer token.
///
/// # Errors
///
/// Returns [`ServiceError::Unauthorized`] on bad credentials.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    tag = "Auth",
    summary = "Login user",
    description = "Checks credentials and returns a token valid for 24 hours together with the user record.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<AuthState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Json(req) = payload?;
    let (token, user) = state
        .auth_service
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(LoginResponse {
        token,
        user: UserInfo::from(&user),
    }))
}

/// `GET /profile` — Identity of the token holder.
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    tag = "Auth",
    summary = "Get user profile",
    description = "Returns the user ID and username carried by the bearer token.",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token holder", body = ProfileResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
pub async fn profile(Extension(user): Extension<AuthUser>) -> impl IntoResponse {
    Json(ProfileResponse {
        user_id: user.user_id,
        username: user.username,
    })
}

/// Auth routes. `/profile` sits behind [`require_auth`].
pub fn routes(tokens: Arc<TokenService>) -> Router<AuthState> {
    let protected = Router::new()
        .route("/profile", get(profile))
        .route_layer(middleware::from_fn_with_state(tokens, require_auth));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
}
