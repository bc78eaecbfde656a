//! Hydration endpoint handlers: entries, stats, goal.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router, middleware};

use crate::api::dto::{CreateEntryRequest, UpdateGoalRequest, UpdateGoalResponse};
use crate::app_state::HydrationState;
use crate::auth::{AuthUser, TokenService, require_auth};
use crate::domain::{HydrationEntry, HydrationStats, NewEntry};
use crate::error::{ErrorResponse, ServiceError};

/// `POST /entries` — Log an intake.
///
/// # Errors
///
/// Returns [`ServiceError`] on invalid input or storage failure.
#[utoipa::path(
    post,
    path = "/api/v1/entries",
    tag = "Hydration",
    summary = "Add hydration entry",
    description = "Logs a new intake for the authenticated user. `amount` must be at least 1 and `type` must not be empty.",
    security(("bearer_auth" = [])),
    request_body = CreateEntryRequest,
    responses(
        (status = 201, description = "Entry created", body = HydrationEntry),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_entry(
    State(state): State<HydrationState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Json(req) = payload?;
    let entry = state
        .hydration_service
        .log_entry(NewEntry {
            user_id: user.user_id,
            amount: req.amount,
            kind: req.kind,
            timestamp: req.timestamp,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// `GET /entries` — All of the caller's entries, newest first.
///
/// # Errors
///
/// Returns [`ServiceError::Storage`] on query failure.
#[utoipa::path(
    get,
    path = "/api/v1/entries",
    tag = "Hydration",
    summary = "Get all hydration entries",
    description = "Returns every entry of the authenticated user, newest first.",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Entry list", body = Vec<HydrationEntry>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_entries(
    State(state): State<HydrationState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ServiceError> {
    let entries = state.hydration_service.list_entries(user.user_id).await?;
    Ok(Json(entries))
}

/// `GET /stats` — Today/week/month totals and goal progress.
///
/// # Errors
///
/// Returns [`ServiceError::Storage`] on query failure.
#[utoipa::path(
    get,
    path = "/api/v1/stats",
    tag = "Hydration",
    summary = "Get hydration stats",
    description = "Totals for the current UTC day, the trailing 7 days, and the trailing calendar month, plus percentage of the daily goal reached today.",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Statistics", body = HydrationStats),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_stats(
    State(state): State<HydrationState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ServiceError> {
    let stats = state.hydration_service.stats(user.user_id).await?;
    Ok(Json(stats))
}

/// `PUT /goal` — Set the daily goal.
///
/// # Errors
///
/// Returns [`ServiceError`] on invalid goal or storage failure.
#[utoipa::path(
    put,
    path = "/api/v1/goal",
    tag = "Hydration",
    summary = "Update daily goal",
    description = "Sets the authenticated user's daily goal in milliliters. Must be at least 1.",
    security(("bearer_auth" = [])),
    request_body = UpdateGoalRequest,
    responses(
        (status = 200, description = "Goal updated", body = UpdateGoalResponse),
        (status = 400, description = "Invalid goal", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn update_goal(
    State(state): State<HydrationState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<UpdateGoalRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Json(req) = payload?;
    let goal = state
        .hydration_service
        .update_goal(user.user_id, req.goal)
        .await?;

    Ok(Json(UpdateGoalResponse {
        message: "Goal updated successfully".to_string(),
        goal,
    }))
}

/// Hydration routes, all behind [`require_auth`].
pub fn routes(tokens: Arc<TokenService>) -> Router<HydrationState> {
    Router::new()
        .route("/entries", post(create_entry).get(list_entries))
        .route("/stats", get(get_stats))
        .route("/goal", put(update_goal))
        .route_layer(middleware::from_fn_with_state(tokens, require_auth))
}
