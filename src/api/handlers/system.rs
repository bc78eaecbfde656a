//! System endpoints: health check.

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

/// Name reported by the auth service health check.
pub const AUTH_SERVICE_NAME: &str = "auth-service";

/// Name reported by the hydration service health check.
pub const HYDRATION_SERVICE_NAME: &str = "hydration-service";

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    service: String,
    timestamp: String,
    version: String,
}

fn health(service: &'static str) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: service.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// `GET /health` — Auth service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, name, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn auth_health_handler() -> impl IntoResponse {
    health(AUTH_SERVICE_NAME)
}

/// `GET /health` — Hydration service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, name, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn hydration_health_handler() -> impl IntoResponse {
    health(HYDRATION_SERVICE_NAME)
}

/// Auth service system routes, mounted at the root level.
pub fn auth_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(auth_health_handler))
}

/// Hydration service system routes, mounted at the root level.
pub fn hydration_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(hydration_health_handler))
}
