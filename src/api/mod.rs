//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Service endpoints are mounted under `/api/v1`; `/health` and the API
//! docs sit at the root.

pub mod dto;
pub mod handlers;
pub mod openapi;

use std::sync::Arc;

use axum::Router;

use crate::app_state::{AuthState, HydrationState};

/// Builds the auth service router: register, login, profile, health.
pub fn build_auth_router(state: AuthState) -> Router {
    let tokens = Arc::clone(&state.tokens);
    let router = Router::new()
        .nest("/api/v1", handlers::auth::routes(tokens))
        .merge(handlers::system::auth_routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(swagger::<openapi::AuthApiDoc, _>());

    router.with_state(state)
}

/// Builds the hydration service router: entries, stats, goal, health.
pub fn build_hydration_router(state: HydrationState) -> Router {
    let tokens = Arc::clone(&state.tokens);
    let router = Router::new()
        .nest("/api/v1", handlers::hydration::routes(tokens))
        .merge(handlers::system::hydration_routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(swagger::<openapi::HydrationApiDoc, _>());

    router.with_state(state)
}

#[cfg(feature = "swagger-ui")]
fn swagger<D, S>() -> Router<S>
where
    D: utoipa::OpenApi,
    S: Clone + Send + Sync + 'static,
{
    utoipa_swagger_ui::SwaggerUi::new(openapi::SWAGGER_UI_PATH)
        .url(openapi::OPENAPI_JSON_PATH, D::openapi())
        .into()
}
