//! OpenAPI documents for both services.
//!
//! Schemas referenced by the annotated handlers are collected
//! automatically; the bearer scheme is added by [`SecurityAddon`].

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth, hydration, system};

/// Path the OpenAPI JSON is served from.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Path the Swagger UI is mounted at.
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// Registers the `bearer_auth` JWT scheme used by protected routes.
#[derive(Debug)]
pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// OpenAPI document of the auth service.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Auth Service API", description = "User registration, login, and token-backed profile lookup."),
    paths(
        auth::register,
        auth::login,
        auth::profile,
        system::auth_health_handler,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Accounts and tokens"),
        (name = "System", description = "Service health"),
    )
)]
pub struct AuthApiDoc;

/// OpenAPI document of the hydration service.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Hydration Service API", description = "Intake logging, statistics, and daily goals."),
    paths(
        hydration::create_entry,
        hydration::list_entries,
        hydration::get_stats,
        hydration::update_goal,
        system::hydration_health_handler,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Hydration", description = "Entries, statistics, and goals"),
        (name = "System", description = "Service health"),
    )
)]
pub struct HydrationApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_doc_lists_routes_and_scheme() {
        let doc = AuthApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/register"));
        assert!(doc.paths.paths.contains_key("/api/v1/login"));
        assert!(doc.paths.paths.contains_key("/api/v1/profile"));
        assert!(doc.paths.paths.contains_key("/health"));
        let has_scheme = doc
            .components
            .as_ref()
            .is_some_and(|c| c.security_schemes.contains_key("bearer_auth"));
        assert!(has_scheme);
    }

    #[test]
    fn hydration_doc_lists_routes() {
        let doc = HydrationApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/entries"));
        assert!(doc.paths.paths.contains_key("/api/v1/stats"));
        assert!(doc.paths.paths.contains_key("/api/v1/goal"));
        assert!(!doc.paths.paths.contains_key("/api/v1/login"));
    }
}
