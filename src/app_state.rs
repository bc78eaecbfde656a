//! Shared application state injected into Axum handlers.

use std::sync::Arc;

use crate::auth::TokenService;
use crate::persistence::{EntryStore, UserStore};
use crate::service::{AuthService, HydrationService};

/// State of the auth service, available to handlers via `State`.
#[derive(Debug, Clone)]
pub struct AuthState {
    /// Registration and login logic.
    pub auth_service: Arc<AuthService>,
    /// Token verification for protected routes.
    pub tokens: Arc<TokenService>,
}

impl AuthState {
    /// Wires the auth service over `users`.
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(users, Arc::clone(&tokens))),
            tokens,
        }
    }
}

/// State of the hydration service, available to handlers via `State`.
#[derive(Debug, Clone)]
pub struct HydrationState {
    /// Entry, statistics, and goal logic.
    pub hydration_service: Arc<HydrationService>,
    /// Token verification for every route.
    pub tokens: Arc<TokenService>,
}

impl HydrationState {
    /// Wires the hydration service over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn EntryStore>, tokens: Arc<TokenService>) -> Self {
        Self {
            hydration_service: Arc::new(HydrationService::new(store)),
            tokens,
        }
    }
}
