//! hydration-tracker entry point.
//!
//! Runs the auth and hydration services in one process over a shared store.

use std::sync::Arc;

use hydration_tracker::api;
use hydration_tracker::app_state::{AuthState, HydrationState};
use hydration_tracker::config::ServiceConfig;
use hydration_tracker::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env()?;
    server::init_tracing(config.log_format);
    tracing::info!(
        auth_addr = %config.auth_listen_addr,
        hydration_addr = %config.hydration_listen_addr,
        "starting hydration-tracker"
    );

    let stores = server::build_stores(&config).await?;
    let tokens = server::build_token_service(&config);
    let timeout = std::time::Duration::from_secs(config.request_timeout_secs);

    let auth_app = server::apply_layers(
        api::build_auth_router(AuthState::new(stores.users, Arc::clone(&tokens))),
        timeout,
    );
    let hydration_app = server::apply_layers(
        api::build_hydration_router(HydrationState::new(stores.entries, tokens)),
        timeout,
    );

    tokio::try_join!(
        server::serve("auth-service", config.auth_listen_addr, auth_app),
        server::serve("hydration-service", config.hydration_listen_addr, hydration_app),
    )?;

    Ok(())
}
