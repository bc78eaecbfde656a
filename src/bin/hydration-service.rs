//! Hydration service entry point: entries, statistics, goals.

use std::time::Duration;

use hydration_tracker::api;
use hydration_tracker::app_state::HydrationState;
use hydration_tracker::config::ServiceConfig;
use hydration_tracker::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env()?;
    server::init_tracing(config.log_format);
    tracing::info!(addr = %config.hydration_listen_addr, "starting hydration-service");

    let stores = server::build_stores(&config).await?;
    let tokens = server::build_token_service(&config);

    let app = server::apply_layers(
        api::build_hydration_router(HydrationState::new(stores.entries, tokens)),
        Duration::from_secs(config.request_timeout_secs),
    );

    server::serve("hydration-service", config.hydration_listen_addr, app).await
}
