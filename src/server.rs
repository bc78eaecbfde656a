//! Process bootstrap shared by the binaries: tracing, store selection,
//! middleware stack, and graceful serving.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use axum::Router;
use secrecy::{ExposeSecret as _, SecretString};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::auth::TokenService;
use crate::config::{LogFormat, ServiceConfig};
use crate::persistence::{EntryStore, MemoryStore, PostgresStore, UserStore};

/// Both store handles, backed by the same underlying store.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Account storage for the auth service.
    pub users: Arc<dyn UserStore>,
    /// Entry and goal storage for the hydration service.
    pub entries: Arc<dyn EntryStore>,
}

impl Stores {
    /// Wraps a single store implementing both traits.
    pub fn shared<T>(store: T) -> Self
    where
        T: UserStore + EntryStore + 'static,
    {
        let store = Arc::new(store);
        Self {
            users: Arc::clone(&store) as Arc<dyn UserStore>,
            entries: store,
        }
    }
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// Opens the configured store: PostgreSQL when persistence is enabled,
/// in-memory otherwise.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn build_stores(config: &ServiceConfig) -> anyhow::Result<Stores> {
    if !config.persistence_enabled {
        tracing::warn!("persistence disabled, using in-memory store");
        return Ok(Stores::shared(MemoryStore::new()));
    }

    let store = PostgresStore::connect(
        &config.database_url,
        config.database_max_connections,
        config.database_min_connections,
        Duration::from_secs(config.database_connect_timeout_secs),
    )
    .await
    .context("failed to connect to database")?;
    tracing::info!("connected to database");

    if config.run_migrations {
        store.migrate().await.context("failed to run migrations")?;
        tracing::info!("database migrations applied");
    }

    Ok(Stores::shared(store))
}

/// Builds the token service from the configured secret and lifetime.
#[must_use]
pub fn build_token_service(config: &ServiceConfig) -> Arc<TokenService> {
    Arc::new(TokenService::new(
        SecretString::from(config.jwt_secret.expose_secret().to_string()),
        chrono::Duration::hours(config.token_ttl_hours),
    ))
}

/// Wraps a router with request tracing, permissive CORS, and a request
/// timeout.
pub fn apply_layers(router: Router, request_timeout: Duration) -> Router {
    router
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Binds `addr` and serves `router` until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(name: &'static str, addr: SocketAddr, router: Router) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {name} to {addr}"))?;
    tracing::info!(service = name, %addr, "server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context(|| format!("{name} server error"))?;

    tracing::info!(service = name, "server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
