//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Parsing goes through a lookup function
//! so tests can feed values without touching the process environment.

use std::net::SocketAddr;

use secrecy::SecretString;

/// Configuration errors that abort startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A listen address could not be parsed.
    #[error("invalid socket address in {key}: {value}")]
    InvalidAddr {
        /// Environment variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },

    /// A required variable is unset or empty.
    #[error("{0} env variable not set")]
    Missing(&'static str),
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per line.
    Json,
}

/// Top-level configuration shared by both services.
///
/// Loaded once at startup via [`ServiceConfig::from_env`].
#[derive(Debug)]
pub struct ServiceConfig {
    /// Bind address of the auth service (e.g. `0.0.0.0:8081`).
    pub auth_listen_addr: SocketAddr,

    /// Bind address of the hydration service (e.g. `0.0.0.0:8082`).
    pub hydration_listen_addr: SocketAddr,

    /// PostgreSQL connection string.
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Minimum idle connections in the pool.
    pub database_min_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,

    /// Use PostgreSQL when `true`, the in-memory store otherwise.
    pub persistence_enabled: bool,

    /// Apply embedded migrations on startup.
    pub run_migrations: bool,

    /// HMAC secret for signing and verifying tokens.
    pub jwt_secret: SecretString,

    /// Token lifetime in hours.
    pub token_ttl_hours: i64,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Log output format.
    pub log_format: LogFormat,
}

impl ServiceConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `JWT_SECRET` is missing or a listen
    /// address cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `JWT_SECRET` is missing or a listen
    /// address cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_listen_addr = parse_addr(&lookup, "AUTH_LISTEN_ADDR", "0.0.0.0:8081")?;
        let hydration_listen_addr =
            parse_addr(&lookup, "HYDRATION_LISTEN_ADDR", "0.0.0.0:8082")?;

        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| database_url_from_parts(&lookup));

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|v| !v.is_empty())
            .map(SecretString::from)
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            auth_listen_addr,
            hydration_listen_addr,
            database_url,
            database_max_connections: parse_env(&lookup, "DATABASE_MAX_CONNECTIONS", 10),
            database_min_connections: parse_env(&lookup, "DATABASE_MIN_CONNECTIONS", 2),
            database_connect_timeout_secs: parse_env(&lookup, "DATABASE_CONNECT_TIMEOUT_SECS", 5),
            persistence_enabled: parse_env_bool(&lookup, "PERSISTENCE_ENABLED", true),
            run_migrations: parse_env_bool(&lookup, "RUN_MIGRATIONS", true),
            jwt_secret,
            token_ttl_hours: parse_env(&lookup, "TOKEN_TTL_HOURS", 24),
            request_timeout_secs: parse_env(&lookup, "REQUEST_TIMEOUT_SECS", 30),
            log_format,
        })
    }
}

/// Assembles a connection string from the individual `DB_*` variables.
fn database_url_from_parts<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
    format!(
        "postgres://{}:{}@{}:{}/{}?sslmode={}",
        get("DB_USER", "postgres"),
        get("DB_PASSWORD", "password"),
        get("DB_HOST", "localhost"),
        get("DB_PORT", "5432"),
        get("DB_NAME", "hydration_tracking"),
        get("DB_SSL_MODE", "disable"),
    )
}

fn parse_addr<F>(lookup: &F, key: &'static str, default: &str) -> Result<SocketAddr, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    value
        .parse()
        .map_err(|_| ConfigError::InvalidAddr { key, value })
}

/// Parses a variable as `T`, returning `default` on missing or invalid
/// values.
fn parse_env<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Parses a variable as a boolean. Accepts `"true"`, `"1"`, `"false"`,
/// `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.to_ascii_lowercase()).as_deref() {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        _ => default,
    }
}
