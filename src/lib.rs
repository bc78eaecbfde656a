//! # hydration-tracker
//!
//! Two REST services for tracking daily water intake: an auth service that
//! registers users and issues bearer tokens, and a hydration service that
//! records intake entries, manages a per-user daily goal, and reports
//! today/week/month totals against that goal.
//!
//! Both services verify the same HS256 tokens and may share one store.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── Auth router (api/)          ├── Hydration router (api/)
//!     │     require_auth (auth/)      │     require_auth (auth/)
//!     │                               │
//!     ├── AuthService (service/)      ├── HydrationService (service/)
//!     │     TokenService, argon2      │     compute_stats (domain/)
//!     │                               │
//!     └── UserStore ─────┬────────────┴── EntryStore
//!                        │
//!          PostgreSQL or in-memory (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod server;
pub mod service;
