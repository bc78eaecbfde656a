//! Service layer: business logic orchestration.
//!
//! [`AuthService`] owns registration and login; [`HydrationService`] owns
//! entries, statistics, and goals. Both receive their stores at
//! construction.

pub mod auth_service;
pub mod hydration_service;

pub use auth_service::AuthService;
pub use hydration_service::HydrationService;
