//! Data Transfer Objects for REST request/response serialization.
//!
//! Domain types that are returned verbatim (`HydrationEntry`,
//! `HydrationStats`) are serialized directly and have no DTO here.

pub mod auth_dto;
pub mod hydration_dto;

pub use auth_dto::*;
pub use hydration_dto::*;
