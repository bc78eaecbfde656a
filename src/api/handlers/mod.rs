//! REST endpoint handlers organized by service.

pub mod auth;
pub mod hydration;
pub mod system;
