//! Hydration service DTOs: entries and goals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/v1/entries`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEntryRequest {
    /// Amount consumed in milliliters (>= 1).
    #[schema(example = 250, minimum = 1)]
    pub amount: i32,
    /// Drink label, e.g. `"water"`.
    #[serde(rename = "type")]
    #[schema(example = "water")]
    pub kind: String,
    /// When the intake happened (RFC 3339). Defaults to now.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Request body for `PUT /api/v1/goal`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateGoalRequest {
    /// New daily goal in milliliters (>= 1).
    #[schema(example = 2000, minimum = 1)]
    pub goal: i32,
}

/// Response body for `PUT /api/v1/goal`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateGoalResponse {
    /// Confirmation message.
    #[schema(example = "Goal updated successfully")]
    pub message: String,
    /// The stored goal.
    #[schema(example = 2000)]
    pub goal: i32,
}
