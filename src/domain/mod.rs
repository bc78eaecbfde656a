//! Domain layer: identifiers, entries, goals, users, and the statistics
//! aggregator.
//!
//! Nothing in here performs I/O. Storage lives in [`crate::persistence`],
//! orchestration in [`crate::service`].

pub mod entry;
pub mod goal;
pub mod ids;
pub mod stats;
pub mod user;
pub mod validation;

pub use entry::{HydrationEntry, NewEntry};
pub use goal::{DEFAULT_DAILY_GOAL, UserGoal};
pub use ids::{EntryId, UserId};
pub use stats::{HydrationStats, compute_stats};
pub use user::{NewUser, User};
pub use validation::{validate_entry, validate_goal};
