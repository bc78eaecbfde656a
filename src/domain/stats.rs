//! Rolling hydration statistics.
//!
//! [`compute_stats`] turns one user's entry history plus their goal into a
//! [`HydrationStats`] summary. It performs no I/O and reads no clock: the
//! reference instant is always passed in by the caller.
//!
//! # Windows
//!
//! | Window | Predicate                                   |
//! |--------|---------------------------------------------|
//! | today  | UTC calendar date of entry == date of `now` |
//! | week   | `timestamp > now - 7 days`                  |
//! | month  | `timestamp > now - 1 calendar month`        |
//!
//! Windows are evaluated independently, so a single entry may count toward
//! all three totals.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::HydrationEntry;

/// Derived intake summary. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HydrationStats {
    /// Sum of amounts logged on the current UTC calendar day.
    #[schema(example = 1500)]
    pub total_today: i64,
    /// Sum of amounts logged in the trailing seven days.
    #[schema(example = 10500)]
    pub total_week: i64,
    /// Sum of amounts logged in the trailing calendar month.
    #[schema(example = 45000)]
    pub total_month: i64,
    /// The user's current daily goal.
    #[schema(example = 2000)]
    pub goal: i32,
    /// `total_today * 100 / goal`, truncated; `0` when `goal <= 0`.
    #[schema(example = 75)]
    pub goal_percentage: i64,
}

/// Aggregates `entries` into today/week/month totals relative to `now`.
///
/// Callers must pass entries belonging to a single user. Order does not
/// matter. Never fails: a non-positive `goal` yields a percentage of `0`.
#[must_use]
pub fn compute_stats(entries: &[HydrationEntry], goal: i32, now: DateTime<Utc>) -> HydrationStats {
    let today = now.date_naive();
    let week_start = now - Duration::days(7);
    // Out-of-range subtraction only happens near DateTime::MIN; count everything then.
    let month_start = now
        .checked_sub_months(Months::new(1))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    let mut stats = HydrationStats {
        total_today: 0,
        total_week: 0,
        total_month: 0,
        goal,
        goal_percentage: 0,
    };

    for entry in entries {
        let amount = i64::from(entry.amount);
        if entry.timestamp.date_naive() == today {
            stats.total_today += amount;
        }
        if entry.timestamp > week_start {
            stats.total_week += amount;
        }
        if entry.timestamp > month_start {
            stats.total_month += amount;
        }
    }

    stats.goal_percentage = goal_percentage(stats.total_today, goal);
    stats
}

/// Truncating integer percentage of `goal` reached by `total`.
fn goal_percentage(total: i64, goal: i32) -> i64 {
    if goal <= 0 {
        return 0;
    }
    total * 100 / i64::from(goal)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{EntryId, UserId};
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        let Some(t) = Utc.with_ymd_and_hms(y, m, d, h, min, 0).single() else {
            panic!("valid timestamp");
        };
        t
    }

    fn entry(amount: i32, timestamp: DateTime<Utc>) -> HydrationEntry {
        HydrationEntry {
            id: EntryId::new(),
            user_id: UserId::new(),
            amount,
            timestamp,
            kind: "water".to_string(),
        }
    }

    #[test]
    fn concrete_scenario() {
        let now = at(2024, 6, 15, 18, 0);
        let entries = vec![
            entry(200, now - Duration::hours(1)),
            entry(300, now - Duration::days(2)),
            entry(400, now - Duration::days(10)),
        ];

        let stats = compute_stats(&entries, 1000, now);
        assert_eq!(stats.total_today, 200);
        assert_eq!(stats.total_week, 500);
        assert_eq!(stats.total_month, 900);
        assert_eq!(stats.goal, 1000);
        assert_eq!(stats.goal_percentage, 20);
    }

    #[test]
    fn empty_history_is_all_zero() {
        let now = at(2024, 6, 15, 12, 0);
        for goal in [0, 1, 2000] {
            let stats = compute_stats(&[], goal, now);
            assert_eq!(stats.total_today, 0);
            assert_eq!(stats.total_week, 0);
            assert_eq!(stats.total_month, 0);
            assert_eq!(stats.goal_percentage, 0);
            assert_eq!(stats.goal, goal);
        }
    }

    #[test]
    fn zero_or_negative_goal_yields_zero_percentage() {
        let now = at(2024, 6, 15, 12, 0);
        let entries = vec![entry(500, now)];
        assert_eq!(compute_stats(&entries, 0, now).goal_percentage, 0);
        assert_eq!(compute_stats(&entries, -5, now).goal_percentage, 0);
    }

    #[test]
    fn percentage_truncates() {
        let now = at(2024, 6, 15, 12, 0);
        let entries = vec![entry(999, now)];
        // 99.9% truncates to 99
        assert_eq!(compute_stats(&entries, 1000, now).goal_percentage, 99);
        // over-achievement is not capped
        let entries = vec![entry(2500, now)];
        assert_eq!(compute_stats(&entries, 1000, now).goal_percentage, 250);
    }

    #[test]
    fn week_boundary_is_exclusive() {
        let now = at(2024, 6, 15, 12, 0);
        let exact = entry(100, now - Duration::days(7));
        let inside = entry(10, now - Duration::days(7) + Duration::seconds(1));

        let stats = compute_stats(&[exact, inside], 2000, now);
        assert_eq!(stats.total_week, 10);
        assert_eq!(stats.total_month, 110);
    }

    #[test]
    fn month_boundary_is_exclusive_and_calendar_based() {
        let now = at(2024, 3, 15, 12, 0);
        let exact = entry(100, at(2024, 2, 15, 12, 0));
        let inside = entry(10, at(2024, 2, 15, 12, 1));

        let stats = compute_stats(&[exact, inside], 2000, now);
        assert_eq!(stats.total_month, 10);
    }

    #[test]
    fn month_start_clamps_to_end_of_shorter_month() {
        // March 31 minus one month is February 29 in a leap year.
        let now = at(2024, 3, 31, 12, 0);
        let before = entry(100, at(2024, 2, 29, 11, 0));
        let after = entry(10, at(2024, 2, 29, 13, 0));

        let stats = compute_stats(&[before, after], 2000, now);
        assert_eq!(stats.total_month, 10);
    }

    #[test]
    fn today_uses_utc_calendar_date() {
        let now = at(2024, 6, 15, 0, 30);
        // Two hours earlier is still within the week but on the previous day.
        let yesterday = entry(300, at(2024, 6, 14, 22, 30));
        let midnight = entry(50, at(2024, 6, 15, 0, 0));

        let stats = compute_stats(&[yesterday, midnight], 2000, now);
        assert_eq!(stats.total_today, 50);
        assert_eq!(stats.total_week, 350);
    }

    #[test]
    fn future_entries_on_same_day_count_as_today() {
        let now = at(2024, 6, 15, 8, 0);
        let later = entry(120, at(2024, 6, 15, 20, 0));

        let stats = compute_stats(&[later], 2000, now);
        assert_eq!(stats.total_today, 120);
        assert_eq!(stats.total_week, 120);
    }

    #[test]
    fn is_idempotent() {
        let now = at(2024, 6, 15, 12, 0);
        let entries = vec![
            entry(200, now - Duration::hours(3)),
            entry(700, now - Duration::days(20)),
        ];
        let first = compute_stats(&entries, 1500, now);
        let second = compute_stats(&entries, 1500, now);
        assert_eq!(first, second);
    }

    #[test]
    fn order_of_entries_does_not_matter() {
        let now = at(2024, 6, 15, 12, 0);
        let mut entries = vec![
            entry(200, now - Duration::hours(3)),
            entry(300, now - Duration::days(4)),
            entry(700, now - Duration::days(20)),
        ];
        let forward = compute_stats(&entries, 1500, now);
        entries.reverse();
        assert_eq!(compute_stats(&entries, 1500, now), forward);
    }

    #[test]
    fn totals_are_nested_for_past_entries() {
        // Deterministic sweep over generated histories (xorshift64).
        let now = at(2024, 3, 31, 23, 59);
        let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };

        for _ in 0..500 {
            let len = next() % 40;
            let entries: Vec<HydrationEntry> = (0..len)
                .map(|_| {
                    let amount = i32::try_from(next() % 2000 + 1).unwrap_or(1);
                    let back_secs = i64::try_from(next() % (45 * 24 * 3600)).unwrap_or(0);
                    entry(amount, now - Duration::seconds(back_secs))
                })
                .collect();

            let stats = compute_stats(&entries, 2000, now);
            assert!(stats.total_month >= stats.total_week);
            assert!(stats.total_week >= stats.total_today);
            assert!(stats.total_today >= 0);
        }
    }
}
