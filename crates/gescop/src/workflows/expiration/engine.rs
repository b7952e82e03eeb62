//! Pure date math behind expiration status and alert priority.
//!
//! Every function here is total and stateless: the same inputs always give
//! the same answer, so callers may evaluate concurrently without coordination.

use super::clock::start_of_day;
use super::domain::{ExpirationStatus, Priority, CRITICAL_WITHIN_DAYS, HIGH_WITHIN_DAYS};
use chrono::{Duration, NaiveDate, NaiveDateTime};

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days from `now` until the start of `due_date`, rounded up.
///
/// Rounding up means a document due today still reports `0` for the rest of
/// the day instead of going negative at the first second past midnight.
pub fn days_remaining(due_date: Option<NaiveDate>, now: NaiveDateTime) -> Option<i64> {
    due_date.map(|due| ceil_days(start_of_day(due) - now))
}

pub fn classify(
    due_date: Option<NaiveDate>,
    threshold_days: u32,
    now: NaiveDateTime,
) -> ExpirationStatus {
    match days_remaining(due_date, now) {
        None => ExpirationStatus::NotApplicable,
        Some(days) if days < 0 => ExpirationStatus::Expired,
        Some(days) if days <= i64::from(threshold_days) => ExpirationStatus::ExpiringSoon,
        Some(_) => ExpirationStatus::Valid,
    }
}

/// Urgency bucket for a remaining-day count. Overdue counts are critical.
pub fn priority_of(days_remaining: i64) -> Priority {
    if days_remaining <= CRITICAL_WITHIN_DAYS {
        Priority::Critical
    } else if days_remaining <= HIGH_WITHIN_DAYS {
        Priority::High
    } else {
        Priority::Medium
    }
}

fn ceil_days(delta: Duration) -> i64 {
    // num_seconds truncates toward zero, which already rounds negatives up.
    let mut seconds = delta.num_seconds();
    if delta > Duration::seconds(seconds) {
        seconds += 1;
    }

    let days = seconds.div_euclid(SECONDS_PER_DAY);
    if seconds.rem_euclid(SECONDS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}
