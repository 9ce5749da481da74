//! Reporting-week anchoring.
//!
//! Every per-day lookup in the audit keys off the schedule's
//! `week_start_date` and lowercase full day names. Nothing in this crate
//! reads the ambient clock; "the current week" is resolved from an explicit
//! reference instant the caller supplies, so results are deterministic and
//! testable.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

/// Lowercase full day names in schedule order (weeks start on Monday).
pub const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// The lowercase full day name for a date.
pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_monday() as usize]
}

/// The seven dates of a reporting week, in order from its start date.
pub fn week_dates(week_start: NaiveDate) -> [NaiveDate; 7] {
    let mut dates = [week_start; 7];
    for (offset, slot) in dates.iter_mut().enumerate() {
        *slot = week_start + Duration::days(offset as i64);
    }
    dates
}

/// True when `date` falls within the week beginning at `week_start`.
pub fn date_in_week(date: NaiveDate, week_start: NaiveDate) -> bool {
    date >= week_start && date < week_start + Duration::days(7)
}

/// The Monday of the week containing `reference`, in the store's timezone.
///
/// The reference instant is an explicit parameter rather than `Utc::now()`
/// so callers (and tests) control what "this week" means.
pub fn week_start_containing(reference: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    let local_date = reference.with_timezone(tz).date_naive();
    local_date - Duration::days(i64::from(local_date.weekday().num_days_from_monday()))
}
