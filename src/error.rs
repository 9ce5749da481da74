//! Error types for snapshot decoding.
//!
//! The aggregation itself is total: absent optionals and malformed clock
//! strings degrade to zero, and every ratio guards its denominator. The
//! only fallible surface is decoding the fetch layer's JSON payload.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to decode week snapshot: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Shift dated {date} falls outside the audit week starting {week_start}")]
    ShiftOutsideWeek {
        date: NaiveDate,
        week_start: NaiveDate,
    },
}
