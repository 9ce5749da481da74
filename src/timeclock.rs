//! Time-clock string handling.
//!
//! Punch times arrive from the time-clock import as `"HH:MM"` strings.
//! A malformed or absent string degrades to 0.0 decimal hours rather than
//! failing the whole audit: a week in progress always produces a number,
//! possibly pinned at zero for unworked shifts.

use crate::types::Shift;

/// Parse an `"HH:MM"` (or `"HH:MM:SS"`) clock string to decimal hours.
///
/// Returns `None` for anything that doesn't parse cleanly.
pub fn try_parse_clock_time(value: &str) -> Option<f64> {
    let mut parts = value.trim().split(':');
    let hours: u32 = parts.next()?.parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    // A trailing seconds component is tolerated but ignored.
    if let Some(rest) = parts.next() {
        let _: u32 = rest.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(f64::from(hours) + f64::from(minutes) / 60.0)
}

/// Parse a clock string to decimal hours; absent or malformed yields 0.0.
pub fn parse_clock_time(value: Option<&str>) -> f64 {
    match value {
        None => 0.0,
        Some(raw) => try_parse_clock_time(raw).unwrap_or_else(|| {
            log::warn!("Unparseable clock time {:?}; treating as 0.0 hours", raw);
            0.0
        }),
    }
}

/// Hours actually worked on a shift, from its punch times.
///
/// The subtraction is clamped at zero, so an end punch that precedes the
/// start punch (missing punch, or an overnight shift like 22:00–02:00)
/// reads as zero hours worked. With `overnight_wrap` set, a genuinely
/// parsed end-before-start pair is treated as crossing midnight and gains
/// 24 hours instead; pairs where either punch failed to parse still clamp,
/// since wrapping garbage would fabricate hours.
pub fn actual_shift_hours(shift: &Shift, overnight_wrap: bool) -> f64 {
    let start_raw = shift.actual_start_time.as_deref();
    let end_raw = shift.actual_end_time.as_deref();

    if overnight_wrap {
        if let (Some(start), Some(end)) = (
            start_raw.and_then(try_parse_clock_time),
            end_raw.and_then(try_parse_clock_time),
        ) {
            if end < start {
                return end + 24.0 - start;
            }
            return end - start;
        }
    }

    let start = parse_clock_time(start_raw);
    let end = parse_clock_time(end_raw);
    (end - start).max(0.0)
}
