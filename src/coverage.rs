//! Shift coverage and schedule completion banding.
//!
//! Two distinct policies that happen to both be percentage bands. Coverage
//! answers "how healthy is staffing" for the health indicator; completion
//! answers "is this schedule ready to publish". They use different cut
//! points on purpose and must not be merged into one threshold table.

use crate::types::{CompletionReport, CompletionStatus, CoverageReport, CoverageStatus, Shift};

fn percentage(part: u32, total: u32) -> f64 {
    if total > 0 {
        f64::from(part) / f64::from(total) * 100.0
    } else {
        // A schedule with no shifts reads as 0% coverage, not NaN.
        0.0
    }
}

/// Band shift-coverage health: ≥90 excellent, ≥75 good, ≥50 warning,
/// below that critical.
pub fn classify_coverage(total_shifts: u32, assigned_shifts: u32) -> CoverageReport {
    let pct = percentage(assigned_shifts, total_shifts);
    let status = if pct >= 90.0 {
        CoverageStatus::Excellent
    } else if pct >= 75.0 {
        CoverageStatus::Good
    } else if pct >= 50.0 {
        CoverageStatus::Warning
    } else {
        CoverageStatus::Critical
    };
    CoverageReport {
        total_shifts,
        assigned_shifts,
        percentage: pct,
        status,
    }
}

/// Band publish-readiness: ≥95 complete, ≥70 good, ≥40 partial, below
/// that incomplete.
pub fn classify_completion(total_shifts: u32, finalized_shifts: u32) -> CompletionReport {
    let pct = percentage(finalized_shifts, total_shifts);
    let status = if pct >= 95.0 {
        CompletionStatus::Complete
    } else if pct >= 70.0 {
        CompletionStatus::Good
    } else if pct >= 40.0 {
        CompletionStatus::Partial
    } else {
        CompletionStatus::Incomplete
    };
    CompletionReport {
        total_shifts,
        finalized_shifts,
        percentage: pct,
        status,
    }
}

/// Coverage for a week's shift list: a shift counts as assigned when it
/// carries a non-empty `employee_id`.
pub fn coverage_of_shifts(shifts: &[Shift]) -> CoverageReport {
    let assigned = shifts
        .iter()
        .filter(|s| s.employee_id.as_deref().is_some_and(|id| !id.is_empty()))
        .count() as u32;
    classify_coverage(shifts.len() as u32, assigned)
}
