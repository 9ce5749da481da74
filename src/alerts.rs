//! Labor-performance alerting.
//!
//! Two independent checks over weekly schedule headers: deviation of the
//! current week's labor percentage from the store target, and the trend
//! across the last three weeks. No alerts means the store is on target;
//! callers must not read an empty list as "no data".

use crate::format::format_percent;
use crate::types::{AlertKind, AlertSeverity, LaborAlert, WeeklySchedule};

/// Deviation from target (percentage points) that raises an alert.
pub const TARGET_DEVIATION_ALERT_POINTS: f64 = 2.0;
/// Deviation from target that escalates the alert to high severity.
pub const TARGET_DEVIATION_HIGH_POINTS: f64 = 5.0;
/// Three-week swing (percentage points) that raises a trend alert.
pub const TREND_ALERT_POINTS: f64 = 3.0;
/// Weeks of history the trend check needs.
pub const TREND_WINDOW_WEEKS: usize = 3;

/// Classify labor alerts for the most recent weeks.
///
/// `weeks[0]` is the current week; older weeks follow. The deviation check
/// only needs the current week; the trend check fires once at least
/// [`TREND_WINDOW_WEEKS`] weeks are present.
pub fn classify_labor_alerts(weeks: &[WeeklySchedule], target_percent: f64) -> Vec<LaborAlert> {
    let mut alerts = Vec::new();
    let Some(current) = weeks.first() else {
        return alerts;
    };

    let deviation = current.labor_percentage - target_percent;
    if deviation.abs() > TARGET_DEVIATION_ALERT_POINTS {
        let severity = if deviation.abs() > TARGET_DEVIATION_HIGH_POINTS {
            AlertSeverity::High
        } else {
            AlertSeverity::Medium
        };
        let kind = if deviation > 0.0 {
            AlertKind::Over
        } else {
            AlertKind::Under
        };
        alerts.push(LaborAlert {
            kind,
            severity,
            labor_percentage: current.labor_percentage,
            target_percentage: target_percent,
            deviation,
            message: format!(
                "Labor at {} is {:.1} points {} the {} target",
                format_percent(current.labor_percentage),
                deviation.abs(),
                if deviation > 0.0 { "over" } else { "under" },
                format_percent(target_percent),
            ),
        });
    }

    if weeks.len() >= TREND_WINDOW_WEEKS {
        let trend = weeks[0].labor_percentage - weeks[2].labor_percentage;
        if trend.abs() > TREND_ALERT_POINTS {
            let kind = if trend > 0.0 {
                AlertKind::TrendingUp
            } else {
                AlertKind::TrendingDown
            };
            alerts.push(LaborAlert {
                kind,
                severity: AlertSeverity::Medium,
                labor_percentage: weeks[0].labor_percentage,
                target_percentage: target_percent,
                deviation: trend,
                message: format!(
                    "Labor {} {:.1} points over three weeks ({} to {})",
                    if trend > 0.0 { "up" } else { "down" },
                    trend.abs(),
                    format_percent(weeks[2].labor_percentage),
                    format_percent(weeks[0].labor_percentage),
                ),
            });
        }
    }

    alerts
}
