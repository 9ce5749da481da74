//! Weekly labor/sales audit aggregation.
//!
//! Transforms one reporting week's raw records into projected-vs-actual
//! metrics for sales, labor cost, labor percentage, and sales-per-labor-hour
//! (SPLH), plus a per-day breakdown. Pure and total: no I/O, no clock reads,
//! no errors — absent data pins metrics at zero rather than failing, so a
//! week in progress always renders.

use std::collections::HashMap;

use crate::config::AuditConfig;
use crate::format::{format_currency, format_percent, format_splh};
use crate::snapshot::WeekSnapshot;
use crate::timeclock::actual_shift_hours;
use crate::types::{DayBreakdown, MetricComparison, Polarity, Shift, WeeklyAudit};
use crate::week::{day_name, week_dates};

/// A ratio with its denominator guarded: zero denominator yields 0.0,
/// never NaN or Infinity.
fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

fn compare(
    projected: f64,
    actual: f64,
    polarity: Polarity,
    fmt: fn(f64) -> String,
) -> MetricComparison {
    let variance = actual - projected;
    MetricComparison {
        projected,
        actual,
        variance,
        variance_percent: guarded_ratio(variance, projected) * 100.0,
        polarity,
        formatted_projected: fmt(projected),
        formatted_actual: fmt(actual),
    }
}

/// Cost actually incurred by one shift.
///
/// A pre-computed `actual_labor_cost` from the time-clock import wins;
/// otherwise worked hours are priced at the employee's hourly rate. A shift
/// whose employee isn't on the roster contributes zero cost.
fn shift_actual_cost(shift: &Shift, rates: &HashMap<&str, f64>, overnight_wrap: bool) -> f64 {
    if let Some(cost) = shift.actual_labor_cost {
        return cost;
    }
    let rate = match shift.employee_id.as_deref().and_then(|id| rates.get(id)) {
        Some(rate) => *rate,
        None => {
            if let Some(id) = shift.employee_id.as_deref() {
                log::warn!("Shift on {} references unknown employee {}", shift.date, id);
            }
            return 0.0;
        }
    };
    actual_shift_hours(shift, overnight_wrap) * rate
}

/// Aggregate one week's records into the audit result.
///
/// Linear in the number of shift and sales rows; callers recompute from a
/// fresh snapshot on every refresh rather than updating incrementally.
/// Identical inputs produce identical output.
pub fn compute_weekly_audit(snapshot: &WeekSnapshot, config: &AuditConfig) -> WeeklyAudit {
    let schedule = &snapshot.schedule;

    let rates: HashMap<&str, f64> = snapshot
        .employees
        .iter()
        .map(|e| (e.employee_id.as_str(), e.hourly_rate))
        .collect();

    let actual_sales_total: f64 = snapshot.actual_sales.iter().map(|a| a.actual_sales).sum();
    let projected_hours: f64 = snapshot.shifts.iter().map(|s| s.hours).sum();
    let actual_hours: f64 = snapshot
        .shifts
        .iter()
        .map(|s| actual_shift_hours(s, config.overnight_wrap))
        .sum();
    let actual_labor: f64 = snapshot
        .shifts
        .iter()
        .map(|s| shift_actual_cost(s, &rates, config.overnight_wrap))
        .sum();

    let actual_labor_percent = guarded_ratio(actual_labor, actual_sales_total) * 100.0;
    // SPLH needs both a positive numerator and denominator: a week with no
    // sales rows or no hours reads as "no data" (0), not a division result.
    let projected_splh = if schedule.total_projected_sales > 0.0 {
        guarded_ratio(schedule.total_projected_sales, projected_hours)
    } else {
        0.0
    };
    let actual_splh = if actual_sales_total > 0.0 {
        guarded_ratio(actual_sales_total, actual_hours)
    } else {
        0.0
    };

    WeeklyAudit {
        week_start_date: schedule.week_start_date,
        sales: compare(
            schedule.total_projected_sales,
            actual_sales_total,
            Polarity::HigherIsBetter,
            format_currency,
        ),
        labor_cost: compare(
            schedule.total_labor_cost,
            actual_labor,
            Polarity::LowerIsBetter,
            format_currency,
        ),
        labor_percent: compare(
            schedule.labor_percentage,
            actual_labor_percent,
            Polarity::LowerIsBetter,
            format_percent,
        ),
        splh: compare(
            projected_splh,
            actual_splh,
            Polarity::HigherIsBetter,
            format_splh,
        ),
        projected_hours,
        actual_hours,
        days: day_breakdown(snapshot, config),
    }
}

/// Per-day rows for the audit table: projections keyed by day name,
/// actual sales summed per day, shift hours bucketed by date.
fn day_breakdown(snapshot: &WeekSnapshot, config: &AuditConfig) -> Vec<DayBreakdown> {
    week_dates(snapshot.schedule.week_start_date)
        .into_iter()
        .map(|date| {
            let day = day_name(date);
            let projected_sales = snapshot
                .sales
                .iter()
                .filter(|p| p.day_of_week.eq_ignore_ascii_case(day))
                .map(|p| p.total_daily_sales)
                .sum();
            let actual_sales = snapshot
                .actual_sales
                .iter()
                .filter(|a| a.day_of_week.eq_ignore_ascii_case(day))
                .map(|a| a.actual_sales)
                .sum();
            let day_shifts = snapshot.shifts.iter().filter(|s| s.date == date);
            let (scheduled_hours, actual_hours) = day_shifts.fold((0.0, 0.0), |(sched, act), s| {
                (
                    sched + s.hours,
                    act + actual_shift_hours(s, config.overnight_wrap),
                )
            });
            DayBreakdown {
                day: day.to_string(),
                date,
                projected_sales,
                actual_sales,
                scheduled_hours,
                actual_hours,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Employee, SalesActual, SalesProjection, StoreSettings, WeeklySchedule};
    use chrono::NaiveDate;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn employee(id: &str, rate: f64) -> Employee {
        Employee {
            employee_id: id.to_string(),
            first_name: "Test".to_string(),
            last_name: id.to_uppercase(),
            hourly_rate: rate,
            min_hours: None,
        }
    }

    fn worked_shift(id: &str, date: NaiveDate, start: &str, end: &str) -> Shift {
        Shift {
            employee_id: Some(id.to_string()),
            date,
            start_time: start.to_string(),
            end_time: end.to_string(),
            hours: 8.0,
            actual_start_time: Some(start.to_string()),
            actual_end_time: Some(end.to_string()),
            actual_labor_cost: None,
            position: Some("server".to_string()),
        }
    }

    fn make_snapshot() -> WeekSnapshot {
        WeekSnapshot {
            schedule: WeeklySchedule {
                week_start_date: monday(),
                total_projected_sales: 40000.0,
                total_labor_cost: 10000.0,
                labor_percentage: 25.0,
                actual_labor_cost: None,
                actual_labor_percentage: None,
                is_published: true,
            },
            sales: vec![
                SalesProjection {
                    day_of_week: "monday".to_string(),
                    total_daily_sales: 5000.0,
                    lunch_sales: 1500.0,
                    midday_sales: 1000.0,
                    dinner_sales: 2000.0,
                    late_night_sales: 500.0,
                },
                SalesProjection {
                    day_of_week: "friday".to_string(),
                    total_daily_sales: 9000.0,
                    lunch_sales: 2000.0,
                    midday_sales: 1500.0,
                    dinner_sales: 4000.0,
                    late_night_sales: 1500.0,
                },
            ],
            actual_sales: vec![
                SalesActual {
                    day_of_week: "monday".to_string(),
                    actual_sales: 5200.0,
                },
                SalesActual {
                    day_of_week: "friday".to_string(),
                    actual_sales: 8800.0,
                },
            ],
            shifts: vec![
                worked_shift("e1", monday(), "09:00", "17:00"),
                worked_shift("e2", monday() + chrono::Duration::days(4), "11:00", "19:00"),
            ],
            employees: vec![employee("e1", 20.0), employee("e2", 25.0)],
            settings: StoreSettings::default(),
        }
    }

    #[test]
    fn test_totals_and_variance() {
        let audit = compute_weekly_audit(&make_snapshot(), &AuditConfig::default());

        assert_eq!(audit.sales.projected, 40000.0);
        assert_eq!(audit.sales.actual, 14000.0);
        assert_eq!(audit.sales.variance, -26000.0);
        assert!((audit.sales.variance_percent - -65.0).abs() < 1e-9);
        assert_eq!(audit.sales.polarity, Polarity::HigherIsBetter);

        // e1: 8h × $20 = $160; e2: 8h × $25 = $200.
        assert_eq!(audit.labor_cost.actual, 360.0);
        assert_eq!(audit.labor_cost.polarity, Polarity::LowerIsBetter);

        assert_eq!(audit.projected_hours, 16.0);
        assert_eq!(audit.actual_hours, 16.0);
    }

    #[test]
    fn test_derived_ratios() {
        let audit = compute_weekly_audit(&make_snapshot(), &AuditConfig::default());

        // 360 / 14000 × 100
        assert!((audit.labor_percent.actual - 2.5714285714).abs() < 1e-6);
        assert_eq!(audit.labor_percent.projected, 25.0);

        // 40000 / 16 and 14000 / 16
        assert!((audit.splh.projected - 2500.0).abs() < 1e-9);
        assert!((audit.splh.actual - 875.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_week_pins_ratios_at_zero() {
        let mut snapshot = make_snapshot();
        snapshot.actual_sales.clear();
        snapshot.shifts.clear();
        snapshot.schedule.total_projected_sales = 0.0;
        snapshot.schedule.total_labor_cost = 0.0;
        snapshot.schedule.labor_percentage = 0.0;

        let audit = compute_weekly_audit(&snapshot, &AuditConfig::default());

        for value in [
            audit.labor_percent.actual,
            audit.splh.projected,
            audit.splh.actual,
            audit.sales.variance_percent,
            audit.labor_cost.variance_percent,
        ] {
            assert_eq!(value, 0.0);
            assert!(value.is_finite());
        }
    }

    #[test]
    fn test_unknown_employee_contributes_zero_cost() {
        let mut snapshot = make_snapshot();
        snapshot.employees.retain(|e| e.employee_id != "e2");

        let audit = compute_weekly_audit(&snapshot, &AuditConfig::default());
        assert_eq!(audit.labor_cost.actual, 160.0);
        // Hours still count; only the cost lookup failed.
        assert_eq!(audit.actual_hours, 16.0);
    }

    #[test]
    fn test_precomputed_cost_wins_over_rate() {
        let mut snapshot = make_snapshot();
        snapshot.shifts[0].actual_labor_cost = Some(500.0);

        let audit = compute_weekly_audit(&snapshot, &AuditConfig::default());
        assert_eq!(audit.labor_cost.actual, 700.0);
    }

    #[test]
    fn test_unworked_shift_counts_zero_actuals() {
        let mut snapshot = make_snapshot();
        snapshot.shifts[1].actual_start_time = None;
        snapshot.shifts[1].actual_end_time = None;

        let audit = compute_weekly_audit(&snapshot, &AuditConfig::default());
        assert_eq!(audit.actual_hours, 8.0);
        assert_eq!(audit.labor_cost.actual, 160.0);
        // Projection is untouched by missing actuals.
        assert_eq!(audit.projected_hours, 16.0);
    }

    #[test]
    fn test_day_breakdown_buckets_by_day() {
        let audit = compute_weekly_audit(&make_snapshot(), &AuditConfig::default());
        assert_eq!(audit.days.len(), 7);

        let monday_row = &audit.days[0];
        assert_eq!(monday_row.day, "monday");
        assert_eq!(monday_row.projected_sales, 5000.0);
        assert_eq!(monday_row.actual_sales, 5200.0);
        assert_eq!(monday_row.scheduled_hours, 8.0);
        assert_eq!(monday_row.actual_hours, 8.0);

        let tuesday_row = &audit.days[1];
        assert_eq!(tuesday_row.day, "tuesday");
        assert_eq!(tuesday_row.projected_sales, 0.0);
        assert_eq!(tuesday_row.scheduled_hours, 0.0);

        let friday_row = &audit.days[4];
        assert_eq!(friday_row.projected_sales, 9000.0);
        assert_eq!(friday_row.actual_sales, 8800.0);
    }

    #[test]
    fn test_formatted_values_follow_contract() {
        let audit = compute_weekly_audit(&make_snapshot(), &AuditConfig::default());
        assert_eq!(audit.sales.formatted_projected, "$40,000.00");
        assert_eq!(audit.sales.formatted_actual, "$14,000.00");
        assert_eq!(audit.labor_percent.formatted_projected, "25.0%");
        assert_eq!(audit.splh.formatted_projected, "$2500.00");
    }

    #[test]
    fn test_idempotent_over_identical_input() {
        let snapshot = make_snapshot();
        let config = AuditConfig::default();
        let first = compute_weekly_audit(&snapshot, &config);
        let second = compute_weekly_audit(&snapshot, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_overnight_wrap_changes_actual_hours() {
        let mut snapshot = make_snapshot();
        snapshot.shifts[0].actual_start_time = Some("22:00".to_string());
        snapshot.shifts[0].actual_end_time = Some("02:00".to_string());

        let clamped = compute_weekly_audit(&snapshot, &AuditConfig::default());
        assert_eq!(clamped.actual_hours, 8.0); // overnight shift reads as 0h

        let config = AuditConfig {
            overnight_wrap: true,
            ..AuditConfig::default()
        };
        let wrapped = compute_weekly_audit(&snapshot, &config);
        assert_eq!(wrapped.actual_hours, 12.0); // 4h wrapped + e2's 8h
    }
}
