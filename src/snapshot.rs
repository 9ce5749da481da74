//! Week snapshot decoding.
//!
//! The data-fetch layer hands over one reporting week's records as a single
//! JSON payload, already scoped to the store and week. This module decodes
//! it into typed collections; it performs no fetching and no date-range
//! filtering of its own.

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::types::{Employee, SalesActual, SalesProjection, Shift, StoreSettings, WeeklySchedule};
use crate::week::date_in_week;

/// One reporting week's raw records, treated as an immutable snapshot.
///
/// Collections default to empty: a week in progress legitimately has no
/// actual sales yet, and an unstaffed store has no shifts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekSnapshot {
    pub schedule: WeeklySchedule,
    #[serde(default)]
    pub sales: Vec<SalesProjection>,
    #[serde(default)]
    pub actual_sales: Vec<SalesActual>,
    #[serde(default)]
    pub shifts: Vec<Shift>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub settings: StoreSettings,
}

impl WeekSnapshot {
    pub fn from_json_str(payload: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn from_value(payload: serde_json::Value) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_value(payload)?)
    }

    /// Check the fetch-layer contract that every shift falls inside the
    /// audited week. Opt-in: the aggregator itself trusts the caller.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let week_start = self.schedule.week_start_date;
        for shift in &self.shifts {
            if !date_in_week(shift.date, week_start) {
                return Err(SnapshotError::ShiftOutsideWeek {
                    date: shift.date,
                    week_start,
                });
            }
        }
        Ok(())
    }
}
