use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Input records (backend snapshot, snake_case JSON)
// =============================================================================

/// One scheduled shift for the audited week.
///
/// `hours` is the projected duration from the schedule builder. The
/// `actual_*` fields are populated post-hoc from time-clock data and are
/// absent until the shift has been worked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    /// Unassigned shifts carry no employee; coverage counts them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_end_time: Option<String>,
    /// Pre-computed cost from the time-clock import. When present it wins
    /// over the rate-derived cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_labor_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Roster entry. `hourly_rate` derives actual labor cost for shifts that
/// don't carry a pre-computed one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub hourly_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_hours: Option<f64>,
}

impl Employee {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Projected sales for one day of the audited week, keyed by lowercase
/// full day name ("monday".."sunday").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesProjection {
    pub day_of_week: String,
    #[serde(default)]
    pub total_daily_sales: f64,
    #[serde(default)]
    pub lunch_sales: f64,
    #[serde(default)]
    pub midday_sales: f64,
    #[serde(default)]
    pub dinner_sales: f64,
    #[serde(default)]
    pub late_night_sales: f64,
}

/// Recorded sales for one day. A week in progress has fewer than seven.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesActual {
    pub day_of_week: String,
    #[serde(default)]
    pub actual_sales: f64,
}

/// Weekly schedule header with projected totals, written when the schedule
/// is built and updated as actuals land.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub week_start_date: NaiveDate,
    #[serde(default)]
    pub total_projected_sales: f64,
    #[serde(default)]
    pub total_labor_cost: f64,
    #[serde(default)]
    pub labor_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_labor_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_labor_percentage: Option<f64>,
    #[serde(default)]
    pub is_published: bool,
}

/// Store-level settings relevant to the audit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_labor_percentage: Option<f64>,
}

// =============================================================================
// Output contract (camelCase, consumed by the rendering layer)
// =============================================================================

/// Whether a positive variance (actual above projected) is good news.
///
/// Sales and SPLH want actual above projected; labor cost and labor
/// percentage want it below. Tagging each metric here lets the rendering
/// layer pick colors without re-deriving the sense per metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

impl Polarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HigherIsBetter => "higher_is_better",
            Self::LowerIsBetter => "lower_is_better",
        }
    }

    /// True when the given variance (actual − projected) is favorable.
    pub fn is_favorable(&self, variance: f64) -> bool {
        match self {
            Self::HigherIsBetter => variance > 0.0,
            Self::LowerIsBetter => variance < 0.0,
        }
    }
}

/// Projected-vs-actual comparison for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricComparison {
    pub projected: f64,
    pub actual: f64,
    /// actual − projected
    pub variance: f64,
    /// variance / projected × 100, or 0 when projected is 0
    pub variance_percent: f64,
    pub polarity: Polarity,
    pub formatted_projected: String,
    pub formatted_actual: String,
}

/// Per-day breakdown row for the weekly audit table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBreakdown {
    /// Lowercase full day name ("monday".."sunday").
    pub day: String,
    pub date: NaiveDate,
    pub projected_sales: f64,
    pub actual_sales: f64,
    pub scheduled_hours: f64,
    pub actual_hours: f64,
}

/// Full result of the weekly audit aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAudit {
    pub week_start_date: NaiveDate,
    pub sales: MetricComparison,
    pub labor_cost: MetricComparison,
    pub labor_percent: MetricComparison,
    pub splh: MetricComparison,
    pub projected_hours: f64,
    pub actual_hours: f64,
    pub days: Vec<DayBreakdown>,
}

// =============================================================================
// Alerts
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Over,
    Under,
    TrendingUp,
    TrendingDown,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Over => "over",
            Self::Under => "under",
            Self::TrendingUp => "trending_up",
            Self::TrendingDown => "trending_down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Medium,
    High,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// One labor-performance alert. An empty alert list means "on target",
/// never "no data".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborAlert {
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub labor_percentage: f64,
    pub target_percentage: f64,
    /// Signed distance from target (deviation alerts) or from the
    /// two-weeks-prior value (trend alerts), in percentage points.
    pub deviation: f64,
    pub message: String,
}

// =============================================================================
// Coverage / completion
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageStatus {
    Excellent,
    Good,
    Warning,
    Critical,
}

impl CoverageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStatus {
    Complete,
    Good,
    Partial,
    Incomplete,
}

impl CompletionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Good => "good",
            Self::Partial => "partial",
            Self::Incomplete => "incomplete",
        }
    }
}

/// Shift-coverage health for a schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    pub total_shifts: u32,
    pub assigned_shifts: u32,
    pub percentage: f64,
    pub status: CoverageStatus,
}

/// Publish-readiness of a schedule. Distinct cut points from coverage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionReport {
    pub total_shifts: u32,
    pub finalized_shifts: u32,
    pub percentage: f64,
    pub status: CompletionStatus,
}
