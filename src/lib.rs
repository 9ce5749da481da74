//! ShiftLens — weekly labor/sales audit aggregation for the
//! workforce-scheduling dashboard.
//!
//! The data-fetch layer hands over one reporting week's records (shifts,
//! sales, schedule header, roster, store settings) as a snapshot; this
//! crate turns it into projected-vs-actual metrics, labor alerts, and
//! coverage/completion bands the rendering layer can display directly.
//! Everything is pure and synchronous: no I/O, no clock reads, recomputed
//! from scratch on every refresh.

pub mod alerts;
pub mod audit;
pub mod config;
pub mod coverage;
pub mod error;
pub mod format;
pub mod snapshot;
pub mod timeclock;
pub mod types;
pub mod week;

pub use alerts::classify_labor_alerts;
pub use audit::compute_weekly_audit;
pub use config::{AuditConfig, DEFAULT_TARGET_LABOR_PERCENTAGE};
pub use coverage::{classify_completion, classify_coverage, coverage_of_shifts};
pub use error::SnapshotError;
pub use snapshot::WeekSnapshot;
pub use types::{
    CompletionReport, CoverageReport, LaborAlert, MetricComparison, WeeklyAudit,
};
