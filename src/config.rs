//! Audit configuration.
//!
//! The target labor percentage historically appeared as a literal `25` in
//! every widget that compared against it. It lives here once, as the serde
//! default, and store settings override it per location.

use serde::{Deserialize, Serialize};

use crate::types::StoreSettings;

/// Fallback target labor percentage when store settings don't set one.
pub const DEFAULT_TARGET_LABOR_PERCENTAGE: f64 = 25.0;

/// Tunables for the weekly audit, loaded from the dashboard's config JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditConfig {
    #[serde(default = "default_target_labor_percentage")]
    pub target_labor_percentage: f64,
    /// Compute a wrapped duration for shifts whose actual end precedes the
    /// actual start (22:00–02:00) instead of clamping to zero hours. Off by
    /// default: the production dashboard clamps, and enabling this changes
    /// reported actual hours for overnight stores.
    #[serde(default)]
    pub overnight_wrap: bool,
}

fn default_target_labor_percentage() -> f64 {
    DEFAULT_TARGET_LABOR_PERCENTAGE
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            target_labor_percentage: default_target_labor_percentage(),
            overnight_wrap: false,
        }
    }
}

impl AuditConfig {
    /// Config for one store: settings override the default target.
    pub fn for_store(settings: &StoreSettings) -> Self {
        Self {
            target_labor_percentage: settings
                .target_labor_percentage
                .unwrap_or(DEFAULT_TARGET_LABOR_PERCENTAGE),
            ..Self::default()
        }
    }
}
