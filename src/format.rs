//! Formatting rules of the output contract, plus the tag → display-policy
//! mapping the rendering layer uses instead of matching on loose strings.
//!
//! Precision here is contractual: alert thresholds are compared against the
//! unformatted numbers, so formatting rounds for display only and must
//! never move a value across a threshold band. Currency rounds to the cent
//! and round-trips through `parse_currency` exactly.

use crate::types::{
    AlertKind, AlertSeverity, CompletionStatus, CoverageStatus, Polarity,
};

/// Visual tone the rendering layer maps to its color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Neutral,
    Warning,
    Danger,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Neutral => "neutral",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

// =============================================================================
// Numeric formatting
// =============================================================================

/// Format a dollar amount: two decimals, thousands separators, leading `$`.
///
/// `12345.678` → `"$12,345.68"`; negatives render as `"-$1,200.00"`.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, fraction)
}

/// Parse a string produced by [`format_currency`] back to a value.
///
/// Recovers the original amount to the cent. Returns `None` for strings
/// that aren't currency.
pub fn parse_currency(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let digits: String = rest
        .strip_prefix('$')?
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if digits.is_empty() {
        return None;
    }
    let amount: f64 = digits.parse().ok()?;
    let cents = (amount * 100.0).round() / 100.0;
    Some(if negative { -cents } else { cents })
}

/// Format a percentage to one decimal: `27.46` → `"27.5%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Format sales-per-labor-hour to two decimals: `43.214` → `"$43.21"`.
pub fn format_splh(value: f64) -> String {
    format!("${:.2}", value)
}

/// Format a decimal hour count for the breakdown table: `6.5` → `"6.5h"`.
pub fn format_hours(value: f64) -> String {
    format!("{:.1}h", value)
}

// =============================================================================
// Display policy (closed tag → tone/icon tables)
// =============================================================================

/// Tone for a variance value, given the metric's polarity.
///
/// Zero variance is neutral in both senses: on projection is neither a
/// win nor a miss.
pub fn variance_tone(polarity: Polarity, variance: f64) -> Tone {
    if variance == 0.0 {
        Tone::Neutral
    } else if polarity.is_favorable(variance) {
        Tone::Success
    } else {
        Tone::Danger
    }
}

impl AlertSeverity {
    pub fn tone(&self) -> Tone {
        match self {
            Self::Medium => Tone::Warning,
            Self::High => Tone::Danger,
        }
    }
}

impl AlertKind {
    /// Icon name the alert panel renders for this alert.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Over => "arrow-up-circle",
            Self::Under => "arrow-down-circle",
            Self::TrendingUp => "trending-up",
            Self::TrendingDown => "trending-down",
        }
    }
}

impl CoverageStatus {
    pub fn tone(&self) -> Tone {
        match self {
            Self::Excellent => Tone::Success,
            Self::Good => Tone::Success,
            Self::Warning => Tone::Warning,
            Self::Critical => Tone::Danger,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Excellent => "shield-check",
            Self::Good => "check-circle",
            Self::Warning => "alert-triangle",
            Self::Critical => "alert-octagon",
        }
    }
}

impl CompletionStatus {
    pub fn tone(&self) -> Tone {
        match self {
            Self::Complete => Tone::Success,
            Self::Good => Tone::Neutral,
            Self::Partial => Tone::Warning,
            Self::Incomplete => Tone::Danger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(12345.678), "$12,345.68");
        assert_eq!(format_currency(1234567.0), "$1,234,567.00");
        assert_eq!(format_currency(999.99), "$999.99");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1200.0), "-$1,200.00");
        // -0.001 rounds to zero cents; no stray sign.
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_currency_round_trips_to_the_cent() {
        for value in [0.0, 0.01, 12.3, 999.99, 1000.0, 12345.67, 9876543.21, -450.5] {
            let formatted = format_currency(value);
            let parsed = parse_currency(&formatted).unwrap();
            assert!(
                (parsed - (value * 100.0).round() / 100.0).abs() < 1e-9,
                "{} -> {} -> {}",
                value,
                formatted,
                parsed
            );
        }
    }

    #[test]
    fn test_parse_currency_rejects_non_currency() {
        assert_eq!(parse_currency("12.34"), None);
        assert_eq!(parse_currency("$"), None);
        assert_eq!(parse_currency("about $5"), None);
    }

    #[test]
    fn test_percent_and_splh_precision() {
        assert_eq!(format_percent(27.46), "27.5%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_splh(43.214), "$43.21");
        assert_eq!(format_hours(6.5), "6.5h");
    }

    #[test]
    fn test_variance_tone_follows_polarity() {
        assert_eq!(variance_tone(Polarity::HigherIsBetter, 250.0), Tone::Success);
        assert_eq!(variance_tone(Polarity::HigherIsBetter, -250.0), Tone::Danger);
        assert_eq!(variance_tone(Polarity::LowerIsBetter, 250.0), Tone::Danger);
        assert_eq!(variance_tone(Polarity::LowerIsBetter, -250.0), Tone::Success);
        assert_eq!(variance_tone(Polarity::LowerIsBetter, 0.0), Tone::Neutral);
    }

    #[test]
    fn test_display_tables_are_total() {
        // Every closed tag maps to a tone; no string dispatch downstream.
        assert_eq!(AlertSeverity::High.tone(), Tone::Danger);
        assert_eq!(AlertSeverity::Medium.tone(), Tone::Warning);
        assert_eq!(CoverageStatus::Critical.tone(), Tone::Danger);
        assert_eq!(CompletionStatus::Complete.tone(), Tone::Success);
        assert_eq!(AlertKind::TrendingDown.icon(), "trending-down");
    }
}
