//! Display helpers shared by the service and the CLI.

use serde::{Deserialize, Serialize};

use super::stats::CRITICAL_WASTE_THRESHOLD;

/// Waste score at or above which a table needs attention.
pub const WARNING_WASTE_THRESHOLD: f64 = 0.4;

/// Formats whole currency units, abbreviating thousands: `$1.5k`, `$42`.
pub fn format_currency(amount: u64) -> String {
    if amount >= 1000 {
        format!("${:.1}k", amount as f64 / 1000.0)
    } else {
        format!("${}", amount)
    }
}

/// Coarse waste bucket used for labeling and coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteCategory {
    Critical,
    Warning,
    Good,
}

impl WasteCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteCategory::Critical => "critical",
            WasteCategory::Warning => "warning",
            WasteCategory::Good => "good",
        }
    }
}

/// Buckets a waste score: critical ≥ 0.7, warning ≥ 0.4, else good.
pub fn waste_category(score: f64) -> WasteCategory {
    if score >= CRITICAL_WASTE_THRESHOLD {
        WasteCategory::Critical
    } else if score >= WARNING_WASTE_THRESHOLD {
        WasteCategory::Warning
    } else {
        WasteCategory::Good
    }
}
