//! Risk Level Banding
//!
//! Maps a total risk percentage onto the qualitative levels shown in the
//! summary screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Band a total score. Totals above 100 are possible and land in Critical.
    pub fn from_score(total_pct: f64) -> Self {
        match total_pct {
            s if s <= 25.0 => RiskLevel::Low,
            s if s <= 50.0 => RiskLevel::Medium,
            s if s <= 75.0 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RiskLevel::Low => "🟢",
            RiskLevel::Medium => "🟡",
            RiskLevel::High => "🟠",
            RiskLevel::Critical => "🔴",
        }
    }

    /// Band boundaries as displayed to the user
    pub fn range(&self) -> &'static str {
        match self {
            RiskLevel::Low => "0-25",
            RiskLevel::Medium => "26-50",
            RiskLevel::High => "51-75",
            RiskLevel::Critical => "76+",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
