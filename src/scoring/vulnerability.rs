//! Vulnerability Resolution Policy
//!
//! Report-derived scores are full vulnerability percentages. Resolved scores
//! are summed and divided by the number of supported reports, so a lone
//! report counts for half (`test_single_report_is_halved`). The manual path
//! is a quarter-weighted questionnaire result like the other three
//! categories, so for the same severity it lands about four times lower than
//! a report score (`test_manual_path_is_quartered`).

use crate::models::{CategoryResult, VulnerabilitySource};

/// Scores resolved from the supplied scanner reports
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReportResolution {
    pub burp: Option<f64>,
    pub nessus: Option<f64>,
}

impl ReportResolution {
    pub fn combined(&self) -> Option<f64> {
        combine_report_scores(self.burp, self.nessus)
    }
}

/// Report slots a combined score is spread over, resolved or not
pub const SUPPORTED_REPORTS: f64 = 2.0;

/// Sum of the resolved report scores over both report slots.
///
/// With both reports this is their mean; a single resolved report is halved.
pub fn combine_report_scores(burp: Option<f64>, nessus: Option<f64>) -> Option<f64> {
    if burp.is_none() && nessus.is_none() {
        return None;
    }
    let total: f64 = burp.into_iter().chain(nessus).sum();
    Some(total / SUPPORTED_REPORTS)
}

/// The vulnerability contribution and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct VulnerabilityScore {
    pub percent: f64,
    pub source: VulnerabilitySource,
}

impl VulnerabilityScore {
    pub fn from_reports(resolution: ReportResolution) -> Option<Self> {
        resolution.combined().map(|percent| Self {
            percent,
            source: VulnerabilitySource::Reports {
                burp: resolution.burp,
                nessus: resolution.nessus,
            },
        })
    }

    pub fn from_questionnaire(result: &CategoryResult) -> Self {
        Self {
            percent: result.weighted_percent(),
            source: VulnerabilitySource::Manual {
                raw_score: result.raw_score,
                max_possible_score: result.max_possible_score,
            },
        }
    }
}
