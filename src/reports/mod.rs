//! Report Score Adapter
//!
//! Turns a scanner report into a vulnerability percentage through a
//! pluggable [`ReportParser`]. Failures never abort an assessment: they come
//! back as [`ReportScore::Unavailable`] with the reason, and scoring falls
//! through to the other report or to the manual questionnaire.

mod summary;

pub use summary::SummaryReportParser;

use crate::errors::{ScopeError, ScopeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Burp,
    Nessus,
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportKind::Burp => write!(f, "Burp"),
            ReportKind::Nessus => write!(f, "Nessus"),
        }
    }
}

/// Produces a percentage score from a report file.
pub trait ReportParser {
    fn parse(&self, path: &Path, kind: ReportKind) -> ScopeResult<f64>;
}

/// Result of resolving one report
#[derive(Debug, Clone, PartialEq)]
pub enum ReportScore {
    Resolved(f64),
    Unavailable { reason: String },
}

/// Ask `parser` for a score, keeping only finite values in [0, 100].
pub fn resolve_report_score<P>(parser: &P, path: &Path, kind: ReportKind) -> ReportScore
where
    P: ReportParser + ?Sized,
{
    let outcome = parser.parse(path, kind).and_then(|score| {
        if score.is_finite() && (0.0..=100.0).contains(&score) {
            Ok(score)
        } else {
            Err(ScopeError::ScoreOutOfRange { kind, score })
        }
    });

    match outcome {
        Ok(score) => {
            log::info!("{} report {:?} resolved to {:.2}%", kind, path, score);
            ReportScore::Resolved(score)
        }
        Err(e) => {
            log::warn!("{} report {:?} unavailable: {}", kind, path, e);
            ReportScore::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct FixedParser(ScopeResult<f64>);

    impl ReportParser for FixedParser {
        fn parse(&self, path: &Path, kind: ReportKind) -> ScopeResult<f64> {
            match &self.0 {
                Ok(score) => Ok(*score),
                Err(e) => Err(ScopeError::ReportParse {
                    kind,
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }),
            }
        }
    }

    #[test]
    fn test_resolved_score() {
        let parser = FixedParser(Ok(80.0));
        let score = resolve_report_score(&parser, Path::new("burp.json"), ReportKind::Burp);
        assert_eq!(score, ReportScore::Resolved(80.0));
    }

    #[test]
    fn test_parse_failure_is_unavailable() {
        let parser = FixedParser(Err(ScopeError::external("parser", "truncated XML")));
        let path = PathBuf::from("scan.nessus");
        let score = resolve_report_score(&parser, &path, ReportKind::Nessus);

        match score {
            ReportScore::Unavailable { reason } => assert!(reason.contains("truncated XML")),
            other => panic!("expected unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_scores_rejected() {
        for bad in [-1.0, 100.5, f64::NAN, f64::INFINITY] {
            let parser = FixedParser(Ok(bad));
            let score = resolve_report_score(&parser, Path::new("r.json"), ReportKind::Burp);
            assert!(
                matches!(score, ReportScore::Unavailable { .. }),
                "score {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_boundary_scores_accepted() {
        for good in [0.0, 100.0] {
            let parser = FixedParser(Ok(good));
            let score = resolve_report_score(&parser, Path::new("r.json"), ReportKind::Nessus);
            assert_eq!(score, ReportScore::Resolved(good));
        }
    }
}
