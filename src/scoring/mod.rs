//! Risk Aggregator
//!
//! Combines the four category contributions into one unclamped total:
//! - `vulnerability`: report scores or the manual questionnaire
//! - `risk`: qualitative banding of the total

mod risk;
mod vulnerability;

pub use risk::RiskLevel;
pub use vulnerability::{combine_report_scores, ReportResolution, VulnerabilityScore};

use crate::answers::AnswerSource;
use crate::errors::ScopeResult;
use crate::models::RiskAssessment;
use crate::questionnaire::{catalog, score_category};
use crate::reports::{resolve_report_score, ReportKind, ReportParser, ReportScore};
use crate::ui::Console;
use std::path::PathBuf;

/// Report files supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ReportPaths {
    pub burp: Option<PathBuf>,
    pub nessus: Option<PathBuf>,
}

impl ReportPaths {
    fn entries(&self) -> impl Iterator<Item = (ReportKind, &PathBuf)> + '_ {
        [(ReportKind::Burp, &self.burp), (ReportKind::Nessus, &self.nessus)]
            .into_iter()
            .filter_map(|(kind, path)| path.as_ref().map(|p| (kind, p)))
    }
}

pub struct RiskAggregator<'a, P: ReportParser + ?Sized> {
    parser: &'a P,
    console: &'a Console,
}

impl<'a, P: ReportParser + ?Sized> RiskAggregator<'a, P> {
    pub fn new(parser: &'a P, console: &'a Console) -> Self {
        Self { parser, console }
    }

    /// Resolve every supplied report, telling the user how each one went.
    pub fn resolve_reports(&self, reports: &ReportPaths) -> ReportResolution {
        let mut resolution = ReportResolution::default();

        for (kind, path) in reports.entries() {
            match resolve_report_score(self.parser, path, kind) {
                ReportScore::Resolved(score) => {
                    self.console.success(&format!(
                        "Vulnerability score calculated from {} report: {}%",
                        kind, score
                    ));
                    match kind {
                        ReportKind::Burp => resolution.burp = Some(score),
                        ReportKind::Nessus => resolution.nessus = Some(score),
                    }
                }
                ReportScore::Unavailable { reason } => {
                    self.console
                        .error(&format!("Error processing {} report: {}.", kind, reason));
                }
            }
        }

        resolution
    }

    /// Vulnerability contribution: reports first, questionnaire otherwise.
    pub fn vulnerability<A>(
        &self,
        reports: &ReportPaths,
        answers: &mut A,
    ) -> ScopeResult<VulnerabilityScore>
    where
        A: AnswerSource + ?Sized,
    {
        let resolution = self.resolve_reports(reports);
        if let Some(score) = VulnerabilityScore::from_reports(resolution) {
            return Ok(score);
        }

        log::warn!("No report score available, falling back to manual vulnerability scoring");
        self.console.warn(
            "No valid report found or both reports failed to process. \
             Proceeding with manual input.",
        );
        let result = score_category(&catalog::vulnerability()?, answers, self.console)?;
        Ok(VulnerabilityScore::from_questionnaire(&result))
    }

    /// Run a full assessment session over all four categories.
    pub fn assess<A>(
        &self,
        reports: &ReportPaths,
        answers: &mut A,
    ) -> ScopeResult<RiskAssessment>
    where
        A: AnswerSource + ?Sized,
    {
        let vulnerability = self.vulnerability(reports, answers)?;
        self.console.clear_screen();

        let technical = score_category(&catalog::technical_impact()?, answers, self.console)?;
        self.console.clear_screen();
        let business = score_category(&catalog::business_impact()?, answers, self.console)?;
        self.console.clear_screen();
        let threat = score_category(&catalog::threat_agent()?, answers, self.console)?;
        self.console.clear_screen();

        let assessment = RiskAssessment::new(
            vulnerability.percent,
            vulnerability.source,
            technical.weighted_percent(),
            business.weighted_percent(),
            threat.weighted_percent(),
        );
        log::info!(
            "Assessment complete: total {:.2}% ({})",
            assessment.total_pct,
            assessment.risk_level
        );

        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::ScriptedAnswers;
    use crate::errors::ScopeError;
    use crate::models::VulnerabilitySource;
    use std::collections::HashMap;
    use std::path::Path;

    /// Parser keyed by file name; unknown names fail to parse.
    struct MapParser(HashMap<&'static str, f64>);

    impl ReportParser for MapParser {
        fn parse(&self, path: &Path, kind: ReportKind) -> ScopeResult<f64> {
            let name = path.to_str().unwrap_or_default();
            self.0.get(name).copied().ok_or_else(|| ScopeError::ReportParse {
                kind,
                path: path.to_path_buf(),
                message: "unreadable report".to_string(),
            })
        }
    }

    fn parser() -> MapParser {
        MapParser(HashMap::from([("burp.json", 80.0), ("nessus.json", 60.0)]))
    }

    fn quarter(raw: f64, max: f64) -> f64 {
        (raw / max * 100.0) / 4.0
    }

    #[test]
    fn test_all_manual_minimum_answers() {
        let parser = parser();
        let console = Console::muted();
        let aggregator = RiskAggregator::new(&parser, &console);
        let mut answers = ScriptedAnswers::new(vec!["1"; 16]);

        let assessment = aggregator.assess(&ReportPaths::default(), &mut answers).unwrap();

        assert!((assessment.vulnerability_pct - quarter(4.0, 15.0)).abs() < 1e-9);
        assert!((assessment.vulnerability_pct - 6.67).abs() < 0.01);
        assert!((assessment.technical_pct - quarter(4.0, 15.0)).abs() < 1e-9);
        assert!((assessment.business_pct - quarter(4.0, 12.0)).abs() < 1e-9);
        assert!((assessment.threat_pct - quarter(4.0, 14.0)).abs() < 1e-9);

        let expected = assessment.vulnerability_pct
            + assessment.technical_pct
            + assessment.business_pct
            + assessment.threat_pct;
        assert!((assessment.total_pct - expected).abs() < 1e-9);
        assert!(matches!(
            assessment.vulnerability_source,
            VulnerabilitySource::Manual { raw_score: 4, max_possible_score: 15 }
        ));
        assert_eq!(answers.remaining(), 0);
    }

    #[test]
    fn test_both_reports_resolve() {
        let parser = parser();
        let console = Console::muted();
        let aggregator = RiskAggregator::new(&parser, &console);
        let reports = ReportPaths {
            burp: Some(PathBuf::from("burp.json")),
            nessus: Some(PathBuf::from("nessus.json")),
        };
        // Only the three manual categories are asked.
        let mut answers = ScriptedAnswers::new(vec!["1"; 12]);

        let assessment = aggregator.assess(&reports, &mut answers).unwrap();

        assert!((assessment.vulnerability_pct - 70.0).abs() < 1e-9);
        let manual = quarter(4.0, 15.0) + quarter(4.0, 12.0) + quarter(4.0, 14.0);
        assert!((assessment.total_pct - (70.0 + manual)).abs() < 1e-9);
        assert_eq!(answers.remaining(), 0);
    }

    #[test]
    fn test_failed_report_falls_back_to_other_source() {
        let parser = parser();
        let console = Console::muted();
        let aggregator = RiskAggregator::new(&parser, &console);
        let reports = ReportPaths {
            burp: Some(PathBuf::from("corrupt.xml")),
            nessus: Some(PathBuf::from("nessus.json")),
        };

        let resolution = aggregator.resolve_reports(&reports);
        assert_eq!(resolution.burp, None);
        assert_eq!(resolution.nessus, Some(60.0));
        assert_eq!(resolution.combined(), Some(30.0));
    }

    #[test]
    fn test_lone_report_counts_for_half() {
        let parser = parser();
        let console = Console::muted();
        let aggregator = RiskAggregator::new(&parser, &console);
        let reports = ReportPaths {
            burp: Some(PathBuf::from("burp.json")),
            nessus: None,
        };
        let mut answers = ScriptedAnswers::new(vec!["1"; 12]);

        let assessment = aggregator.assess(&reports, &mut answers).unwrap();

        assert!((assessment.vulnerability_pct - 40.0).abs() < 1e-9);
        assert_eq!(
            assessment.vulnerability_source,
            VulnerabilitySource::Reports {
                burp: Some(80.0),
                nessus: None
            }
        );
        assert_eq!(answers.remaining(), 0);
    }

    #[test]
    fn test_all_reports_failing_uses_questionnaire() {
        let parser = parser();
        let console = Console::muted();
        let aggregator = RiskAggregator::new(&parser, &console);
        let reports = ReportPaths {
            burp: Some(PathBuf::from("corrupt.xml")),
            nessus: None,
        };
        let mut answers = ScriptedAnswers::new(["4", "4", "3", "4"]);

        let score = aggregator.vulnerability(&reports, &mut answers).unwrap();
        assert!((score.percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_can_exceed_one_hundred() {
        let parser = MapParser(HashMap::from([("burp.json", 100.0), ("nessus.json", 100.0)]));
        let console = Console::muted();
        let aggregator = RiskAggregator::new(&parser, &console);
        let reports = ReportPaths {
            burp: Some(PathBuf::from("burp.json")),
            nessus: Some(PathBuf::from("nessus.json")),
        };
        let max_answers = ["4", "4", "4", "3", "3", "3", "2", "4", "4", "3", "3", "4"];
        let mut answers = ScriptedAnswers::new(max_answers);

        let assessment = aggregator.assess(&reports, &mut answers).unwrap();
        assert!((assessment.total_pct - 175.0).abs() < 1e-9);
        assert_eq!(assessment.risk_level, RiskLevel::Critical);
    }
}
