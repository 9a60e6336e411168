use crate::errors::ScopeResult;
use crate::scoring::ReportPaths;
use crate::session::SessionOptions;
use crate::simulation::{ThresholdPolicy, DEFAULT_THRESHOLD_FLOOR, DEFAULT_THRESHOLD_MULTIPLIER};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "securescope",
    about = "SecureScope - Risk scoring for security findings with Monte Carlo loss simulation",
    version
)]
pub struct Args {
    /// Path to the Burp report score summary
    #[arg(long)]
    pub burp_report: Option<PathBuf>,

    /// Path to the Nessus report score summary
    #[arg(long)]
    pub nessus_report: Option<PathBuf>,

    /// Read answers line by line from a file instead of stdin
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Write the assessment (and simulation curves) to a JSON file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for the Monte Carlo random number generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fraction of the after-control probability used for the acceptable loss threshold
    #[arg(long, default_value_t = DEFAULT_THRESHOLD_MULTIPLIER)]
    pub threshold_multiplier: f64,

    /// Minimum acceptable loss threshold probability (0.01 = 1%)
    #[arg(long, default_value_t = DEFAULT_THRESHOLD_FLOOR)]
    pub threshold_floor: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide the banner and prompts, printing only results
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn session_options(&self) -> ScopeResult<SessionOptions> {
        Ok(SessionOptions {
            reports: ReportPaths {
                burp: self.burp_report.clone(),
                nessus: self.nessus_report.clone(),
            },
            output: self.output.clone(),
            seed: self.seed,
            threshold: ThresholdPolicy::new(self.threshold_multiplier, self.threshold_floor)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ScopeError;

    #[test]
    fn test_defaults_route_to_manual_scoring() {
        let args = Args::parse_from(["securescope"]);
        let options = args.session_options().unwrap();

        assert!(options.reports.burp.is_none());
        assert!(options.reports.nessus.is_none());
        assert_eq!(options.threshold, ThresholdPolicy::default());
    }

    #[test]
    fn test_report_flags() {
        let args = Args::parse_from([
            "securescope",
            "--burp-report",
            "burp.json",
            "--nessus-report",
            "nessus.json",
            "--seed",
            "42",
        ]);
        let options = args.session_options().unwrap();

        assert_eq!(options.reports.burp, Some(PathBuf::from("burp.json")));
        assert_eq!(options.reports.nessus, Some(PathBuf::from("nessus.json")));
        assert_eq!(options.seed, Some(42));
    }

    #[test]
    fn test_invalid_threshold_policy() {
        let args = Args::parse_from(["securescope", "--threshold-floor", "2"]);
        assert!(matches!(args.session_options(), Err(ScopeError::InvalidPolicy(_))));
    }
}
