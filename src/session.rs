//! Assessment Session
//!
//! Drives one run of the tool: score the finding, show the result, and
//! optionally run the loss simulation and export everything.

use crate::answers::AnswerSource;
use crate::errors::ScopeResult;
use crate::exporter::JsonExporter;
use crate::models::RiskAssessment;
use crate::questionnaire::Rejection;
use crate::reports::ReportParser;
use crate::scoring::{ReportPaths, RiskAggregator};
use crate::simulation::{run_simulation, LossModelParams, SimulationOutcome, ThresholdPolicy};
use crate::ui::Console;
use console::style;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub reports: ReportPaths,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub threshold: ThresholdPolicy,
}

/// Everything a finished session produced
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub assessment: RiskAssessment,
    pub simulation: Option<SimulationOutcome>,
}

/// Parse a numeric answer as a `T`.
///
/// Input that is a number but not a valid `T` (such as `-3` for a count) is
/// told apart from input that is not a number at all.
pub fn parse_number<T: FromStr>(raw: &str) -> Result<T, Rejection> {
    let trimmed = raw.trim();
    trimmed.parse::<T>().map_err(|_| match trimmed.parse::<f64>() {
        Ok(_) => Rejection::NotWholeNumber,
        Err(_) => Rejection::NotNumeric,
    })
}

/// Ask until the answer parses as a `T`.
pub fn ask_number<T, A>(prompt: &str, answers: &mut A, console: &Console) -> ScopeResult<T>
where
    T: FromStr,
    A: AnswerSource + ?Sized,
{
    loop {
        console.say(style(prompt).cyan().bold().to_string());
        console.prompt("~");
        let raw = answers.next_answer()?;
        match parse_number(&raw) {
            Ok(value) => return Ok(value),
            Err(rejection) => {
                log::debug!("Rejected numeric answer {:?} for {:?}: {:?}", raw, prompt, rejection);
                console.error(rejection.message());
            }
        }
    }
}

/// Yes/no question; an empty answer takes `default`.
pub fn confirm<A>(
    prompt: &str,
    default: bool,
    answers: &mut A,
    console: &Console,
) -> ScopeResult<bool>
where
    A: AnswerSource + ?Sized,
{
    let hint = if default { "yes" } else { "no" };
    console.say("");
    console.say(style(format!("{} (yes/no)", prompt)).cyan().bold().to_string());
    console.prompt(&format!("({})", hint));

    let raw = answers.next_answer()?;
    let answer = raw.trim().to_lowercase();
    Ok(match answer.as_str() {
        "" => default,
        "yes" | "y" => true,
        _ => false,
    })
}

pub struct AssessmentSession<'a, P: ReportParser + ?Sized> {
    options: SessionOptions,
    parser: &'a P,
    console: &'a Console,
}

impl<'a, P: ReportParser + ?Sized> AssessmentSession<'a, P> {
    pub fn new(options: SessionOptions, parser: &'a P, console: &'a Console) -> Self {
        Self {
            options,
            parser,
            console,
        }
    }

    pub fn run<A>(&self, answers: &mut A) -> ScopeResult<SessionReport>
    where
        A: AnswerSource + ?Sized,
    {
        let aggregator = RiskAggregator::new(self.parser, self.console);
        let assessment = aggregator.assess(&self.options.reports, answers)?;

        self.console.banner();
        self.console.print_assessment(&assessment);

        let simulation = if confirm(
            "Do you want to perform Monte Carlo simulation?",
            false,
            answers,
            self.console,
        )? {
            Some(self.simulate(answers)?)
        } else {
            None
        };

        let report = SessionReport {
            assessment,
            simulation,
        };

        if let Some(path) = &self.options.output {
            match JsonExporter::export(&report, path) {
                Ok(()) => self
                    .console
                    .success(&format!("Assessment written to {}", path.display())),
                Err(e) => {
                    log::error!("Failed to export assessment: {}", e);
                    self.console.error(&format!("Failed to export assessment: {}", e));
                }
            }
        }

        self.console.say("");
        self.console
            .highlight("Thank you for using our tool, hope to see you soon!");

        Ok(report)
    }

    /// Collect parameters, run the simulation and print its summary.
    pub fn simulate<A>(&self, answers: &mut A) -> ScopeResult<SimulationOutcome>
    where
        A: AnswerSource + ?Sized,
    {
        self.console.say("");
        self.console.success("Performing Monte Carlo simulation...");
        let params = self.collect_params(answers)?;

        let mut rng = match self.options.seed {
            Some(seed) => {
                log::debug!("Seeding simulation RNG with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let spinner = self
            .console
            .spinner(format!("Running {} trials...", params.trial_count));
        let outcome = run_simulation(&params, &self.options.threshold, &mut rng);
        spinner.finish_and_clear();

        let outcome = outcome?;
        self.console.print_simulation(&outcome);
        Ok(outcome)
    }

    /// Ask for a full parameter set until it validates.
    fn collect_params<A>(&self, answers: &mut A) -> ScopeResult<LossModelParams>
    where
        A: AnswerSource + ?Sized,
    {
        loop {
            self.console.say("");
            self.console
                .say(style("Monte Carlo Simulation Parameters").cyan().bold().to_string());

            let min_loss: f64 = ask_number(
                "Enter the minimum loss from an attack ($):",
                answers,
                self.console,
            )?;
            let max_loss: f64 = ask_number(
                "Enter the maximum loss from an attack ($):",
                answers,
                self.console,
            )?;
            let trial_count: usize = ask_number(
                "Enter the number of trials for the simulation:",
                answers,
                self.console,
            )?;
            let event_pct: f64 = ask_number(
                "Enter the estimated loss event probability (e.g., 60 for 60%):",
                answers,
                self.console,
            )?;
            let control_pct: f64 = ask_number(
                "Enter the probability of an estimated loss after controls (e.g., 10 for 10%):",
                answers,
                self.console,
            )?;

            match LossModelParams::new(
                min_loss,
                max_loss,
                trial_count,
                event_pct / 100.0,
                control_pct / 100.0,
            ) {
                Ok(params) => return Ok(params),
                Err(e) if e.is_validation() => {
                    log::warn!("Rejected simulation parameters: {}", e);
                    self.console.error(&e.to_string());
                }
                Err(e) => return Err(e),
            }
        }
    }
}
