//! Loss Model
//!
//! Monte Carlo loss simulation. A min/max loss range is read as the span of
//! a log-normal distribution; each trial draws a loss and a Bernoulli gate
//! for whether the loss event happens at all. The `curve` submodule turns
//! the gated samples into exceedance curves.

pub mod curve;

pub use curve::{
    acceptable_loss_threshold, build_curve, build_exceedance_set, loss_axis, ExceedanceSet,
    ThresholdPolicy, DEFAULT_THRESHOLD_FLOOR, DEFAULT_THRESHOLD_MULTIPLIER,
};

use crate::errors::{ScopeError, ScopeResult};
use crate::models::LossSampleSet;
use rand::Rng;
use rand_distr::{Bernoulli, Distribution, LogNormal};
use serde::Serialize;

/// Log-space parameters of the loss distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogNormalParams {
    pub mean: f64,
    pub std_dev: f64,
}

/// Derive log-normal parameters from a loss range.
///
/// The log-space mean is the midpoint of `ln(min)` and `ln(max)`, and the
/// standard deviation is that of a uniform spread over the same interval.
pub fn build_params(min_loss: f64, max_loss: f64) -> ScopeResult<LogNormalParams> {
    let finite = min_loss.is_finite() && max_loss.is_finite();
    if !finite || min_loss <= 0.0 || max_loss <= min_loss {
        return Err(ScopeError::InvalidRange { min_loss, max_loss });
    }

    let min_log = min_loss.ln();
    let max_log = max_loss.ln();

    Ok(LogNormalParams {
        mean: (min_log + max_log) / 2.0,
        std_dev: (max_log - min_log) / 12f64.sqrt(),
    })
}

/// Largest trial count a single run accepts
pub const MAX_TRIALS: usize = 1_000_000;

/// Validated inputs for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LossModelParams {
    pub min_loss: f64,
    pub max_loss: f64,
    pub trial_count: usize,
    pub event_probability: f64,
    pub control_probability: f64,
}

fn check_probability(name: &'static str, value: f64) -> ScopeResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ScopeError::InvalidProbability { name, value })
    }
}

impl LossModelParams {
    pub fn new(
        min_loss: f64,
        max_loss: f64,
        trial_count: usize,
        event_probability: f64,
        control_probability: f64,
    ) -> ScopeResult<Self> {
        build_params(min_loss, max_loss)?;
        if trial_count == 0 || trial_count > MAX_TRIALS {
            return Err(ScopeError::InvalidTrialCount(trial_count));
        }

        Ok(Self {
            min_loss,
            max_loss,
            trial_count,
            event_probability: check_probability("event probability", event_probability)?,
            control_probability: check_probability("control probability", control_probability)?,
        })
    }

    pub fn distribution(&self) -> ScopeResult<LogNormalParams> {
        build_params(self.min_loss, self.max_loss)
    }
}

/// Draw `trial_count` gated log-normal losses.
///
/// Variates and gates are drawn as two independent sequences; a sample is
/// the variate when its gate fires and zero otherwise.
pub fn simulate_losses<R>(
    rng: &mut R,
    params: &LogNormalParams,
    probability: f64,
    trial_count: usize,
) -> ScopeResult<LossSampleSet>
where
    R: Rng + ?Sized,
{
    let lognormal = LogNormal::new(params.mean, params.std_dev)
        .map_err(|e| ScopeError::external("log-normal distribution", e.to_string()))?;
    let gate = Bernoulli::new(probability).map_err(|_| ScopeError::InvalidProbability {
        name: "loss event probability",
        value: probability,
    })?;

    let variates: Vec<f64> = (0..trial_count).map(|_| lognormal.sample(rng)).collect();
    let gates: Vec<bool> = (0..trial_count).map(|_| gate.sample(rng)).collect();

    let values = variates
        .into_iter()
        .zip(gates)
        .map(|(loss, occurred)| if occurred { loss } else { 0.0 })
        .collect();

    Ok(LossSampleSet::new(values))
}

/// Everything produced by one simulation run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    pub params: LossModelParams,
    pub distribution: LogNormalParams,
    pub mean_loss_before: f64,
    pub mean_loss_after: f64,
    #[serde(skip)]
    pub before: LossSampleSet,
    #[serde(skip)]
    pub after: LossSampleSet,
    pub curves: ExceedanceSet,
}

/// Simulate losses before and after controls and build the curve triple.
pub fn run_simulation<R>(
    params: &LossModelParams,
    policy: &ThresholdPolicy,
    rng: &mut R,
) -> ScopeResult<SimulationOutcome>
where
    R: Rng + ?Sized,
{
    let distribution = params.distribution()?;
    log::info!(
        "Simulating {} trials (mean {:.4}, std dev {:.4}, event p {:.2}, control p {:.2})",
        params.trial_count,
        distribution.mean,
        distribution.std_dev,
        params.event_probability,
        params.control_probability
    );

    let trials = params.trial_count;
    let before = simulate_losses(rng, &distribution, params.event_probability, trials)?;
    let after = simulate_losses(rng, &distribution, params.control_probability, trials)?;
    let curves = build_exceedance_set(params, &before, &after, policy)?;

    let mean_loss_before = before.mean();
    let mean_loss_after = after.mean();
    log::debug!(
        "Mean simulated loss: {:.2} before control, {:.2} after",
        mean_loss_before,
        mean_loss_after
    );

    Ok(SimulationOutcome {
        params: *params,
        distribution,
        mean_loss_before,
        mean_loss_after,
        before,
        after,
        curves,
    })
}
