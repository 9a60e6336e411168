//! Exceedance Curve Builder

use super::LossModelParams;
use crate::errors::{ScopeError, ScopeResult};
use crate::models::{CurvePoint, ExceedanceCurve, LossSampleSet};
use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD_MULTIPLIER: f64 = 0.8;
pub const DEFAULT_THRESHOLD_FLOOR: f64 = 0.01;

/// Business policy for the acceptable-loss-threshold curve: a fraction of
/// the after-control probability, never below a probability floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    pub multiplier: f64,
    /// Minimum probability as a fraction (0.01 = 1%)
    pub floor: f64,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_THRESHOLD_MULTIPLIER,
            floor: DEFAULT_THRESHOLD_FLOOR,
        }
    }
}

impl ThresholdPolicy {
    pub fn new(multiplier: f64, floor: f64) -> ScopeResult<Self> {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(ScopeError::InvalidPolicy(format!(
                "multiplier {} must be a non-negative number",
                multiplier
            )));
        }
        if !(0.0..=1.0).contains(&floor) {
            return Err(ScopeError::InvalidPolicy(format!(
                "floor {} must be a probability between 0 and 1",
                floor
            )));
        }
        Ok(Self { multiplier, floor })
    }

    /// Apply the policy to an after-control probability (fraction).
    pub fn apply(&self, probability: f64) -> f64 {
        (self.multiplier * probability).max(self.floor)
    }
}

/// `points` evenly spaced values from `min` to `max`, both ends included.
pub fn loss_axis(min: f64, max: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![min],
        n => {
            let step = (max - min) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { max } else { min + step * i as f64 })
                .collect()
        }
    }
}

/// Exceedance curve of `samples` over a `trial_count`-point axis.
///
/// Each point holds the percentage of samples at or above its loss value,
/// so the curve never increases along the axis.
pub fn build_curve(
    min_loss: f64,
    max_loss: f64,
    samples: &LossSampleSet,
    trial_count: usize,
) -> ScopeResult<ExceedanceCurve> {
    if trial_count == 0 {
        return Err(ScopeError::InvalidTrialCount(trial_count));
    }
    if samples.len() != trial_count {
        return Err(ScopeError::SampleCountMismatch {
            expected: trial_count,
            actual: samples.len(),
        });
    }
    if !(min_loss.is_finite() && max_loss.is_finite() && max_loss >= min_loss) {
        return Err(ScopeError::InvalidRange { min_loss, max_loss });
    }

    let mut sorted = samples.values().to_vec();
    sorted.sort_by(f64::total_cmp);

    let points = loss_axis(min_loss, max_loss, trial_count)
        .into_iter()
        .map(|loss| {
            let at_least = sorted.len() - sorted.partition_point(|&s| s < loss);
            CurvePoint {
                loss,
                probability_pct: at_least as f64 / trial_count as f64 * 100.0,
            }
        })
        .collect();

    Ok(ExceedanceCurve { points })
}

/// Pointwise `max(multiplier * after, floor)` over the after-control curve.
pub fn acceptable_loss_threshold(
    after: &ExceedanceCurve,
    policy: &ThresholdPolicy,
) -> ExceedanceCurve {
    let points = after
        .points
        .iter()
        .map(|point| CurvePoint {
            loss: point.loss,
            probability_pct: policy.apply(point.probability_pct / 100.0) * 100.0,
        })
        .collect();

    ExceedanceCurve { points }
}

/// The before/after/threshold curves, ready for plotting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExceedanceSet {
    pub before: ExceedanceCurve,
    pub after: ExceedanceCurve,
    pub threshold: ExceedanceCurve,
    pub policy: ThresholdPolicy,
}

pub fn build_exceedance_set(
    params: &LossModelParams,
    before: &LossSampleSet,
    after: &LossSampleSet,
    policy: &ThresholdPolicy,
) -> ScopeResult<ExceedanceSet> {
    let before_curve = build_curve(params.min_loss, params.max_loss, before, params.trial_count)?;
    let after_curve = build_curve(params.min_loss, params.max_loss, after, params.trial_count)?;
    let threshold = acceptable_loss_threshold(&after_curve, policy);

    Ok(ExceedanceSet {
        before: before_curve,
        after: after_curve,
        threshold,
        policy: *policy,
    })
}
