use crate::errors::{ScopeError, ScopeResult};
use crate::scoring::RiskLevel;
use serde::{Deserialize, Serialize};

/// One ordinal question; answers are 1-based option indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorQuestion {
    pub prompt: String,
    pub options: Vec<String>,
}

impl FactorQuestion {
    pub fn new<I, S>(prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Highest selectable index, which is also the question's score weight
    pub fn max_option(&self) -> u32 {
        self.options.len() as u32
    }

    pub fn accepts(&self, selection: u32) -> bool {
        (1..=self.max_option()).contains(&selection)
    }
}

/// A weighted dimension of the total risk score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorCategory {
    name: String,
    questions: Vec<FactorQuestion>,
}

impl FactorCategory {
    /// Build a category, rejecting questions without options.
    pub fn new(name: impl Into<String>, questions: Vec<FactorQuestion>) -> ScopeResult<Self> {
        let name = name.into();

        if let Some(empty) = questions.iter().find(|q| q.options.is_empty()) {
            return Err(ScopeError::InvalidCategory {
                name,
                reason: format!("question '{}' has no options", empty.prompt),
            });
        }

        let category = Self { name, questions };
        if category.max_possible_score() == 0 {
            return Err(ScopeError::InvalidCategory {
                name: category.name,
                reason: "maximum possible score must be positive".to_string(),
            });
        }

        Ok(category)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn questions(&self) -> &[FactorQuestion] {
        &self.questions
    }

    /// Sum of every question's highest option index
    pub fn max_possible_score(&self) -> u32 {
        self.questions.iter().map(FactorQuestion::max_option).sum()
    }
}

/// Outcome of one questionnaire run over a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: String,
    pub selections: Vec<u32>,
    pub raw_score: u32,
    pub max_possible_score: u32,
    pub normalized_percent: f64,
}

/// Each category contributes a quarter of its normalized percentage.
pub const CATEGORY_WEIGHT_DIVISOR: f64 = 4.0;

impl CategoryResult {
    pub fn from_selections(category: &FactorCategory, selections: Vec<u32>) -> Self {
        let raw_score: u32 = selections.iter().sum();
        let max_possible_score = category.max_possible_score();
        let normalized_percent = (raw_score as f64 / max_possible_score as f64) * 100.0;

        Self {
            category: category.name().to_string(),
            selections,
            raw_score,
            max_possible_score,
            normalized_percent,
        }
    }

    /// Contribution of this category to the total risk percentage
    pub fn weighted_percent(&self) -> f64 {
        self.normalized_percent / CATEGORY_WEIGHT_DIVISOR
    }
}

/// Where the vulnerability contribution came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum VulnerabilitySource {
    Reports {
        burp: Option<f64>,
        nessus: Option<f64>,
    },
    Manual {
        raw_score: u32,
        max_possible_score: u32,
    },
}

/// Final record of one assessment session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub vulnerability_pct: f64,
    pub technical_pct: f64,
    pub business_pct: f64,
    pub threat_pct: f64,
    /// Unclamped sum of the four contributions
    pub total_pct: f64,
    pub risk_level: RiskLevel,
    pub vulnerability_source: VulnerabilitySource,
    pub assessed_at: String,
    pub assessor: String,
}

impl RiskAssessment {
    pub fn new(
        vulnerability_pct: f64,
        vulnerability_source: VulnerabilitySource,
        technical_pct: f64,
        business_pct: f64,
        threat_pct: f64,
    ) -> Self {
        let total_pct = vulnerability_pct + technical_pct + business_pct + threat_pct;

        Self {
            vulnerability_pct,
            technical_pct,
            business_pct,
            threat_pct,
            total_pct,
            risk_level: RiskLevel::from_score(total_pct),
            vulnerability_source,
            assessed_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            assessor: whoami::username(),
        }
    }
}

/// Simulated losses for one scenario, zero where the loss event did not occur.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LossSampleSet {
    values: Vec<f64>,
}

impl LossSampleSet {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Fraction of samples at or above `loss`
    pub fn exceedance_probability(&self, loss: f64) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let hits = self.values.iter().filter(|&&v| v >= loss).count();
        hits as f64 / self.values.len() as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub loss: f64,
    pub probability_pct: f64,
}

/// Probability (in percent) that a loss is at least x, over a swept loss axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceedanceCurve {
    pub points: Vec<CurvePoint>,
}

impl ExceedanceCurve {
    pub fn probabilities(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.probability_pct)
    }
}
