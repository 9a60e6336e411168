//! Custom error types for the SecureScope risk assessor.
//!
//! Most of these are recovered from where they occur (bad answers, failed
//! reports, invalid loss ranges); only I/O failures and an exhausted answer
//! source end a session.

use crate::reports::ReportKind;
use std::path::PathBuf;

/// The main error type for SecureScope operations.
#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    /// I/O error (report read, answer file, export write)
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A scanner report could not be turned into a score
    #[error("Failed to process {kind} report {path:?}: {message}")]
    ReportParse {
        kind: ReportKind,
        path: PathBuf,
        message: String,
    },

    /// A report produced a score outside [0, 100]
    #[error("{kind} report score {score} is outside 0-100")]
    ScoreOutOfRange { kind: ReportKind, score: f64 },

    /// Loss range that cannot be log-transformed
    #[error("Invalid loss range: minimum {min_loss} must be > 0 and maximum {max_loss} above it")]
    InvalidRange { min_loss: f64, max_loss: f64 },

    #[error("Invalid trial count {0}: must be 1 to {max}", max = crate::simulation::MAX_TRIALS)]
    InvalidTrialCount(usize),

    /// Probability outside [0, 1]
    #[error("Invalid {name}: {value} is not a probability between 0 and 1")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("Invalid threshold policy: {0}")]
    InvalidPolicy(String),

    /// Malformed factor category definition
    #[error("Invalid factor category '{name}': {reason}")]
    InvalidCategory { name: String, reason: String },

    /// Sample set length does not match the requested trial count
    #[error("Sample count mismatch: expected {expected} samples, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    /// The answer source ran dry before the session finished
    #[error("Answer source exhausted before the assessment completed")]
    AnswersExhausted,

    /// Generic error for external library errors
    #[error("{context}: {message}")]
    External { context: String, message: String },
}

/// Result type alias using ScopeError
pub type ScopeResult<T> = Result<T, ScopeError>;

impl ScopeError {
    /// Create an I/O error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an external error with context
    pub fn external(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::External {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Whether the user can correct this by re-entering simulation parameters
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. } | Self::InvalidTrialCount(_) | Self::InvalidProbability { .. }
        )
    }
}

/// Convert from raw I/O errors (without path context)
impl From<std::io::Error> for ScopeError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}
