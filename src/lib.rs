//! SecureScope Risk Assessor
//!
//! Scores a single security finding across vulnerability, technical impact,
//! business impact and threat agent factors, and estimates financial loss
//! exceedance before and after mitigating controls with a Monte Carlo
//! simulation.

pub mod answers;
pub mod cli;
pub mod errors;
pub mod exporter;
pub mod models;
pub mod questionnaire;
pub mod reports;
pub mod scoring;
pub mod session;
pub mod simulation;
pub mod ui;

pub use errors::{ScopeError, ScopeResult};
pub use session::{AssessmentSession, SessionReport};
