//! Score summaries exported by an upstream report parser.
//!
//! A summary is a small JSON document such as
//! `{"kind": "burp", "score": 72.5}`. `kind` is optional; when present it
//! must match the flag the file was passed under.

use super::{ReportKind, ReportParser};
use crate::errors::{ScopeError, ScopeResult};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ScoreSummary {
    kind: Option<ReportKind>,
    score: f64,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SummaryReportParser;

impl SummaryReportParser {
    pub fn new() -> Self {
        Self
    }
}

impl ReportParser for SummaryReportParser {
    fn parse(&self, path: &Path, kind: ReportKind) -> ScopeResult<f64> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ScopeError::io(e, path.to_path_buf()))?;

        let summary: ScoreSummary =
            serde_json::from_str(&content).map_err(|e| ScopeError::ReportParse {
                kind,
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        match summary.kind {
            Some(found) if found != kind => Err(ScopeError::ReportParse {
                kind,
                path: path.to_path_buf(),
                message: format!("summary describes a {} report", found),
            }),
            _ => Ok(summary.score),
        }
    }
}
