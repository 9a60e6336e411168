use crate::errors::{ScopeError, ScopeResult};
use crate::session::SessionReport;
use std::path::Path;

/// Writes a finished session as pretty-printed JSON.
pub struct JsonExporter;

impl JsonExporter {
    pub fn export(report: &SessionReport, path: &Path) -> ScopeResult<()> {
        log::info!("Writing JSON results to: {:?}", path);
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(path, json).map_err(|e| ScopeError::io(e, path.to_path_buf()))?;
        Ok(())
    }
}
