use crate::errors::{AppError, AppResult};
use crate::models::session::AttendanceSession;
use std::fs;
use std::path::Path;

/// Dump the sessions with all fields (including locations) as pretty JSON.
pub fn write_json(path: &Path, sessions: &[AttendanceSession]) -> AppResult<()> {
    let body =
        serde_json::to_string_pretty(sessions).map_err(|e| AppError::Export(e.to_string()))?;
    fs::write(path, body)?;
    Ok(())
}
