use crate::errors::{AppError, AppResult};
use crate::models::session::AttendanceSession;
use csv::Writer;
use std::path::Path;

/// Write the flattened report rows (id, user, clock in/out) to `path`.
/// The full location columns stay out of the export on purpose: the
/// report read-model only answers "who was here and when".
pub fn write_csv(path: &Path, sessions: &[AttendanceSession]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(["attendance_id", "user_id", "clock_in", "clock_out"])
        .map_err(|e| AppError::Export(e.to_string()))?;

    for s in sessions {
        wtr.write_record(&[
            s.id.to_string(),
            s.user_id.to_string(),
            s.clock_in_str(),
            s.clock_out_str(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
