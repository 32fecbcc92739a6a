use super::point::GeoPoint;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Storage format for timestamps (UTC). Lexicographic order on the stored
/// TEXT column matches chronological order, which the range queries rely on.
pub const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One attendance session: opened by a clock-in, closed (at most once)
/// by a clock-out. `clock_out == None` means the session is still open.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceSession {
    pub id: i64,
    pub user_id: i64,            // ⇔ attendance_logs.user_id
    pub clock_in: NaiveDateTime, // ⇔ attendance_logs.clock_in (TEXT, UTC)
    pub clock_out: Option<NaiveDateTime>,
    pub location_in: Option<GeoPoint>,
    pub location_out: Option<GeoPoint>,
}

impl AttendanceSession {
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    pub fn clock_in_str(&self) -> String {
        self.clock_in.format(TS_FORMAT).to_string()
    }

    pub fn clock_out_str(&self) -> String {
        self.clock_out
            .map(|t| t.format(TS_FORMAT).to_string())
            .unwrap_or_default()
    }
}
