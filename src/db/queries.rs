use crate::errors::{AppError, AppResult};
use crate::models::point::GeoPoint;
use crate::models::role::Role;
use crate::models::session::{AttendanceSession, TS_FORMAT};
use crate::models::user::User;
use chrono::NaiveDateTime;
use rusqlite::{Connection, Result, Row, params};

// ---------------------------------------------------------------------------
// Row mapping
// ---------------------------------------------------------------------------

pub fn map_user_row(row: &Row) -> Result<User> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRole(role_str.clone())),
        )
    })?;

    Ok(User {
        id: row.get("id")?,
        name: row.get("name")?,
        username: row.get("username")?,
        role,
    })
}

fn parse_ts(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TS_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.to_string())),
        )
    })
}

pub fn map_session_row(row: &Row) -> Result<AttendanceSession> {
    let clock_in_str: String = row.get("clock_in")?;
    let clock_out_str: Option<String> = row.get("clock_out")?;

    let clock_in = parse_ts(&clock_in_str)?;
    let clock_out = match clock_out_str {
        Some(raw) => Some(parse_ts(&raw)?),
        None => None,
    };

    Ok(AttendanceSession {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        clock_in,
        clock_out,
        location_in: GeoPoint::from_parts(row.get("lat_in")?, row.get("lon_in")?),
        location_out: GeoPoint::from_parts(row.get("lat_out")?, row.get("lon_out")?),
    })
}

fn collect_sessions(
    rows: impl Iterator<Item = Result<AttendanceSession>>,
) -> AppResult<Vec<AttendanceSession>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

pub fn insert_user(conn: &Connection, name: &str, username: &str, role: Role) -> AppResult<User> {
    let res = conn.execute(
        "INSERT INTO users (name, username, role) VALUES (?1, ?2, ?3)",
        params![name, username, role.to_db_str()],
    );

    match res {
        Ok(_) => {}
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            return Err(AppError::DuplicateUsername(username.to_string()));
        }
        Err(e) => return Err(e.into()),
    }

    Ok(User {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        username: username.to_string(),
        role,
    })
}

pub fn find_user_by_username(conn: &Connection, username: &str) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare("SELECT * FROM users WHERE username = ?1")?;
    let mut rows = stmt.query_map([username], map_user_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

pub fn find_user_by_id(conn: &Connection, id: i64) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare("SELECT * FROM users WHERE id = ?1")?;
    let mut rows = stmt.query_map([id], map_user_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

pub fn list_users(conn: &Connection) -> AppResult<Vec<User>> {
    let mut stmt = conn.prepare("SELECT * FROM users ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Attendance sessions
// ---------------------------------------------------------------------------

/// Insert a freshly opened session (clock_out NULL).
///
/// A duplicate (user_id, clock_in) pair trips the UNIQUE constraint and
/// surfaces as a database error; the engine does not retry.
pub fn insert_session(
    conn: &Connection,
    user_id: i64,
    clock_in: NaiveDateTime,
    location_in: Option<GeoPoint>,
) -> AppResult<AttendanceSession> {
    conn.execute(
        "INSERT INTO attendance_logs (user_id, clock_in, lat_in, lon_in)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            user_id,
            clock_in.format(TS_FORMAT).to_string(),
            location_in.map(|p| p.latitude),
            location_in.map(|p| p.longitude),
        ],
    )?;

    Ok(AttendanceSession {
        id: conn.last_insert_rowid(),
        user_id,
        clock_in,
        clock_out: None,
        location_in,
        location_out: None,
    })
}

/// The most recent still-open session for a user, if any.
/// Ties on clock_in are broken by the highest id (latest insert).
pub fn latest_open_session(
    conn: &Connection,
    user_id: i64,
) -> AppResult<Option<AttendanceSession>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM attendance_logs
         WHERE user_id = ?1 AND clock_out IS NULL
         ORDER BY clock_in DESC, id DESC
         LIMIT 1",
    )?;
    let mut rows = stmt.query_map([user_id], map_session_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

/// Close a session: set clock_out and the out-location, exactly once.
pub fn close_session(
    conn: &Connection,
    session_id: i64,
    clock_out: NaiveDateTime,
    location_out: Option<GeoPoint>,
) -> AppResult<()> {
    conn.execute(
        "UPDATE attendance_logs
         SET clock_out = ?1, lat_out = ?2, lon_out = ?3
         WHERE id = ?4",
        params![
            clock_out.format(TS_FORMAT).to_string(),
            location_out.map(|p| p.latitude),
            location_out.map(|p| p.longitude),
            session_id,
        ],
    )?;
    Ok(())
}

pub fn sessions_all(conn: &Connection) -> AppResult<Vec<AttendanceSession>> {
    let mut stmt = conn.prepare("SELECT * FROM attendance_logs ORDER BY clock_in DESC")?;
    let rows = stmt.query_map([], map_session_row)?;
    collect_sessions(rows)
}

pub fn sessions_for_user(conn: &Connection, user_id: i64) -> AppResult<Vec<AttendanceSession>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM attendance_logs
         WHERE user_id = ?1
         ORDER BY clock_in DESC",
    )?;
    let rows = stmt.query_map([user_id], map_session_row)?;
    collect_sessions(rows)
}

/// Sessions whose clock_in falls inside [start, end], both inclusive,
/// oldest first. Used by the daily summary and the report export.
pub fn sessions_between(
    conn: &Connection,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> AppResult<Vec<AttendanceSession>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM attendance_logs
         WHERE clock_in >= ?1 AND clock_in <= ?2
         ORDER BY clock_in ASC",
    )?;
    let rows = stmt.query_map(
        [
            start.format(TS_FORMAT).to_string(),
            end.format(TS_FORMAT).to_string(),
        ],
        map_session_row,
    )?;
    collect_sessions(rows)
}

/// Sessions for one user with optional clock_in bounds, oldest first.
/// Bounds are applied exactly as given; a caller wanting a day-inclusive
/// upper bound must pass the end-of-day instant itself.
pub fn sessions_for_user_range(
    conn: &Connection,
    user_id: i64,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> AppResult<Vec<AttendanceSession>> {
    let mut sql = String::from("SELECT * FROM attendance_logs WHERE user_id = ?1");
    let mut owned: Vec<String> = Vec::new();

    if let Some(s) = start {
        owned.push(s.format(TS_FORMAT).to_string());
        sql.push_str(&format!(" AND clock_in >= ?{}", owned.len() + 1));
    }
    if let Some(e) = end {
        owned.push(e.format(TS_FORMAT).to_string());
        sql.push_str(&format!(" AND clock_in <= ?{}", owned.len() + 1));
    }
    sql.push_str(" ORDER BY clock_in ASC");

    let mut params_vec: Vec<&dyn rusqlite::ToSql> = vec![&user_id];
    for s in &owned {
        params_vec.push(s as &dyn rusqlite::ToSql);
    }

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params_vec), map_session_row)?;
    collect_sessions(rows)
}
