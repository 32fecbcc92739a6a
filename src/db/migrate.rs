//! Schema migrations. Every table is created here and nowhere else;
//! `run_pending_migrations` is idempotent and safe to call on every start.

use rusqlite::{Connection, OptionalExtension, Result};

/// Check if a table exists in the connected database.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `users` table.
fn create_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            name     TEXT NOT NULL,
            username TEXT NOT NULL UNIQUE,
            role     TEXT NOT NULL CHECK(role IN ('staff','admin','db_admin'))
        );
        "#,
    )?;
    Ok(())
}

/// Create the `attendance_logs` table.
///
/// The UNIQUE(user_id, clock_in) constraint is the only concurrency
/// safeguard against duplicate simultaneous clock-ins for a user; the
/// engine does not serialize writes beyond it.
fn create_attendance_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance_logs (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id   INTEGER NOT NULL REFERENCES users(id),
            clock_in  TEXT NOT NULL,
            clock_out TEXT,
            lat_in    REAL,
            lon_in    REAL,
            lat_out   REAL,
            lon_out   REAL,
            UNIQUE(user_id, clock_in)
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_clock_in ON attendance_logs(clock_in);
        CREATE INDEX IF NOT EXISTS idx_attendance_user ON attendance_logs(user_id, clock_in);
        CREATE INDEX IF NOT EXISTS idx_attendance_open ON attendance_logs(user_id)
            WHERE clock_out IS NULL;
        "#,
    )?;
    Ok(())
}

/// Run all pending migrations on the connected database.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_users_table(conn)?;
    create_attendance_table(conn)?;
    Ok(())
}
