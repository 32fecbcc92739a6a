use crate::db::migrate::{run_pending_migrations, table_exists};
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine,
/// then verifies the tables the engine relies on actually exist.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;

    for table in ["users", "attendance_logs", "log"] {
        if !table_exists(conn, table)? {
            return Err(AppError::Migration(format!("table '{}' missing", table)));
        }
    }

    Ok(())
}
