use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Print basic information about the connected database.
pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    let users: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    let sessions: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM attendance_logs", [], |row| row.get(0))?;
    let open: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM attendance_logs WHERE clock_out IS NULL",
        [],
        |row| row.get(0),
    )?;

    println!("Database        : {}", db_path);
    println!("Users           : {}", users);
    println!("Sessions        : {}", sessions);
    println!("Open sessions   : {}", open);

    Ok(())
}
