use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance;
use crate::core::identity::{require_admin, require_self_or_admin, resolve_actor};
use crate::db::pool::DbPool;
use crate::db::queries::find_user_by_username;
use crate::errors::{AppError, AppResult};
use crate::models::session::AttendanceSession;
use crate::utils::table::Table;

/// Handle the `logs` command: all sessions (admin) or one user's sessions
/// (the user themselves, or an admin). Newest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Logs { username, actor } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let actor = resolve_actor(&pool.conn, actor)?;

        let sessions = match username {
            Some(target) => {
                let user = find_user_by_username(&pool.conn, target)?
                    .ok_or_else(|| AppError::UserNotFound(target.clone()))?;
                require_self_or_admin(&actor, user.id)?;
                attendance::list_for_user(&pool.conn, user.id)?
            }
            None => {
                require_admin(&actor)?;
                attendance::list_all(&pool.conn)?
            }
        };

        print_sessions(&sessions);
    }
    Ok(())
}

pub fn print_sessions(sessions: &[AttendanceSession]) {
    if sessions.is_empty() {
        println!("No attendance sessions found.");
        return;
    }

    let mut table = Table::new(&["ID", "USER", "CLOCK IN", "CLOCK OUT", "IN POS", "OUT POS"]);
    for s in sessions {
        table.add_row(vec![
            s.id.to_string(),
            s.user_id.to_string(),
            s.clock_in_str(),
            if s.is_open() {
                "(open)".to_string()
            } else {
                s.clock_out_str()
            },
            s.location_in.map(|p| p.to_string()).unwrap_or_default(),
            s.location_out.map(|p| p.to_string()).unwrap_or_default(),
        ]);
    }
    print!("{}", table.render());
}
