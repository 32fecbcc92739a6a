use crate::cli::commands::logs::print_sessions;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance;
use crate::core::identity::{require_admin, resolve_actor};
use crate::db::pool::DbPool;
use crate::db::queries::find_user_by_username;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::date::parse_date;

/// Handle the `report` command (admin only).
///
/// Two shapes:
///  - `--date YYYY-MM-DD`: daily summary, every user, oldest first
///  - `--user NAME [--from D] [--to D]`: one user's sessions in a range
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        date,
        user,
        from,
        to,
        actor,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let actor = resolve_actor(&pool.conn, actor)?;
        require_admin(&actor)?;

        match (date, user) {
            (Some(day), None) => {
                let day = parse_date(day)?;
                let sessions = attendance::daily_summary(&pool.conn, day)?;
                header(format!("Daily summary {}", day));
                print_sessions(&sessions);
            }
            (None, Some(target)) => {
                let user = find_user_by_username(&pool.conn, target)?
                    .ok_or_else(|| AppError::UserNotFound(target.clone()))?;
                let start = from.as_deref().map(parse_date).transpose()?;
                let end = to.as_deref().map(parse_date).transpose()?;

                let sessions = attendance::range_for_user(&pool.conn, user.id, start, end)?;
                header(format!("Sessions for {}", user.username));
                print_sessions(&sessions);
            }
            _ => {
                return Err(AppError::Other(
                    "use either --date or --user (with optional --from/--to)".into(),
                ));
            }
        }
    }
    Ok(())
}
