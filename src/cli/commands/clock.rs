use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance;
use crate::core::geofence::Geofence;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::find_user_by_username;
use crate::errors::{AppError, AppResult};
use crate::models::point::GeoPoint;
use crate::ui::messages::{success, warning};

/// Handle the `in` and `out` commands (the two session boundary
/// transitions). Geofence validation happens inside the engine; this
/// layer only resolves the username and reports the outcome.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (username, lat, lon, is_in) = match cmd {
        Commands::In { username, lat, lon } => (username, lat, lon, true),
        Commands::Out { username, lat, lon } => (username, lat, lon, false),
        _ => return Ok(()),
    };

    let pool = DbPool::new(&cfg.database)?;
    let geofence = Geofence::from_config(cfg);
    let point = GeoPoint::from_parts(*lat, *lon);

    let user = find_user_by_username(&pool.conn, username)?
        .ok_or_else(|| AppError::UserNotFound(username.clone()))?;

    let session = if is_in {
        attendance::clock_in(&pool.conn, &geofence, user.id, point)?
    } else {
        attendance::clock_out(&pool.conn, &geofence, user.id, point)?
    };

    if is_in {
        success(format!(
            "{} clocked in at {} (session #{})",
            user.username,
            session.clock_in_str(),
            session.id
        ));
    } else {
        success(format!(
            "{} clocked out at {} (session #{})",
            user.username,
            session.clock_out_str(),
            session.id
        ));
    }

    let op = if is_in { "clock-in" } else { "clock-out" };
    if let Err(e) = audit(
        &pool.conn,
        op,
        &user.username,
        &format!("session #{}", session.id),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    Ok(())
}
