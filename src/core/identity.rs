//! Identity resolution and capability checks for the CLI boundary.
//!
//! The attendance engine never looks at roles; whoever invokes an
//! admin-scoped command must pass these gates first.

use crate::db::queries::find_user_by_username;
use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use rusqlite::Connection;

/// Resolve the acting identity from a username stated on the command line.
pub fn resolve_actor(conn: &Connection, username: &str) -> AppResult<User> {
    find_user_by_username(conn, username)?
        .ok_or_else(|| AppError::Unauthenticated(format!("unknown actor '{}'", username)))
}

/// Admin capability gate.
pub fn require_admin(actor: &User) -> AppResult<()> {
    if actor.role.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "'{}' lacks admin privileges",
            actor.username
        )))
    }
}

/// Self-or-admin gate: staff may only read their own records.
pub fn require_self_or_admin(actor: &User, target_user_id: i64) -> AppResult<()> {
    if actor.role.is_admin() || actor.id == target_user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "'{}' may only view their own attendance",
            actor.username
        )))
    }
}
