use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::identity::{require_admin, resolve_actor};
use crate::db::pool::DbPool;
use crate::db::queries::{insert_user, list_users};
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::ui::messages::success;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User {
        add,
        list,
        name,
        username,
        role,
        actor,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *add {
            let name = name
                .as_deref()
                .ok_or_else(|| AppError::Other("--name is required with --add".into()))?;
            let username = username
                .as_deref()
                .ok_or_else(|| AppError::Other("--username is required with --add".into()))?;
            let role_code = role
                .as_deref()
                .ok_or_else(|| AppError::Other("--role is required with --add".into()))?;
            let role = Role::from_code(role_code)
                .ok_or_else(|| AppError::InvalidRole(role_code.to_string()))?;

            let user = insert_user(&pool.conn, name, username, role)?;
            success(format!(
                "User '{}' registered with id {} ({})",
                user.username,
                user.id,
                user.role.to_db_str()
            ));
        }

        if *list {
            let actor_name = actor
                .as_deref()
                .ok_or_else(|| AppError::Unauthenticated("--as is required for --list".into()))?;
            let actor = resolve_actor(&pool.conn, actor_name)?;
            require_admin(&actor)?;

            let mut table = Table::new(&["ID", "NAME", "USERNAME", "ROLE"]);
            for u in list_users(&pool.conn)? {
                table.add_row(vec![
                    u.id.to_string(),
                    u.name.clone(),
                    u.username.clone(),
                    u.role.to_db_str().to_string(),
                ]);
            }

            if table.is_empty() {
                println!("No users registered.");
            } else {
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
