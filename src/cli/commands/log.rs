use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::Table;

/// Handle the `log` command: dump the internal audit table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let pool = DbPool::new(&cfg.database)?;
        let rows = load_audit(&pool.conn)?;

        if rows.is_empty() {
            println!("Audit log is empty.");
            return Ok(());
        }

        let mut table = Table::new(&["DATE", "OPERATION", "TARGET", "MESSAGE"]);
        for (date, operation, target, message) in rows {
            table.add_row(vec![date, operation, target, message]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
