use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance;
use crate::core::identity::{require_admin, resolve_actor};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::utils::date::parse_date;
use std::path::Path;

/// Handle the `export` command (admin only): the daily-summary rows of
/// one date, written to a file in the requested format.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        date,
        output,
        format,
        actor,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let actor = resolve_actor(&pool.conn, actor)?;
        require_admin(&actor)?;

        let day = parse_date(date)?;
        let sessions = attendance::daily_summary(&pool.conn, day)?;

        let path = Path::new(output);
        match format {
            ExportFormat::Csv => csv::write_csv(path, &sessions)?,
            ExportFormat::Json => json::write_json(path, &sessions)?,
        }

        notify_export_success(format.as_str(), path);
    }
    Ok(())
}
