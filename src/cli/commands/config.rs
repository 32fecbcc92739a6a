use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigLoad)?;
            println!("{}", yaml);
        }

        if *check {
            let mut ok = true;

            if cfg.database.trim().is_empty() {
                warning("database path is empty");
                ok = false;
            }
            if !(-90.0..=90.0).contains(&cfg.institution_latitude) {
                warning(format!(
                    "institution_latitude {} outside [-90, 90]",
                    cfg.institution_latitude
                ));
                ok = false;
            }
            if !(-180.0..=180.0).contains(&cfg.institution_longitude) {
                warning(format!(
                    "institution_longitude {} outside [-180, 180]",
                    cfg.institution_longitude
                ));
                ok = false;
            }
            if cfg.max_radius_meters == 0 {
                warning("max_radius_meters is 0: every clock event will be rejected unless exactly on the reference point");
            }

            if ok {
                success("Configuration looks valid.");
            }
        }
    }
    Ok(())
}
