use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        // ---- CHECK / MIGRATE need an existing file ----
        if (*check || *run_migrate) && !path.exists() {
            warning(format!(
                "No configuration file at {} (run `rshiftgap init`)",
                path.display()
            ));
            return Ok(());
        }

        if *check {
            let missing = migrate::missing_fields(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
                info("Run `rshiftgap config --migrate` to add them with default values.");
            }
        }

        if *run_migrate {
            migrate::migrate_config(&path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
