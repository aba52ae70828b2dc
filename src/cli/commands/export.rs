use crate::cli::commands::{load, resolve_period};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        service,
        force,
    } = cmd
    {
        let dates = resolve_period(period)?;
        let snapshot = load(cfg)?;
        let selected = snapshot.select_service(*service)?;

        ExportLogic::export(
            &snapshot,
            format.clone(),
            file,
            &dates,
            selected,
            cfg.language(),
            *force,
        )?;
    }
    Ok(())
}
