use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rShiftgap…");

    let cfg = Config::init_all(cli.snapshot.clone(), cli.test)?;

    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Snapshot    : {}", cfg.snapshot);

    if !expand_tilde(&cfg.snapshot).exists() {
        warning("Snapshot file not found yet: export one from the back office to this path.");
    }

    info(format!("Language: {}", cfg.language));
    success("rShiftgap initialization completed!");
    Ok(())
}
