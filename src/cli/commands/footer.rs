use crate::cli::commands::{load, parse_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::get_combined_footer_gaps;
use crate::errors::AppResult;

const FOOTER_WIDTH: usize = 100;

/// Handle the `footer` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Footer { date, service } = cmd {
        let day = parse_day(date)?;
        let snapshot = load(cfg)?;
        let selected = snapshot.select_service(*service)?;

        let lines = get_combined_footer_gaps(
            Some(&day),
            selected,
            &snapshot.services,
            &snapshot.shifts,
            cfg.language(),
        )
        .unwrap_or_default();

        if lines.is_empty() {
            println!("No coverage gaps");
            return Ok(());
        }

        let options = textwrap::Options::new(FOOTER_WIDTH)
            .initial_indent("• ")
            .subsequent_indent("  ");
        for line in lines {
            println!("{}", textwrap::fill(&line, &options));
        }
    }
    Ok(())
}
