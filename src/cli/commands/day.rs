use crate::cli::commands::{gaps_table, load, parse_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::get_day_coverage_info;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_highlight, paint};

/// Handle the `day` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date, service } = cmd {
        let day = parse_day(date)?;
        let snapshot = load(cfg)?;
        let selected = snapshot.select_service(*service)?;

        let info = get_day_coverage_info(
            &day,
            selected,
            &snapshot.services,
            &snapshot.shifts,
            cfg.language(),
        );

        let scope = info
            .service_name
            .clone()
            .unwrap_or_else(|| "all services".to_string());
        header(format!("{} ({})", day.format("%Y-%m-%d"), scope), &cfg.separator_char);

        let highlight = if info.should_highlight { "yes" } else { "no" };
        let highlight = if cfg.color {
            paint(highlight, color_for_highlight(info.should_highlight))
        } else {
            highlight.to_string()
        };
        println!("Highlight: {}", highlight);

        if info.gaps.is_empty() {
            println!("No coverage gaps");
        } else {
            println!();
            print!("{}", gaps_table(&info.gaps, cfg.color));
        }
    }
    Ok(())
}
