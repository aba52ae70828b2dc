use crate::cli::commands::{gaps_table, load, resolve_period};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::CalendarLogic;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::header;
use chrono::Datelike;

/// Handle the `calendar` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        period,
        service,
        details,
    } = cmd
    {
        let dates = resolve_period(period)?;
        let snapshot = load(cfg)?;
        let selected = snapshot.select_service(*service)?;

        let coverage = Core::month_coverage(&snapshot, &dates, selected, cfg.language());

        let scope = selected
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "all services".to_string());
        header(format!("Coverage calendar ({scope})"), &cfg.separator_char);

        for (year, month) in CalendarLogic::months_of(&dates) {
            let month_days: Vec<_> = coverage
                .iter()
                .filter(|c| c.date.year() == year && c.date.month() == month)
                .cloned()
                .collect();
            println!(
                "{}",
                CalendarLogic::render_month(year, month, &month_days, cfg.color)
            );
        }

        println!(
            "Days with gaps: {} / {}",
            Core::highlighted_days(&coverage),
            coverage.len()
        );

        if *details {
            for day in coverage.iter().filter(|c| c.info.should_highlight) {
                println!("\n{}", day.date.format("%Y-%m-%d"));
                print!("{}", gaps_table(&day.all_gaps, cfg.color));
            }
        }
    }
    Ok(())
}
