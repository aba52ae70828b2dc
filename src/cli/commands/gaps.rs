use crate::cli::commands::gaps_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::compute_service_gaps;
use crate::errors::{AppError, AppResult};
use crate::models::interval::TimeInterval;
use crate::models::shift::ShiftRecord;
use crate::utils::date;
use crate::utils::formatting::mins2readable;
use crate::utils::time::{MINUTES_PER_DAY, parse_minutes, parse_time_range};

/// Handle the `gaps` command: one window, shifts given on the command line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Gaps {
        start,
        end,
        name,
        shifts,
    } = cmd
    {
        for t in [start, end] {
            if parse_minutes(t).is_none() {
                return Err(AppError::InvalidTime(t.clone()));
            }
        }

        let day = date::today();
        let records = shifts
            .iter()
            .enumerate()
            .map(|(i, raw)| -> AppResult<ShiftRecord> {
                let (s, e) = parse_time_range(raw)?;
                Ok(ShiftRecord::between(i as i64 + 1, None, day, s, e))
            })
            .collect::<AppResult<Vec<_>>>()?;

        let gaps = compute_service_gaps(&records, start, end, name, cfg.language());

        if gaps.is_empty() {
            println!("✅ Window {}-{} fully covered", start, end);
            return Ok(());
        }

        print!("{}", gaps_table(&gaps, cfg.color));

        let uncovered: i64 = gaps
            .iter()
            .filter_map(|g| {
                let from = parse_minutes(&g.start_time)?;
                let to = parse_minutes(&g.end_time)?;
                let to = if to > from { to } else { to + MINUTES_PER_DAY };
                Some(TimeInterval::new(from, to).duration_minutes() as i64)
            })
            .sum();
        println!("\nUncovered: {}", mins2readable(uncovered, false, false));
    }
    Ok(())
}
