use crate::cli::commands::load;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};

/// Handle the `services` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let snapshot = load(cfg)?;

    let title = match &snapshot.property {
        Some(p) => format!("Services of {p}"),
        None => "Services".to_string(),
    };
    header(title, &cfg.separator_char);

    if snapshot.services.is_empty() {
        info("No services in snapshot.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("NAME"),
        Column::new("START"),
        Column::new("END"),
        Column::new("OVERNIGHT"),
        Column::new("SCHEDULE"),
    ]);

    for s in &snapshot.services {
        let time = |t: &Option<String>| {
            let raw = t.clone().unwrap_or_else(|| "--:--".to_string());
            if cfg.color {
                colorize_optional(&raw)
            } else {
                raw
            }
        };
        let schedule = match &s.schedule {
            Some(dates) => format!("{} day(s)", dates.len()),
            None => "every day".to_string(),
        };

        table.add_row(vec![
            s.id.to_string(),
            s.name.clone(),
            time(&s.start_time),
            time(&s.end_time),
            if s.is_overnight() { "yes" } else { "no" }.to_string(),
            schedule,
        ]);
    }

    print!("{}", table.render());
    println!(
        "\n{} service(s), {} shift(s)",
        snapshot.services.len(),
        snapshot.shift_count()
    );
    Ok(())
}
