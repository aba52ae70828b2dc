pub mod calendar;
pub mod config;
pub mod day;
pub mod export;
pub mod footer;
pub mod gaps;
pub mod init;
pub mod services;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ingest::load_snapshot;
use crate::models::coverage::CoverageGap;
use crate::models::snapshot::Snapshot;
use crate::utils::colors::{color_for_gap_kind, paint};
use crate::utils::date;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// Load the snapshot the (already overridden) config points at.
pub(crate) fn load(cfg: &Config) -> AppResult<Snapshot> {
    load_snapshot(&expand_tilde(&cfg.snapshot))
}

pub(crate) fn parse_day(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// `--period` value, or the current month.
pub(crate) fn resolve_period(period: &Option<String>) -> AppResult<Vec<NaiveDate>> {
    match period {
        Some(p) => date::resolve_period(p).map_err(AppError::InvalidPeriod),
        None => Ok(date::current_month_dates()),
    }
}

/// Render gaps as a table: kind, from, to, description.
pub(crate) fn gaps_table(gaps: &[CoverageGap], color: bool) -> String {
    let mut table = Table::new(vec![
        Column::new("KIND"),
        Column::new("FROM"),
        Column::new("TO"),
        Column::new("DESCRIPTION"),
    ]);

    for gap in gaps {
        let kind = if color {
            paint(gap.kind.as_str(), color_for_gap_kind(gap.kind))
        } else {
            gap.kind.as_str().to_string()
        };
        table.add_row(vec![
            kind,
            gap.start_time.clone(),
            gap.end_time.clone(),
            gap.description.clone(),
        ]);
    }

    table.render()
}
