use crate::core::calculator::{day_gaps, get_day_coverage_info};
use crate::models::coverage::{CoverageGap, DayCoverageInfo};
use crate::models::language::Language;
use crate::models::service::ServiceWindow;
use crate::models::snapshot::Snapshot;
use chrono::NaiveDate;

/// Coverage of one date of a period.
#[derive(Debug, Clone)]
pub struct DayCoverage {
    pub date: NaiveDate,
    /// What the calendar cell shows (capped).
    pub info: DayCoverageInfo,
    /// Every gap of the day, for details and export.
    pub all_gaps: Vec<CoverageGap>,
}

pub struct Core;

impl Core {
    /// Run the day coverage check for every date of a period.
    pub fn month_coverage(
        snapshot: &Snapshot,
        dates: &[NaiveDate],
        selected_service: Option<&ServiceWindow>,
        lang: Language,
    ) -> Vec<DayCoverage> {
        dates
            .iter()
            .map(|date| DayCoverage {
                date: *date,
                info: get_day_coverage_info(
                    date,
                    selected_service,
                    &snapshot.services,
                    &snapshot.shifts,
                    lang,
                ),
                all_gaps: day_gaps(
                    date,
                    selected_service,
                    &snapshot.services,
                    &snapshot.shifts,
                    lang,
                ),
            })
            .collect()
    }

    pub fn highlighted_days(coverage: &[DayCoverage]) -> usize {
        coverage.iter().filter(|d| d.info.should_highlight).count()
    }
}
