//! Coverage of a single calendar day, for one service or for all of them.

use crate::core::calculator::gaps::compute_service_gaps;
use crate::models::coverage::{CoverageGap, DayCoverageInfo};
use crate::models::language::Language;
use crate::models::service::ServiceWindow;
use crate::models::shift::{ShiftRecord, ShiftsByGuardAndDate, shifts_for_day};
use chrono::NaiveDate;

/// Gaps shown in a calendar cell.
pub const MAX_DAY_GAPS: usize = 3;
/// Services listed in a cell when no service is selected.
pub const MAX_AGGREGATE_SERVICES: usize = 2;
/// Gaps per service listed in a cell when no service is selected.
pub const MAX_GAPS_PER_SERVICE: usize = 2;

/// Decide whether a calendar cell is highlighted and which gaps it lists.
///
/// With a selected service only its own shifts count, and a day outside the
/// service schedule never reports gaps. Without a selection every service
/// that has shifts on the day is checked against the day's whole shift pool.
pub fn get_day_coverage_info(
    day: &NaiveDate,
    selected_service: Option<&ServiceWindow>,
    all_services: &[ServiceWindow],
    shifts: &ShiftsByGuardAndDate,
    lang: Language,
) -> DayCoverageInfo {
    match selected_service {
        Some(service) => {
            let mut gaps = selected_service_gaps(day, service, shifts, lang);
            let should_highlight = !gaps.is_empty();
            gaps.truncate(MAX_DAY_GAPS);

            DayCoverageInfo {
                should_highlight,
                gaps,
                service_name: Some(service.name.clone()),
            }
        }
        None => {
            let per_service = aggregate_service_gaps(day, all_services, shifts, lang);
            let should_highlight = !per_service.is_empty();

            let gaps = per_service
                .into_iter()
                .take(MAX_AGGREGATE_SERVICES)
                .flat_map(|(_, gaps)| gaps.into_iter().take(MAX_GAPS_PER_SERVICE))
                .take(MAX_DAY_GAPS)
                .collect();

            DayCoverageInfo {
                should_highlight,
                gaps,
                service_name: None,
            }
        }
    }
}

/// Every gap of the day, without the calendar cell caps: the selected
/// service's own gaps, or all active services' gaps tagged with their name.
pub fn day_gaps(
    day: &NaiveDate,
    selected_service: Option<&ServiceWindow>,
    all_services: &[ServiceWindow],
    shifts: &ShiftsByGuardAndDate,
    lang: Language,
) -> Vec<CoverageGap> {
    match selected_service {
        Some(service) => selected_service_gaps(day, service, shifts, lang),
        None => aggregate_service_gaps(day, all_services, shifts, lang)
            .into_iter()
            .flat_map(|(_, gaps)| gaps)
            .collect(),
    }
}

/// Uncapped gaps of one service on `day`, honoring its schedule. The gaps
/// carry the service name but keep their unprefixed description.
fn selected_service_gaps(
    day: &NaiveDate,
    service: &ServiceWindow,
    shifts: &ShiftsByGuardAndDate,
    lang: Language,
) -> Vec<CoverageGap> {
    if !service.is_scheduled_on(day) {
        return Vec::new();
    }
    let Some((start, end)) = service.times() else {
        return Vec::new();
    };

    let own_shifts = shifts_for_day(shifts, day)
        .into_iter()
        .filter(|s| s.service == Some(service.id));

    compute_service_gaps(own_shifts, start, end, &service.name, lang)
        .into_iter()
        .map(|g| g.with_service_name(&service.name))
        .collect()
}

/// Uncapped gaps of every service active on `day`, tagged with the service
/// name. Services without gaps are left out; order follows the first shift
/// of each service.
fn aggregate_service_gaps(
    day: &NaiveDate,
    all_services: &[ServiceWindow],
    shifts: &ShiftsByGuardAndDate,
    lang: Language,
) -> Vec<(String, Vec<CoverageGap>)> {
    let day_shifts: Vec<&ShiftRecord> = shifts_for_day(shifts, day);

    let mut active_ids: Vec<i64> = Vec::new();
    for id in day_shifts.iter().filter_map(|s| s.service) {
        if !active_ids.contains(&id) {
            active_ids.push(id);
        }
    }

    active_ids
        .iter()
        .filter_map(|id| all_services.iter().find(|s| s.id == *id))
        .filter_map(|service| {
            let (start, end) = service.times()?;
            let gaps: Vec<CoverageGap> =
                compute_service_gaps(day_shifts.iter().copied(), start, end, &service.name, lang)
                    .into_iter()
                    .map(|g| g.for_service(&service.name))
                    .collect();

            (!gaps.is_empty()).then(|| (service.name.clone(), gaps))
        })
        .collect()
}
