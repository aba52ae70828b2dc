//! Module responsible for finding the parts of a service window that no
//! guard shift covers.
//!
//! Everything runs on a linear minute line: a day window is `[start, end)`,
//! an overnight window is unrolled to `[start, end + 1440)` and the shift
//! intervals are repeated on the following day so that coverage running
//! through midnight stays contiguous.

use crate::core::calculator::describe::{GapTemplate, describe_gap};
use crate::models::coverage::{CoverageGap, GapKind};
use crate::models::interval::{TimeInterval, merge_intervals};
use crate::models::language::Language;
use crate::models::shift::ShiftRecord;
use crate::utils::time::{MINUTES_PER_DAY, minutes_to_hhmm, parse_minutes};

/// Service window unrolled on the minute line.
#[derive(Debug, Clone, Copy)]
struct Window {
    start: u32,
    end: u32,
    overnight: bool,
}

impl Window {
    fn parse(service_start: &str, service_end: &str) -> Option<Self> {
        let start = parse_minutes(service_start)?;
        let end = parse_minutes(service_end)?;
        let overnight = start > end;
        let end = if overnight { end + MINUTES_PER_DAY } else { end };
        Some(Window {
            start,
            end,
            overnight,
        })
    }
}

/// Return every maximal stretch of `[service_start, service_end)` (wrapping
/// past midnight when the start is later than the end) that the shifts
/// leave uncovered, in window order.
///
/// Shifts without both timestamps are ignored. Unparseable service times or
/// an empty window yield no gaps.
pub fn compute_service_gaps<'a, I>(
    shifts: I,
    service_start: &str,
    service_end: &str,
    service_name: &str,
    lang: Language,
) -> Vec<CoverageGap>
where
    I: IntoIterator<Item = &'a ShiftRecord>,
{
    let Some(window) = Window::parse(service_start, service_end) else {
        return Vec::new();
    };
    if window.start == window.end {
        return Vec::new();
    }

    let intervals: Vec<TimeInterval> = shifts.into_iter().flat_map(|s| s.intervals()).collect();

    let covered = covered_in_window(intervals, &window);
    if covered.is_empty() {
        return vec![full_service_gap(&window, service_name, lang)];
    }

    // -----------------------------
    // Walk the covered intervals
    // -----------------------------
    let mut gaps = Vec::new();
    let mut cursor = window.start;

    for iv in &covered {
        if iv.start_minute > cursor {
            gaps.push(build_gap(&window, cursor, iv.start_minute, service_name, lang));
        }
        cursor = cursor.max(iv.end_minute);
    }

    if cursor < window.end {
        gaps.push(build_gap(&window, cursor, window.end, service_name, lang));
    }

    gaps
}

/// Merge the shift intervals and keep only what falls inside the window.
fn covered_in_window(intervals: Vec<TimeInterval>, window: &Window) -> Vec<TimeInterval> {
    if intervals.is_empty() {
        return Vec::new();
    }

    let merged = merge_intervals(intervals);

    let line = if window.overnight {
        let next_day: Vec<TimeInterval> =
            merged.iter().map(|i| i.shifted(MINUTES_PER_DAY)).collect();
        merge_intervals(merged.into_iter().chain(next_day).collect())
    } else {
        merged
    };

    line.iter()
        .filter_map(|i| i.clip(window.start, window.end))
        .collect()
}

fn full_service_gap(window: &Window, service_name: &str, lang: Language) -> CoverageGap {
    CoverageGap::new(
        GapKind::Start,
        minutes_to_hhmm(window.start),
        minutes_to_hhmm(window.end),
        describe_gap(
            GapTemplate::FullServiceGap,
            service_name,
            window.start,
            window.end,
            lang,
        ),
    )
}

fn build_gap(
    window: &Window,
    from: u32,
    to: u32,
    service_name: &str,
    lang: Language,
) -> CoverageGap {
    let kind = if from == window.start {
        GapKind::Start
    } else if to == window.end {
        GapKind::End
    } else {
        GapKind::Middle
    };

    let template = if window.overnight && to == MINUTES_PER_DAY {
        GapTemplate::OvernightStartGap
    } else if window.overnight && from == MINUTES_PER_DAY {
        GapTemplate::OvernightEndGap
    } else {
        match kind {
            GapKind::Start => GapTemplate::StartGap,
            GapKind::Middle => GapTemplate::MiddleGap,
            GapKind::End => GapTemplate::EndGap,
        }
    };

    CoverageGap::new(
        kind,
        minutes_to_hhmm(from),
        minutes_to_hhmm(to),
        describe_gap(template, service_name, from, to, lang),
    )
}
