use crate::models::interval::TimeInterval;
use crate::utils::time::minute_of_day;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// Canonical guard shift, produced by the snapshot loader.
/// Whatever field naming the backend used, the engine sees only `start`/`end`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftRecord {
    pub id: i64,
    pub guard: Option<String>,
    pub service: Option<i64>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

/// guard id → "YYYY-MM-DD" → shifts of that guard on that day
pub type ShiftsByGuardAndDate = BTreeMap<String, BTreeMap<String, Vec<ShiftRecord>>>;

impl ShiftRecord {
    pub fn new(
        id: i64,
        service: Option<i64>,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id,
            guard: None,
            service,
            start,
            end,
        }
    }

    /// Shift on `date` between two wall-clock times.
    /// An end before the start lands on the following day.
    pub fn between(
        id: i64,
        service: Option<i64>,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        let start_dt = date.and_time(start);
        let end_date = if end < start {
            date.succ_opt().unwrap_or(date)
        } else {
            date
        };
        Self::new(id, service, Some(start_dt), Some(end_date.and_time(end)))
    }

    pub fn has_times(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Intervals of the day covered by this shift; empty when a timestamp is missing.
    pub fn intervals(&self) -> Vec<TimeInterval> {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => TimeInterval::from_wall_clock(
                minute_of_day(&start.time()),
                minute_of_day(&end.time()),
            ),
            _ => Vec::new(),
        }
    }

    pub fn time_label(&self) -> String {
        let fmt = |t: &Option<NaiveDateTime>| {
            t.map(|dt| dt.format("%H:%M").to_string())
                .unwrap_or_else(|| "--:--".to_string())
        };
        format!("{}-{}", fmt(&self.start), fmt(&self.end))
    }
}

/// All shifts of every guard on `day`, guards in key order.
pub fn shifts_for_day<'a>(
    shifts: &'a ShiftsByGuardAndDate,
    day: &NaiveDate,
) -> Vec<&'a ShiftRecord> {
    let key = day.format("%Y-%m-%d").to_string();
    shifts
        .values()
        .filter_map(|by_date| by_date.get(&key))
        .flatten()
        .collect()
}
