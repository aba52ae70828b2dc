//! Wire shapes of the backend payload, before normalization.

use crate::models::service::ServiceWindow;
use crate::models::shift::ShiftRecord;
use crate::utils::time::parse_datetime;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub(crate) struct RawSnapshot {
    #[serde(default)]
    pub property: Option<String>,

    #[serde(default)]
    pub services: Vec<ServiceWindow>,

    #[serde(default, alias = "shiftsByGuardAndDate", alias = "shifts_by_guard_and_date")]
    pub shifts: BTreeMap<String, BTreeMap<String, Vec<RawShift>>>,
}

/// A shift as the backend sends it: planned and actual times under
/// camelCase or snake_case keys, any of them possibly null.
#[derive(Debug, Deserialize)]
pub(crate) struct RawShift {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub service: Option<i64>,

    #[serde(default, alias = "plannedStartTime")]
    pub planned_start_time: Option<String>,

    #[serde(default, alias = "plannedEndTime")]
    pub planned_end_time: Option<String>,

    #[serde(default, alias = "startTime")]
    pub start_time: Option<String>,

    #[serde(default, alias = "endTime")]
    pub end_time: Option<String>,
}

impl RawShift {
    /// Collapse the field variants into one canonical record.
    /// The planned time wins when both variants are present and parse.
    pub fn normalize(self, guard: &str) -> ShiftRecord {
        let pick = |planned: Option<String>, plain: Option<String>| {
            planned
                .as_deref()
                .and_then(parse_datetime)
                .or_else(|| plain.as_deref().and_then(parse_datetime))
        };

        let start = pick(self.planned_start_time, self.start_time);
        let end = pick(self.planned_end_time, self.end_time);

        ShiftRecord {
            id: self.id.unwrap_or_default(),
            guard: Some(guard.to_string()),
            service: self.service,
            start,
            end,
        }
    }
}
