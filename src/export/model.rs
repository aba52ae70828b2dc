// src/export/model.rs

use crate::core::logic::DayCoverage;
use serde::Serialize;

/// Flat row for exporting coverage gaps: one per gap per day.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GapExport {
    pub date: String,
    pub service: String,
    pub kind: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
}

/// Flatten a period's coverage into export rows. Days without gaps produce none.
pub(crate) fn coverage_to_rows(coverage: &[DayCoverage]) -> Vec<GapExport> {
    coverage
        .iter()
        .flat_map(|day| {
            let date = day.date.format("%Y-%m-%d").to_string();
            let fallback = day.info.service_name.clone().unwrap_or_default();
            day.all_gaps.iter().map(move |gap| GapExport {
                date: date.clone(),
                service: gap.service_name.clone().unwrap_or_else(|| fallback.clone()),
                kind: gap.kind.as_str().to_string(),
                start_time: gap.start_time.clone(),
                end_time: gap.end_time.clone(),
                description: gap.description.clone(),
            })
        })
        .collect()
}
