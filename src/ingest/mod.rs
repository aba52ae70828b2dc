//! Snapshot ingestion: the only place that knows the backend's field names.

mod raw;

use crate::errors::{AppError, AppResult};
use crate::models::shift::ShiftsByGuardAndDate;
use crate::models::snapshot::Snapshot;
use crate::ui::messages::warning;
use raw::RawSnapshot;
use std::fs;
use std::path::Path;

/// Load and normalize a snapshot file.
pub fn load_snapshot(path: &Path) -> AppResult<Snapshot> {
    if !path.exists() {
        return Err(AppError::SnapshotNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let snapshot = parse_snapshot(&content)?;

    let incomplete = snapshot
        .shifts
        .values()
        .flat_map(|by_date| by_date.values())
        .flatten()
        .filter(|s| !s.has_times())
        .count();

    if incomplete > 0 {
        warning(format!(
            "{incomplete} shift(s) without usable start/end times will be ignored"
        ));
    }

    Ok(snapshot)
}

/// Parse a snapshot from its JSON text.
pub fn parse_snapshot(content: &str) -> AppResult<Snapshot> {
    let raw: RawSnapshot = serde_json::from_str(content)?;

    let mut seen = std::collections::BTreeSet::new();
    if let Some(dup) = raw.services.iter().find(|s| !seen.insert(s.id)) {
        return Err(AppError::Snapshot(format!(
            "service id {} appears more than once",
            dup.id
        )));
    }

    let mut shifts = ShiftsByGuardAndDate::new();
    for (guard, by_date) in raw.shifts {
        let entry = shifts.entry(guard.clone()).or_default();
        for (date, raw_shifts) in by_date {
            let normalized = raw_shifts
                .into_iter()
                .map(|s| s.normalize(&guard))
                .collect::<Vec<_>>();
            entry
                .entry(date.trim().to_string())
                .or_default()
                .extend(normalized);
        }
    }

    Ok(Snapshot {
        property: raw.property,
        services: raw.services,
        shifts,
    })
}
