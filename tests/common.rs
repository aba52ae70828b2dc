#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rshiftgap::models::shift::{ShiftRecord, ShiftsByGuardAndDate};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DAY: &str = "2025-03-10";

pub fn rsg() -> Command {
    cargo_bin_cmd!("rshiftgap")
}

pub fn day() -> NaiveDate {
    NaiveDate::parse_from_str(DAY, "%Y-%m-%d").expect("valid test day")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid HH:MM")
}

/// Shift on the test day; an end before the start finishes the next day.
pub fn shift(id: i64, service: Option<i64>, start: &str, end: &str) -> ShiftRecord {
    ShiftRecord::between(id, service, day(), time(start), time(end))
}

/// Put shifts in the guard → date → shifts map used by the day functions.
pub fn by_guard(entries: Vec<(&str, &str, Vec<ShiftRecord>)>) -> ShiftsByGuardAndDate {
    let mut map = ShiftsByGuardAndDate::new();
    for (guard, date, shifts) in entries {
        map.entry(guard.to_string())
            .or_default()
            .entry(date.to_string())
            .or_default()
            .extend(shifts);
    }
    map
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rshiftgap_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a snapshot file in the temp dir and return its path.
pub fn write_snapshot(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rshiftgap_snapshot.json", name));
    fs::write(&path, json).expect("write snapshot");
    path.to_string_lossy().to_string()
}

/// Lobby 09-17 every day, Night Patrol 22-06 on the 10th and 11th,
/// Parking 08-12 only on the 12th.
///
/// On 2025-03-10 the lobby guard is planned 09-12 (actual 10-12) and the
/// night guard works 22-02; on 2025-03-11 the lobby is fully covered.
pub const SAMPLE_SNAPSHOT: &str = r#"{
  "property": "Harbor Point",
  "services": [
    { "id": 1, "name": "Lobby", "startTime": "09:00", "endTime": "17:00", "schedule": null },
    { "id": 2, "name": "Night Patrol", "start_time": "22:00:00", "end_time": "06:00:00",
      "schedule": ["2025-03-10", "2025-03-11"] },
    { "id": 3, "name": "Parking", "startTime": "08:00", "endTime": "12:00",
      "schedule": ["2025-03-12"] }
  ],
  "shiftsByGuardAndDate": {
    "g1": {
      "2025-03-10": [
        { "id": 1, "service": 1,
          "plannedStartTime": "2025-03-10T09:00:00", "plannedEndTime": "2025-03-10T12:00:00",
          "startTime": "2025-03-10T10:00:00", "endTime": "2025-03-10T12:00:00" }
      ],
      "2025-03-11": [
        { "id": 3, "service": 1,
          "start_time": "2025-03-11T09:00:00", "end_time": "2025-03-11T17:00:00" }
      ]
    },
    "g2": {
      "2025-03-10": [
        { "id": 2, "service": 2,
          "startTime": "2025-03-10T22:00:00Z", "endTime": "2025-03-11T02:00:00Z" }
      ]
    }
  }
}"#;
