mod common;
use common::{SAMPLE_SNAPSHOT, date, write_snapshot};
use rshiftgap::core::calculator::get_day_coverage_info;
use rshiftgap::core::logic::Core;
use rshiftgap::errors::AppError;
use rshiftgap::ingest::{load_snapshot, parse_snapshot};
use rshiftgap::models::language::Language;
use rshiftgap::models::shift::shifts_for_day;
use std::path::Path;

#[test]
fn test_parse_sample_snapshot() {
    let snapshot = parse_snapshot(SAMPLE_SNAPSHOT).expect("parse snapshot");

    assert_eq!(snapshot.property.as_deref(), Some("Harbor Point"));
    assert_eq!(snapshot.services.len(), 3);
    assert_eq!(snapshot.shift_count(), 3);

    let night = snapshot.service(2).expect("night service");
    assert_eq!(night.start_time.as_deref(), Some("22:00:00"));
    assert!(night.is_overnight());
    assert!(night.is_scheduled_on(&date("2025-03-11")));
    assert!(!night.is_scheduled_on(&date("2025-03-12")));
}

#[test]
fn test_planned_times_win_over_actual_times() {
    let snapshot = parse_snapshot(SAMPLE_SNAPSHOT).expect("parse snapshot");
    let shifts = shifts_for_day(&snapshot.shifts, &date("2025-03-10"));

    let lobby = shifts.iter().find(|s| s.id == 1).expect("lobby shift");
    assert_eq!(lobby.time_label(), "09:00-12:00");
    assert_eq!(lobby.guard.as_deref(), Some("g1"));
}

#[test]
fn test_plain_and_snake_case_times_are_read() {
    let snapshot = parse_snapshot(SAMPLE_SNAPSHOT).expect("parse snapshot");

    let tuesday = shifts_for_day(&snapshot.shifts, &date("2025-03-11"));
    assert_eq!(tuesday.len(), 1);
    assert_eq!(tuesday[0].time_label(), "09:00-17:00");

    // RFC 3339 keeps the wall clock of the stated offset
    let monday = shifts_for_day(&snapshot.shifts, &date("2025-03-10"));
    let night = monday.iter().find(|s| s.id == 2).expect("night shift");
    assert_eq!(night.time_label(), "22:00-02:00");
}

#[test]
fn test_unparseable_times_become_missing() {
    let json = r#"{
      "services": [{ "id": 1, "name": "Lobby", "startTime": "09:00", "endTime": "17:00" }],
      "shifts": {
        "g1": { "2025-03-10": [
          { "id": 7, "service": 1, "plannedStartTime": "tomorrow", "plannedEndTime": null,
            "startTime": "2025-03-10 09:00", "endTime": "garbage" }
        ] }
      }
    }"#;

    let snapshot = parse_snapshot(json).expect("parse snapshot");
    let shifts = shifts_for_day(&snapshot.shifts, &date("2025-03-10"));

    assert_eq!(shifts.len(), 1);
    assert!(shifts[0].start.is_some());
    assert!(shifts[0].end.is_none());
    assert!(!shifts[0].has_times());

    // the incomplete shift is ignored: the whole window is a gap
    let info = get_day_coverage_info(
        &date("2025-03-10"),
        snapshot.service(1),
        &snapshot.services,
        &snapshot.shifts,
        Language::Es,
    );
    assert!(info.should_highlight);
    assert_eq!(info.gaps[0].start_time, "09:00");
    assert_eq!(info.gaps[0].end_time, "17:00");
}

#[test]
fn test_null_service_and_id_are_accepted() {
    let json = r#"{
      "services": [],
      "shifts": { "g1": { "2025-03-10": [
        { "id": null, "service": null, "startTime": "2025-03-10T09:00", "endTime": "2025-03-10T10:00" }
      ] } }
    }"#;

    let snapshot = parse_snapshot(json).expect("parse snapshot");
    let shifts = shifts_for_day(&snapshot.shifts, &date("2025-03-10"));
    assert_eq!(shifts[0].id, 0);
    assert_eq!(shifts[0].service, None);
}

#[test]
fn test_duplicate_service_ids_are_rejected() {
    let json = r#"{
      "services": [
        { "id": 1, "name": "Lobby", "startTime": "09:00", "endTime": "17:00" },
        { "id": 1, "name": "Lobby again", "startTime": "10:00", "endTime": "18:00" }
      ]
    }"#;

    let err = parse_snapshot(json).expect_err("duplicate ids");
    assert!(matches!(err, AppError::Snapshot(_)));
}

#[test]
fn test_malformed_json_is_an_error() {
    let err = parse_snapshot("{ \"services\": [ ").expect_err("malformed");
    assert!(matches!(err, AppError::Json(_)));
}

#[test]
fn test_missing_snapshot_file() {
    let err = load_snapshot(Path::new("/definitely/not/here/snapshot.json")).expect_err("missing");
    assert!(matches!(err, AppError::SnapshotNotFound(_)));
}

#[test]
fn test_month_coverage_over_sample() {
    let path = write_snapshot("month_coverage", SAMPLE_SNAPSHOT);
    let snapshot = load_snapshot(Path::new(&path)).expect("load snapshot");

    let dates = rshiftgap::utils::date::all_days_of_month(2025, 3);
    let coverage = Core::month_coverage(&snapshot, &dates, None, Language::Es);

    assert_eq!(coverage.len(), 31);
    assert_eq!(Core::highlighted_days(&coverage), 1);

    let tenth = coverage
        .iter()
        .find(|c| c.date == date("2025-03-10"))
        .expect("10th");
    assert!(tenth.info.should_highlight);
    assert_eq!(tenth.all_gaps.len(), 2);

    // Parking only runs on the 12th and nobody is assigned
    let parking = snapshot.service(3);
    let parking_month = Core::month_coverage(&snapshot, &dates, parking, Language::Es);
    let highlighted: Vec<String> = parking_month
        .iter()
        .filter(|c| c.info.should_highlight)
        .map(|c| c.date.format("%Y-%m-%d").to_string())
        .collect();
    assert_eq!(highlighted, vec!["2025-03-12".to_string()]);
}
