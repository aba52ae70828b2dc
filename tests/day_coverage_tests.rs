mod common;
use common::{DAY, by_guard, day, shift};
use rshiftgap::core::calculator::get_day_coverage_info;
use rshiftgap::models::coverage::GapKind;
use rshiftgap::models::language::Language;
use rshiftgap::models::service::ServiceWindow;
use rshiftgap::models::shift::ShiftsByGuardAndDate;

fn catalog() -> Vec<ServiceWindow> {
    vec![
        ServiceWindow::new(1, "Lobby", Some("09:00"), Some("17:00")),
        ServiceWindow::new(2, "Night", Some("22:00"), Some("06:00")),
        ServiceWindow::new(3, "Parking", Some("08:00"), Some("12:00")),
        ServiceWindow::new(4, "Unconfigured", None, None),
    ]
}

#[test]
fn test_unscheduled_day_is_never_highlighted() {
    let service = ServiceWindow::new(1, "Lobby", Some("09:00"), Some("17:00"))
        .with_schedule(&["2025-03-11", "2025-03-12"]);
    let shifts = ShiftsByGuardAndDate::new();

    let info = get_day_coverage_info(&day(), Some(&service), &catalog(), &shifts, Language::Es);

    assert!(!info.should_highlight);
    assert!(info.gaps.is_empty());
    assert_eq!(info.service_name.as_deref(), Some("Lobby"));
}

#[test]
fn test_scheduled_day_without_shifts_is_highlighted() {
    let service = ServiceWindow::new(1, "Lobby", Some("09:00"), Some("17:00"))
        .with_schedule(&[DAY]);
    let shifts = ShiftsByGuardAndDate::new();

    let info = get_day_coverage_info(&day(), Some(&service), &catalog(), &shifts, Language::Es);

    assert!(info.should_highlight);
    assert_eq!(info.gaps.len(), 1);
    assert_eq!(info.gaps[0].start_time, "09:00");
    assert_eq!(info.gaps[0].end_time, "17:00");
}

#[test]
fn test_filter_mode_only_counts_the_service_own_shifts() {
    let services = catalog();
    let shifts = by_guard(vec![
        ("g1", DAY, vec![shift(1, Some(3), "08:00", "18:00")]),
        ("g2", DAY, vec![shift(2, Some(1), "09:00", "13:00")]),
    ]);

    let info = get_day_coverage_info(&day(), Some(&services[0]), &services, &shifts, Language::Es);

    assert!(info.should_highlight);
    assert_eq!(info.gaps.len(), 1);
    assert_eq!(info.gaps[0].kind, GapKind::End);
    assert_eq!(info.gaps[0].start_time, "13:00");
    // filter mode descriptions are not prefixed
    assert!(!info.gaps[0].description.starts_with("Lobby:"));
}

#[test]
fn test_filter_mode_caps_gaps_at_three() {
    let services = catalog();
    let shifts = by_guard(vec![(
        "g1",
        DAY,
        vec![
            shift(1, Some(1), "10:00", "11:00"),
            shift(2, Some(1), "12:00", "13:00"),
            shift(3, Some(1), "14:00", "15:00"),
        ],
    )]);

    let info = get_day_coverage_info(&day(), Some(&services[0]), &services, &shifts, Language::Es);

    // 09-10, 11-12, 13-14, 15-17 are uncovered
    assert!(info.should_highlight);
    assert_eq!(info.gaps.len(), 3);
    assert_eq!(info.gaps[0].start_time, "09:00");
    assert_eq!(info.gaps[2].start_time, "13:00");
}

#[test]
fn test_filter_mode_service_without_times_reports_nothing() {
    let services = catalog();
    let shifts = ShiftsByGuardAndDate::new();

    let info = get_day_coverage_info(&day(), Some(&services[3]), &services, &shifts, Language::Es);
    assert!(!info.should_highlight);
    assert!(info.gaps.is_empty());
}

#[test]
fn test_filter_mode_ignores_other_days() {
    let services = catalog();
    let shifts = by_guard(vec![(
        "g1",
        "2025-03-11",
        vec![shift(1, Some(1), "09:00", "17:00")],
    )]);

    let info = get_day_coverage_info(&day(), Some(&services[0]), &services, &shifts, Language::Es);
    assert_eq!(info.gaps.len(), 1);
    assert_eq!(info.gaps[0].end_time, "17:00");
}

#[test]
fn test_aggregate_without_shifts_is_not_highlighted() {
    let shifts = ShiftsByGuardAndDate::new();
    let info = get_day_coverage_info(&day(), None, &catalog(), &shifts, Language::Es);

    assert!(!info.should_highlight);
    assert!(info.gaps.is_empty());
    assert_eq!(info.service_name, None);
}

#[test]
fn test_aggregate_prefixes_descriptions_with_service_name() {
    let shifts = by_guard(vec![
        ("g1", DAY, vec![shift(1, Some(1), "09:00", "12:00")]),
        ("g2", DAY, vec![shift(2, Some(2), "22:00", "02:00")]),
    ]);

    let info = get_day_coverage_info(&day(), None, &catalog(), &shifts, Language::Es);

    assert!(info.should_highlight);
    assert_eq!(info.gaps.len(), 2);
    assert_eq!(
        info.gaps[0].description,
        "Lobby: Falta cobertura al final de Lobby de 12:00 PM a 5:00 PM"
    );
    assert_eq!(info.gaps[0].service_name.as_deref(), Some("Lobby"));
    assert_eq!(
        info.gaps[1].description,
        "Night: Falta cobertura al final de Night de 2:00 AM a 6:00 AM"
    );
}

#[test]
fn test_aggregate_checks_each_service_against_the_whole_pool() {
    // The lobby's own shift covers only 09-10, but the parking guard's
    // 10-17 shift counts toward the lobby window in the all-services view.
    let services = vec![
        ServiceWindow::new(1, "Lobby", Some("09:00"), Some("17:00")),
        ServiceWindow::new(3, "Parking", Some("10:00"), Some("17:00")),
    ];
    let shifts = by_guard(vec![
        ("g1", DAY, vec![shift(1, Some(1), "09:00", "10:00")]),
        ("g2", DAY, vec![shift(2, Some(3), "10:00", "17:00")]),
    ]);

    let info = get_day_coverage_info(&day(), None, &services, &shifts, Language::Es);
    assert!(!info.should_highlight);
    assert!(info.gaps.is_empty());
}

#[test]
fn test_aggregate_skips_services_without_shifts_or_times() {
    let shifts = by_guard(vec![(
        "g1",
        DAY,
        vec![
            shift(1, Some(1), "09:00", "17:00"),
            shift(2, Some(4), "09:00", "10:00"),
            shift(3, Some(99), "09:00", "10:00"),
        ],
    )]);

    // Night and Parking have no shifts, Unconfigured has no times and 99
    // is not in the catalog: nothing is evaluated except the covered lobby.
    let info = get_day_coverage_info(&day(), None, &catalog(), &shifts, Language::Es);
    assert!(!info.should_highlight);
}

#[test]
fn test_aggregate_caps_services_and_gaps() {
    let services = vec![
        ServiceWindow::new(1, "A", Some("08:00"), Some("20:00")),
        ServiceWindow::new(2, "B", Some("08:00"), Some("20:00")),
        ServiceWindow::new(3, "C", Some("08:00"), Some("20:00")),
    ];
    // pool covers 10-11, 13-14, 16-17: four gaps per service
    let shifts = by_guard(vec![(
        "g1",
        DAY,
        vec![
            shift(1, Some(1), "10:00", "11:00"),
            shift(2, Some(2), "13:00", "14:00"),
            shift(3, Some(3), "16:00", "17:00"),
        ],
    )]);

    let info = get_day_coverage_info(&day(), None, &services, &shifts, Language::Es);

    assert!(info.should_highlight);
    assert_eq!(info.gaps.len(), 3);
    let owners: Vec<&str> = info
        .gaps
        .iter()
        .filter_map(|g| g.service_name.as_deref())
        .collect();
    assert_eq!(owners, vec!["A", "A", "B"]);
}
