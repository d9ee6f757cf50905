//! Tests for interval positioning.

use schedule_grid::position::{position_appointments, Appointment};

/// Helper to build an appointment with just the fields positioning reads.
fn appt(id: i64, start: Option<&str>, end: Option<&str>) -> Appointment {
    Appointment {
        id,
        start_time: start.map(String::from),
        end_time: end.map(String::from),
        ..Default::default()
    }
}

#[test]
fn attaches_minute_offsets() {
    let positioned = position_appointments(vec![appt(1, Some("09:00"), Some("09:30"))]);

    assert_eq!(positioned.len(), 1);
    assert_eq!(positioned[0].start_minutes, 540);
    assert_eq!(positioned[0].end_minutes, 570);
}

#[test]
fn drops_records_missing_either_time() {
    let positioned = position_appointments(vec![
        appt(1, Some("09:00"), Some("09:30")),
        appt(2, None, Some("10:00")),
        appt(3, Some("10:00"), None),
        appt(4, None, None),
    ]);

    assert_eq!(positioned.len(), 1, "only the complete record survives");
    assert_eq!(positioned[0].record.id, 1);
}

#[test]
fn drops_unschedulable_records_with_malformed_times() {
    let positioned = position_appointments(vec![
        appt(1, Some("9am"), Some("10:00")),
        appt(2, Some("09:00"), Some("soon")),
        appt(3, Some("09:00"), Some("09:30")),
    ]);

    assert_eq!(
        positioned.len(),
        1,
        "malformed times are unschedulable, not a crash"
    );
    assert_eq!(positioned[0].record.id, 3);
}

#[test]
fn sorts_ascending_by_start() {
    let positioned = position_appointments(vec![
        appt(1, Some("14:00"), Some("15:00")),
        appt(2, Some("09:00"), Some("09:30")),
        appt(3, Some("10:15"), Some("11:00")),
    ]);

    let ids: Vec<i64> = positioned.iter().map(|p| p.record.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);

    for window in positioned.windows(2) {
        assert!(window[0].start_minutes <= window[1].start_minutes);
    }
}

#[test]
fn equal_starts_keep_input_order() {
    let positioned = position_appointments(vec![
        appt(10, Some("09:00"), Some("10:00")),
        appt(20, Some("09:00"), Some("09:15")),
        appt(30, Some("09:00"), Some("11:00")),
    ]);

    let ids: Vec<i64> = positioned.iter().map(|p| p.record.id).collect();
    assert_eq!(ids, vec![10, 20, 30], "stable sort preserves input order");
}

#[test]
fn output_never_longer_than_input() {
    let positioned = position_appointments(vec![
        appt(1, Some("09:00"), Some("09:30")),
        appt(2, None, None),
    ]);
    assert!(positioned.len() <= 2);
}

#[test]
fn unknown_json_fields_pass_through_unchanged() {
    let json = r#"{
        "id": 7,
        "start_time": "09:00",
        "end_time": "09:30",
        "chief_complaint": "follow-up",
        "room": 4
    }"#;

    let appt: Appointment = serde_json::from_str(json).unwrap();
    let positioned = position_appointments(vec![appt]);

    let out = serde_json::to_value(&positioned[0]).unwrap();
    assert_eq!(out["startMinutes"], 540);
    assert_eq!(out["endMinutes"], 570);
    assert_eq!(out["chief_complaint"], "follow-up", "extras survive layout");
    assert_eq!(out["room"], 4);
}
