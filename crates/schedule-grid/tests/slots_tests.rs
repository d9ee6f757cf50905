//! Tests for the slot grid builder.

use schedule_grid::slots::{build_day_slots, compute_slots_per_day};

#[test]
fn standard_business_day_at_half_hour_granularity() {
    let slots = build_day_slots(9, 17, 30);

    assert_eq!(slots.len(), 16);
    assert_eq!(slots.first().map(String::as_str), Some("09:00"));
    assert_eq!(slots.last().map(String::as_str), Some("16:30"));
}

#[test]
fn fifteen_minute_granularity() {
    let slots = build_day_slots(8, 17, 15);

    assert_eq!(slots.len(), 36);
    assert_eq!(slots[0], "08:00");
    assert_eq!(slots[1], "08:15");
    assert_eq!(slots[35], "16:45");
}

#[test]
fn slot_count_matches_label_count() {
    for &(open, close, size) in &[(9, 17, 30), (8, 17, 15), (10, 12, 60)] {
        assert_eq!(
            compute_slots_per_day(open, close, size) as usize,
            build_day_slots(open, close, size).len()
        );
    }
}

#[test]
fn uneven_span_truncates_the_final_slot() {
    // 480 minutes at 45-minute slots is 10.67 steps; the count truncates to
    // 10 and the grid ends at 15:45 instead of reaching close.
    assert_eq!(compute_slots_per_day(9, 17, 45), 10);

    let slots = build_day_slots(9, 17, 45);
    assert_eq!(slots.len(), 10);
    assert_eq!(slots.last().map(String::as_str), Some("15:45"));
}

#[test]
fn zero_slot_size_yields_an_empty_grid() {
    // A misconfigured granularity must degrade, not divide by zero.
    assert_eq!(compute_slots_per_day(9, 17, 0), 0);
    assert!(build_day_slots(9, 17, 0).is_empty());
    assert!(build_day_slots(9, 17, -15).is_empty());
}

#[test]
fn empty_when_closed_before_open() {
    assert!(build_day_slots(17, 17, 30).is_empty());
    assert!(build_day_slots(18, 17, 30).is_empty());
}
