//! Slot grid builder -- the fixed `"HH:MM"` labels on a grid's vertical axis.

use crate::time::minutes_to_hhmm;

/// Number of slots between `open_hour` and `close_hour` at `slot_minutes`
/// granularity.
///
/// Integer division: when the open-to-close span is not evenly divisible by
/// `slot_minutes`, the count truncates and the grid ends one short slot
/// early. Pick a `slot_minutes` that divides the span evenly. A zero or
/// negative `slot_minutes` yields an empty grid rather than a panic.
pub fn compute_slots_per_day(open_hour: i64, close_hour: i64, slot_minutes: i64) -> i64 {
    if slot_minutes <= 0 {
        return 0;
    }
    ((close_hour - open_hour) * 60) / slot_minutes
}

/// Build the `"HH:MM"` labels for a day column, from `open_hour` up to (but
/// excluding) `close_hour`, spaced `slot_minutes` apart.
///
/// `build_day_slots(9, 17, 30)` yields 16 labels, `"09:00"` through
/// `"16:30"`. Truncation behavior for uneven spans follows
/// [`compute_slots_per_day`].
pub fn build_day_slots(open_hour: i64, close_hour: i64, slot_minutes: i64) -> Vec<String> {
    let steps = compute_slots_per_day(open_hour, close_hour, slot_minutes);

    (0..steps)
        .map(|i| minutes_to_hhmm(open_hour * 60 + i * slot_minutes))
        .collect()
}
