//! Wall-clock time conversion -- `"HH:MM"` strings and minutes since midnight.

use crate::error::{GridError, Result};

/// Convert `"HH:MM"` to minutes since midnight.
///
/// No range validation beyond numeric parsing is performed; `"25:00"` yields
/// 1500. Malformed segments are an error -- downstream layout code treats a
/// failed parse as "unschedulable" and excludes the record rather than
/// crashing.
pub fn hhmm_to_minutes(hhmm: &str) -> Result<i64> {
    let mut parts = hhmm.splitn(2, ':');

    let hours: i64 = parts
        .next()
        .unwrap_or("")
        .parse()
        .map_err(|_| GridError::InvalidTime(hhmm.to_string()))?;
    let minutes: i64 = parts
        .next()
        .ok_or_else(|| GridError::InvalidTime(hhmm.to_string()))?
        .parse()
        .map_err(|_| GridError::InvalidTime(hhmm.to_string()))?;

    Ok(hours * 60 + minutes)
}

/// Convert minutes since midnight back to a zero-padded `"HH:MM"` label.
pub fn minutes_to_hhmm(mins: i64) -> String {
    let h = mins / 60;
    let m = mins % 60;
    format!("{:02}:{:02}", h, m)
}

/// Format an hour/minute pair as a 12-hour label like `"1:05 PM"`.
pub fn format_12_hour(h: i64, m: i64) -> String {
    let suffix = if h >= 12 { "PM" } else { "AM" };
    let h12 = ((h + 11) % 12) + 1;
    format!("{}:{:02} {}", h12, m, suffix)
}
