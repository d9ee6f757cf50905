//! Local calendar-date parsing and formatting.
//!
//! Calendar days are represented as `chrono::NaiveDate` -- an explicit
//! (year, month, day) triple with no timezone or instant attached. Parsing a
//! `"YYYY-MM-DD"` string directly into an instant interprets it as UTC
//! midnight, which renders one day earlier for any viewer behind UTC; keeping
//! dates naive until the rendering boundary eliminates that drift entirely.
//! Every date that originates as a plain string must come through
//! [`parse_local_date`] or [`safe_date`].

use crate::error::{GridError, Result};
use chrono::NaiveDate;

/// Parse `"YYYY-MM-DD"` as a local calendar date.
///
/// Missing month and day components default to 1, so `"2025"` and `"2025-11"`
/// are accepted. Empty or non-numeric input is an error -- callers must
/// handle the failure case before using the date.
pub fn parse_local_date(ymd: &str) -> Result<NaiveDate> {
    if ymd.is_empty() {
        return Err(GridError::InvalidDate("empty date string".to_string()));
    }

    let mut parts = ymd.splitn(3, '-');

    let year: i32 = parts
        .next()
        .unwrap_or("")
        .parse()
        .map_err(|_| GridError::InvalidDate(ymd.to_string()))?;
    let month: u32 = match parts.next() {
        Some(m) => m
            .parse()
            .map_err(|_| GridError::InvalidDate(ymd.to_string()))?,
        None => 1,
    };
    let day: u32 = match parts.next() {
        Some(d) => d
            .parse()
            .map_err(|_| GridError::InvalidDate(ymd.to_string()))?,
        None => 1,
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| GridError::InvalidDate(ymd.to_string()))
}

/// Format a calendar date as zero-padded `"YYYY-MM-DD"`.
///
/// Inverse of [`parse_local_date`]: round-tripping any valid `"YYYY-MM-DD"`
/// string reproduces it exactly, in every host timezone.
pub fn format_ymd_local(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date string defensively, accepting more than the strict form.
///
/// Strict `"YYYY-MM-DD"` input goes through [`parse_local_date`]; anything
/// else (e.g. an ISO datetime like `"2025-11-17T09:00:00"`) is parsed from
/// its leading date portion.
pub fn safe_date(input: &str) -> Result<NaiveDate> {
    if is_strict_ymd(input) {
        return parse_local_date(input);
    }

    let date_part = input.split('T').next().unwrap_or(input);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| GridError::InvalidDate(input.to_string()))
}

fn is_strict_ymd(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

/// Format a date string as readable `"Nov 17, 2025"`.
pub fn format_display_date(date_string: &str) -> Result<String> {
    let date = parse_local_date(date_string)?;
    Ok(date.format("%b %-d, %Y").to_string())
}

/// Short date label like `"Mon, Nov 17, 2025"`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// Whether a `"YYYY-MM-DD"` string names the same calendar day as `day`.
///
/// Unparseable strings compare as not-equal rather than failing.
pub fn is_same_local_day(ymd: &str, day: NaiveDate) -> bool {
    parse_local_date(ymd).map(|d| d == day).unwrap_or(false)
}
