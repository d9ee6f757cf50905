//! Week/range derivation -- Monday anchors, range labels, API windows.
//!
//! Weeks start on Monday. chrono's `num_days_from_monday` is the same
//! quantity as the classic `(getDay() + 6) % 7` under Sunday-zero numbering.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::safe_date;
use crate::error::Result;

/// Monday of the week containing `date`.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// The seven calendar dates of the week starting at `week_start`.
pub fn week_days(week_start: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|i| week_start + Days::new(i)).collect()
}

/// Readable Mon-Fri range label for the week containing `date`,
/// e.g. `"Nov 17 – Nov 21, 2025"`.
pub fn format_week_range(date: NaiveDate) -> String {
    let monday = week_start_of(date);
    let friday = monday + Days::new(4);

    format!(
        "{} – {}",
        monday.format("%b %-d"),
        friday.format("%b %-d, %Y")
    )
}

/// [`format_week_range`] for a raw date string.
pub fn format_week_range_str(input: &str) -> Result<String> {
    Ok(format_week_range(safe_date(input)?))
}

/// First and last open dates within a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenRange {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

/// Filter the week starting at `week_start` down to its open days.
///
/// Returns the first and last date the predicate accepts, or `None` when
/// every day of the week is closed.
pub fn compute_open_range_for_week<F>(week_start: NaiveDate, is_day_open: F) -> Option<OpenRange>
where
    F: Fn(NaiveDate) -> bool,
{
    let open: Vec<NaiveDate> = week_days(week_start)
        .into_iter()
        .filter(|&d| is_day_open(d))
        .collect();

    match (open.first(), open.last()) {
        (Some(&first), Some(&last)) => Some(OpenRange { first, last }),
        _ => None,
    }
}

/// A full 7-day week window as raw date strings, for range queries against
/// the backing data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiWeekRange {
    pub start_date: String,
    pub end_date: String,
}

/// Monday through the following Monday (exclusive) of the week containing
/// `date`, as `"YYYY-MM-DD"` boundaries.
pub fn get_week_range_for_api(date: NaiveDate) -> ApiWeekRange {
    let start = week_start_of(date);
    let end = start + Days::new(7);

    ApiWeekRange {
        start_date: crate::date::format_ymd_local(start),
        end_date: crate::date::format_ymd_local(end),
    }
}
