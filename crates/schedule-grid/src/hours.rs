//! Business hours -- per-weekday open/close settings merged across offices.
//!
//! Schedule settings key hours by office location, then by weekday. Grid
//! views ask a single question ("when is Tuesday open, across the offices I
//! am showing?"), so the merge rules live here: any open office opens the
//! day, with the earliest opening and latest closing winning.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::time::{hhmm_to_minutes, minutes_to_hhmm};

/// Weekday key as stored in schedule settings (`"mon"` .. `"sun"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// Map a calendar date to its settings weekday key.
pub fn date_to_weekday(date: NaiveDate) -> Weekday {
    match date.weekday().num_days_from_sunday() {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// Open/close hours for a single weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub open: bool,
    /// `"HH:MM"`
    pub start: String,
    /// `"HH:MM"`
    pub end: String,
}

impl Default for DayHours {
    /// Fallback hours used when no settings exist: open 08:00-17:00.
    fn default() -> Self {
        Self {
            open: true,
            start: "08:00".to_string(),
            end: "17:00".to_string(),
        }
    }
}

/// Weekday-keyed hours for one office location.
pub type BusinessHours = BTreeMap<Weekday, DayHours>;

/// Office-location-keyed business hours (`"north"`, `"south"`, ...).
pub type LocationHours = BTreeMap<String, BusinessHours>;

/// A single appointment type definition from settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentTypeDef {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub default_duration: u32,
    pub color_code: String,
}

/// Root schedule settings structure. The backend guarantees a single
/// persisted row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScheduleSettings {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub business_hours: LocationHours,
    #[serde(default)]
    pub appointment_types: Vec<AppointmentTypeDef>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// The office keys to consult: the caller's selection, else every office in
/// settings, else the default office.
fn office_keys(settings: Option<&ScheduleSettings>, offices: &[String]) -> Vec<String> {
    if !offices.is_empty() {
        return offices.to_vec();
    }

    let keys: Vec<String> = settings
        .map(|s| s.business_hours.keys().cloned().collect())
        .unwrap_or_default();

    if keys.is_empty() {
        vec!["north".to_string()]
    } else {
        keys
    }
}

/// Merged [`DayHours`] for a weekday across the given offices.
///
/// - At least one office open -> open, earliest start and latest end.
/// - Offices defined but all closed -> the first office's hours, marked
///   closed.
/// - No data at all -> the default fallback hours.
pub fn compute_day_hours(
    settings: Option<&ScheduleSettings>,
    offices: &[String],
    weekday: Weekday,
) -> DayHours {
    let Some(settings) = settings.filter(|s| !s.business_hours.is_empty()) else {
        return DayHours::default();
    };

    let keys = office_keys(Some(settings), offices);

    let mut any_defined = false;
    let mut any_open = false;
    let mut earliest_start = i64::MAX;
    let mut latest_end = i64::MIN;

    for office in &keys {
        let Some(hours) = settings
            .business_hours
            .get(office)
            .and_then(|h| h.get(&weekday))
        else {
            continue;
        };

        any_defined = true;

        if hours.open {
            // Unparseable times are skipped rather than poisoning the merge.
            let (Ok(s), Ok(e)) = (hhmm_to_minutes(&hours.start), hhmm_to_minutes(&hours.end))
            else {
                continue;
            };
            any_open = true;
            earliest_start = earliest_start.min(s);
            latest_end = latest_end.max(e);
        }
    }

    if any_open {
        return DayHours {
            open: true,
            start: minutes_to_hhmm(earliest_start),
            end: minutes_to_hhmm(latest_end),
        };
    }

    if any_defined {
        let base = keys
            .first()
            .and_then(|office| settings.business_hours.get(office))
            .and_then(|h| h.get(&weekday))
            .cloned()
            .unwrap_or_default();
        return DayHours {
            open: false,
            ..base
        };
    }

    DayHours::default()
}

/// Whether the given date is open for any of the given offices.
pub fn is_day_open(settings: Option<&ScheduleSettings>, offices: &[String], date: NaiveDate) -> bool {
    compute_day_hours(settings, offices, date_to_weekday(date)).open
}

/// Merged open/close for a date as decimal hours, for grid sizing.
///
/// `"08:30"`-`"17:00"` comes back as `(8.5, 17.0)`. Unparseable settings
/// times fall back to the default 8.0-17.0.
pub fn open_range(
    settings: Option<&ScheduleSettings>,
    offices: &[String],
    date: NaiveDate,
) -> (f64, f64) {
    let hours = compute_day_hours(settings, offices, date_to_weekday(date));

    let start = hhmm_to_minutes(&hours.start).map(|m| m as f64 / 60.0);
    let end = hhmm_to_minutes(&hours.end).map(|m| m as f64 / 60.0);

    (start.unwrap_or(8.0), end.unwrap_or(17.0))
}

/// Move forward or backward (`direction` = +1 / -1) to the next open day for
/// an office.
///
/// Weekdays with no defined hours count as open. Gives up after a full week
/// of closed days and returns `current` unchanged, as it does when settings
/// or the office key are missing.
pub fn find_next_open_day(
    current: NaiveDate,
    direction: i64,
    settings: Option<&ScheduleSettings>,
    office: &str,
) -> NaiveDate {
    let Some(settings) = settings else {
        return current;
    };
    if office.is_empty() {
        return current;
    }

    let mut next = current;
    for _ in 0..7 {
        next = next + Duration::days(direction);

        let office_hours = settings
            .business_hours
            .get(office)
            .and_then(|h| h.get(&date_to_weekday(next)));

        match office_hours {
            None => return next,
            Some(hours) if hours.open => return next,
            Some(_) => {}
        }
    }

    current
}
