//! Interval positioning -- attach minute offsets to appointment records.
//!
//! Raw appointment records carry wall-clock `"HH:MM"` strings; the grid
//! works in minutes since midnight. [`position_appointments`] converts and
//! sorts, producing the input [`crate::cluster::build_clusters`] expects.

use serde::{Deserialize, Serialize};

use crate::time::hhmm_to_minutes;

/// A record the engine can position on the time axis.
///
/// Implemented by [`Appointment`]; callers with their own record types
/// implement it to reuse the layout pipeline.
pub trait Schedulable {
    fn start_time(&self) -> Option<&str>;
    fn end_time(&self) -> Option<&str>;
}

/// An appointment record as delivered by the scheduling API.
///
/// Everything beyond the fields the engine reads is passed through unchanged
/// in `extra`, so callers get their records back intact after layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Appointment {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub patient: Option<i64>,
    #[serde(default)]
    pub provider: Option<i64>,
    #[serde(default)]
    pub office: Option<String>,
    #[serde(default)]
    pub appointment_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub is_block: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Schedulable for Appointment {
    fn start_time(&self) -> Option<&str> {
        self.start_time.as_deref()
    }

    fn end_time(&self) -> Option<&str> {
        self.end_time.as_deref()
    }
}

/// A record augmented with its start/end minute offsets.
///
/// Serializes as the record's own fields plus `startMinutes`/`endMinutes`,
/// matching what the grid views consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Positioned<A> {
    #[serde(flatten)]
    pub record: A,
    #[serde(rename = "startMinutes")]
    pub start_minutes: i64,
    #[serde(rename = "endMinutes")]
    pub end_minutes: i64,
}

/// Attach start/end minute offsets to a list of appointments and sort by
/// start time.
///
/// Records missing either time cannot be positioned and are dropped, as are
/// records whose times fail to parse (unschedulable). The sort is stable, so
/// records sharing a start time keep their input order -- not semantically
/// meaningful, but deterministic.
pub fn position_appointments<A: Schedulable>(appointments: Vec<A>) -> Vec<Positioned<A>> {
    let mut positioned: Vec<Positioned<A>> = appointments
        .into_iter()
        .filter_map(|record| {
            let start_minutes = hhmm_to_minutes(record.start_time()?).ok()?;
            let end_minutes = hhmm_to_minutes(record.end_time()?).ok()?;
            Some(Positioned {
                record,
                start_minutes,
                end_minutes,
            })
        })
        .collect();

    positioned.sort_by_key(|p| p.start_minutes);
    positioned
}
