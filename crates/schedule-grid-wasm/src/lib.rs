//! WASM bindings for schedule-grid.
//!
//! Exposes the appointment layout pipeline (positioning, clustering, box
//! geometry) plus the week-range and slot-grid helpers to the JavaScript UI
//! layer via `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p schedule-grid-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir frontend/src/wasm/ \
//!   target/wasm32-unknown-unknown/release/schedule_grid_wasm.wasm
//! ```

use schedule_grid::cluster::build_clusters;
use schedule_grid::date::safe_date;
use schedule_grid::geometry::{compute_cluster_boxes, ClusterLayout};
use schedule_grid::hours::ScheduleSettings;
use schedule_grid::position::{position_appointments, Appointment, Positioned};
use schedule_grid::week::{format_week_range, get_week_range_for_api};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: JSON in/out across the WASM boundary
// ---------------------------------------------------------------------------

fn parse_appointments_json(json: &str) -> Result<Vec<Appointment>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid appointments JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn parse_date(ymd: &str) -> Result<chrono::NaiveDate, JsValue> {
    safe_date(ymd).map_err(|e| JsValue::from_str(&e.to_string()))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Attach `startMinutes`/`endMinutes` to appointment records and sort.
///
/// Takes a JSON array of appointment objects (records missing or failing to
/// parse a `start_time`/`end_time` are dropped) and returns the positioned,
/// start-sorted array as JSON. Unknown fields pass through unchanged.
#[wasm_bindgen(js_name = "positionAppointments")]
pub fn position_appointments_json(appointments_json: &str) -> Result<String, JsValue> {
    let appointments = parse_appointments_json(appointments_json)?;
    let positioned = position_appointments(appointments);
    to_json(&positioned)
}

/// Position appointments, then group them into overlap clusters.
///
/// Returns a JSON array of arrays: each inner array is one cluster of
/// mutually-or-transitively overlapping appointments, in start order.
#[wasm_bindgen(js_name = "buildClusters")]
pub fn build_clusters_json(appointments_json: &str) -> Result<String, JsValue> {
    let appointments = parse_appointments_json(appointments_json)?;
    let clusters: Vec<Vec<Positioned<Appointment>>> =
        build_clusters(position_appointments(appointments));
    to_json(&clusters)
}

/// Full layout pipeline: position, cluster, and compute draw-ready boxes.
///
/// `open_hour` may be fractional (8.5 for an 08:30 opening). Returns a JSON
/// array with one layout object per cluster, each carrying either `boxes`
/// (pixel top/height, percent left/width) or a `collapsedBox` when more than
/// three appointments overlap.
#[wasm_bindgen(js_name = "computeClusterBoxes")]
pub fn compute_cluster_boxes_json(
    appointments_json: &str,
    open_hour: f64,
    slot_minutes: u32,
) -> Result<String, JsValue> {
    let appointments = parse_appointments_json(appointments_json)?;
    let layouts: Vec<ClusterLayout<Appointment>> =
        build_clusters(position_appointments(appointments))
            .into_iter()
            .map(|cluster| compute_cluster_boxes(cluster, open_hour, i64::from(slot_minutes)))
            .collect();
    to_json(&layouts)
}

/// Readable Mon-Fri range label for the week containing a date string,
/// e.g. `"Nov 17 – Nov 21, 2025"`.
#[wasm_bindgen(js_name = "formatWeekRange")]
pub fn format_week_range_json(date: &str) -> Result<String, JsValue> {
    Ok(format_week_range(parse_date(date)?))
}

/// Monday-through-next-Monday window for range queries, as a JSON object
/// with `start_date` and `end_date` strings.
#[wasm_bindgen(js_name = "getWeekRangeForApi")]
pub fn get_week_range_for_api_json(date: &str) -> Result<String, JsValue> {
    let range = get_week_range_for_api(parse_date(date)?);
    to_json(&range)
}

/// The `"HH:MM"` labels for a day column, as a JSON array of strings.
#[wasm_bindgen(js_name = "buildDaySlots")]
pub fn build_day_slots_json(
    open_hour: u32,
    close_hour: u32,
    slot_minutes: u32,
) -> Result<String, JsValue> {
    let slots = schedule_grid::build_day_slots(
        i64::from(open_hour),
        i64::from(close_hour),
        i64::from(slot_minutes),
    );
    to_json(&slots)
}

/// Step to the next open day for an office (`direction` = 1 or -1).
///
/// `settings_json` is the schedule-settings object with location-keyed
/// business hours. Returns the `"YYYY-MM-DD"` of the next open day, or the
/// input date when no open day exists within a week.
#[wasm_bindgen(js_name = "findNextOpenDay")]
pub fn find_next_open_day_json(
    current: &str,
    direction: i32,
    settings_json: &str,
    office: &str,
) -> Result<String, JsValue> {
    let date = parse_date(current)?;
    let settings: ScheduleSettings = serde_json::from_str(settings_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid settings JSON: {}", e)))?;

    let next =
        schedule_grid::hours::find_next_open_day(date, i64::from(direction), Some(&settings), office);
    Ok(schedule_grid::format_ymd_local(next))
}
