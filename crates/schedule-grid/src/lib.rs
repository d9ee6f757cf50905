//! # schedule-grid
//!
//! Deterministic appointment layout engine for clinic day/week calendar
//! grids.
//!
//! Converts raw appointment records (date + `HH:MM` start/end strings) into
//! a conflict-free visual layout: timezone-drift-free calendar dates, a
//! total time ordering over appointments, overlap clusters for side-by-side
//! column rendering, week-range derivation, slot grids, and draw-ready box
//! geometry. Everything is a pure, synchronous function -- callers may
//! recompute on every re-render without correctness concerns.
//!
//! ## Modules
//!
//! - [`date`] — local calendar-date parsing/formatting (`"YYYY-MM-DD"`)
//! - [`time`] — `"HH:MM"` ⇄ minutes-since-midnight conversion
//! - [`position`] — attach minute offsets to appointments, sorted
//! - [`cluster`] — group overlapping appointments for column layout
//! - [`week`] — Monday-start week boundaries, labels, API windows
//! - [`slots`] — the fixed time labels on a grid's vertical axis
//! - [`hours`] — business-hours settings merged across offices
//! - [`geometry`] — clusters → draw-ready pixel/percent boxes
//! - [`filter`] — office/provider/type/status filtering
//! - [`error`] — error types

pub mod cluster;
pub mod date;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod hours;
pub mod position;
pub mod slots;
pub mod time;
pub mod week;

pub use cluster::build_clusters;
pub use date::{format_ymd_local, parse_local_date, safe_date};
pub use error::GridError;
pub use geometry::compute_cluster_boxes;
pub use position::{position_appointments, Appointment, Positioned, Schedulable};
pub use slots::{build_day_slots, compute_slots_per_day};
pub use time::hhmm_to_minutes;
pub use week::{format_week_range, get_week_range_for_api};
