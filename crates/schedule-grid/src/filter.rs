//! Centralized appointment filtering for all schedule views.

use serde::{Deserialize, Serialize};

use crate::position::Appointment;

/// Sidebar filter state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleFilters {
    #[serde(default)]
    pub providers: Vec<i64>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub statuses: Vec<String>,
    #[serde(default)]
    pub include_blocked_times: bool,
}

/// Apply office, provider, type, status, and block-visibility filters.
///
/// An empty office selection shows all offices; a non-empty one requires the
/// appointment's office to be among the selected. Type and status filters do
/// not apply to block records, which are governed solely by
/// `include_blocked_times`.
pub fn filter_appointments(
    appointments: Vec<Appointment>,
    filters: &ScheduleFilters,
    selected_offices: &[String],
) -> Vec<Appointment> {
    appointments
        .into_iter()
        .filter(|appt| {
            if !selected_offices.is_empty() {
                match &appt.office {
                    Some(office) if selected_offices.contains(office) => {}
                    _ => return false,
                }
            }

            if !filters.providers.is_empty() {
                match appt.provider {
                    Some(id) if filters.providers.contains(&id) => {}
                    _ => return false,
                }
            }

            let is_block = appt.is_block;

            if !is_block && !filters.types.is_empty() {
                match &appt.appointment_type {
                    Some(t) if filters.types.contains(t) => {}
                    _ => return false,
                }
            }

            if !is_block && !filters.statuses.is_empty() {
                match &appt.status {
                    Some(s) if filters.statuses.contains(s) => {}
                    _ => return false,
                }
            }

            if !filters.include_blocked_times
                && (is_block || appt.appointment_type.as_deref() == Some("Block Time"))
            {
                return false;
            }

            true
        })
        .collect()
}
