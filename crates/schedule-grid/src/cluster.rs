//! Overlap clustering -- group positioned appointments for column layout.
//!
//! A cluster is a maximal run of appointments connected by direct or
//! transitive time overlap. Appointments in different clusters never overlap,
//! so each cluster can allocate its rendering columns independently.

use crate::position::Positioned;

/// Build clusters of overlapping appointments.
///
/// Input must already be sorted by `start_minutes` (the contract of
/// [`crate::position::position_appointments`]). A single left-to-right sweep
/// tracks the running maximum end time of the in-progress cluster; an
/// appointment joins it only when its start is *strictly* before that end.
/// Back-to-back appointments where one ends exactly as the next starts land
/// in separate clusters -- that boundary gives them full-width columns
/// instead of shared ones, and must hold exactly.
///
/// Clusters come out in ascending order of their first member's start, and
/// together they partition the input.
pub fn build_clusters<A>(appts: Vec<Positioned<A>>) -> Vec<Vec<Positioned<A>>> {
    let mut clusters: Vec<Vec<Positioned<A>>> = Vec::new();
    let mut current: Vec<Positioned<A>> = Vec::new();
    let mut cluster_end = i64::MIN;

    for appt in appts {
        if current.is_empty() || appt.start_minutes < cluster_end {
            cluster_end = cluster_end.max(appt.end_minutes);
            current.push(appt);
        } else {
            clusters.push(std::mem::take(&mut current));
            cluster_end = appt.end_minutes;
            current.push(appt);
        }
    }

    if !current.is_empty() {
        clusters.push(current);
    }

    clusters
}
