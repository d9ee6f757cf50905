//! Tests for overlap clustering.

use schedule_grid::cluster::build_clusters;
use schedule_grid::position::{position_appointments, Appointment};
use schedule_grid::Positioned;

/// Position a list of (id, start, end) triples, ready for clustering.
fn positioned(specs: &[(i64, &str, &str)]) -> Vec<Positioned<Appointment>> {
    position_appointments(
        specs
            .iter()
            .map(|&(id, start, end)| Appointment {
                id,
                start_time: Some(start.to_string()),
                end_time: Some(end.to_string()),
                ..Default::default()
            })
            .collect(),
    )
}

#[test]
fn overlapping_pair_shares_a_cluster() {
    // 09:00-09:30 overlaps 09:15-10:00; 10:00-10:30 touches but does not
    // overlap. This is the canonical two-cluster layout scenario.
    let clusters = build_clusters(positioned(&[
        (1, "09:00", "09:30"),
        (2, "09:15", "10:00"),
        (3, "10:00", "10:30"),
    ]));

    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].len(), 2);
    assert_eq!(clusters[0][0].record.id, 1);
    assert_eq!(clusters[0][1].record.id, 2);
    assert_eq!(clusters[1].len(), 1);
    assert_eq!(clusters[1][0].record.id, 3);
}

#[test]
fn touching_intervals_split_into_separate_clusters() {
    // Back-to-back appointments must each get a full-width column, so
    // end == start is NOT an overlap.
    let clusters = build_clusters(positioned(&[(1, "09:00", "10:00"), (2, "10:00", "11:00")]));

    assert_eq!(
        clusters.len(),
        2,
        "end == start is a boundary, not an overlap"
    );
}

#[test]
fn transitive_overlap_joins_one_cluster() {
    // A overlaps B, B overlaps C, but A and C are disjoint -- still one
    // cluster via transitivity.
    let clusters = build_clusters(positioned(&[
        (1, "09:00", "09:45"),
        (2, "09:30", "10:30"),
        (3, "10:00", "11:00"),
    ]));

    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].len(), 3);
}

#[test]
fn contained_interval_does_not_end_cluster_early() {
    // The long first appointment keeps the cluster open past the short
    // second one; the running end must be the max, not the latest seen.
    let clusters = build_clusters(positioned(&[
        (1, "09:00", "12:00"),
        (2, "09:30", "10:00"),
        (3, "10:30", "11:00"),
    ]));

    assert_eq!(clusters.len(), 1, "running end is the max of member ends");
    assert_eq!(clusters[0].len(), 3);
}

#[test]
fn disjoint_appointments_each_get_their_own_cluster() {
    let clusters = build_clusters(positioned(&[
        (1, "09:00", "09:30"),
        (2, "11:00", "11:30"),
        (3, "14:00", "15:00"),
    ]));

    assert_eq!(clusters.len(), 3);
    for cluster in &clusters {
        assert_eq!(cluster.len(), 1);
    }
}

#[test]
fn empty_input_produces_no_clusters() {
    let clusters = build_clusters(positioned(&[]));
    assert!(clusters.is_empty());
}

#[test]
fn clusters_partition_the_input() {
    let input = positioned(&[
        (1, "08:00", "08:45"),
        (2, "08:30", "09:00"),
        (3, "09:00", "09:30"),
        (4, "12:00", "13:00"),
        (5, "12:15", "12:30"),
    ]);
    let total = input.len();

    let clusters = build_clusters(input);

    let mut ids: Vec<i64> = clusters
        .iter()
        .flatten()
        .map(|p| p.record.id)
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5], "every input lands in one cluster");
    assert_eq!(clusters.iter().map(Vec::len).sum::<usize>(), total);

    // No two members of different clusters overlap.
    for (i, a_cluster) in clusters.iter().enumerate() {
        for b_cluster in clusters.iter().skip(i + 1) {
            for a in a_cluster {
                for b in b_cluster {
                    assert!(
                        !(a.start_minutes < b.end_minutes && b.start_minutes < a.end_minutes),
                        "cross-cluster overlap between {} and {}",
                        a.record.id,
                        b.record.id
                    );
                }
            }
        }
    }
}
