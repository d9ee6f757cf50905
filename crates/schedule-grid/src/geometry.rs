//! Cluster box geometry -- convert clusters into draw-ready grid boxes.
//!
//! Vertical placement is pixels from the top of the open range; horizontal
//! placement is percent of the day column. A sliver of column width stays
//! unallocated so the slot underneath remains clickable.

use serde::Serialize;

use crate::position::Positioned;

/// Pixel height of one slot row.
pub const SLOT_ROW_PX: f64 = 48.0;
/// Percent of column width left unoccupied by appointment boxes.
pub const SLIVER_PERCENT: f64 = 12.0;

/// Minutes since midnight to a pixel offset from the top of the grid.
///
/// `open_hour` may be fractional (an `"08:30"` opening is 8.5).
pub fn minutes_to_px(minutes: i64, open_hour: f64, slot_minutes: i64) -> f64 {
    let minute_height = SLOT_ROW_PX / slot_minutes as f64;
    (minutes as f64 - open_hour * 60.0) * minute_height
}

/// One appointment's draw-ready box within its cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentBox<A> {
    pub appt: Positioned<A>,
    pub top: f64,
    pub height: f64,
    pub left_percent: f64,
    pub width_percent: f64,
}

/// Summary box standing in for a cluster too crowded to draw side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollapsedBox {
    pub n: usize,
    pub top: f64,
    pub height: f64,
}

/// Draw-ready layout for one cluster: either individual boxes or a single
/// collapsed box.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterLayout<A> {
    pub n: usize,
    pub boxes: Vec<AppointmentBox<A>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed_box: Option<CollapsedBox>,
}

/// Convert a positioned appointment cluster into draw-ready boxes.
///
/// Up to three members share the usable column width side by side, in start
/// order. Larger clusters collapse into one summary box spanning the
/// cluster's full time range; the view renders it as an "N appointments"
/// card.
pub fn compute_cluster_boxes<A>(
    cluster: Vec<Positioned<A>>,
    open_hour: f64,
    slot_minutes: i64,
) -> ClusterLayout<A> {
    let n = cluster.len();
    let usable = 100.0 - SLIVER_PERCENT;
    let minute_height = SLOT_ROW_PX / slot_minutes as f64;

    if n > 3 {
        let cluster_start = cluster.iter().map(|a| a.start_minutes).min().unwrap_or(0);
        let cluster_end = cluster.iter().map(|a| a.end_minutes).max().unwrap_or(0);

        return ClusterLayout {
            n,
            boxes: Vec::new(),
            collapsed_box: Some(CollapsedBox {
                n,
                top: minutes_to_px(cluster_start, open_hour, slot_minutes),
                height: (cluster_end - cluster_start) as f64 * minute_height,
            }),
        };
    }

    let width_percent = if n > 0 { usable / n as f64 } else { usable };

    let boxes = cluster
        .into_iter()
        .enumerate()
        .map(|(index, appt)| AppointmentBox {
            top: minutes_to_px(appt.start_minutes, open_hour, slot_minutes),
            height: (appt.end_minutes - appt.start_minutes) as f64 * minute_height,
            left_percent: index as f64 * width_percent,
            width_percent,
            appt,
        })
        .collect();

    ClusterLayout {
        n,
        boxes,
        collapsed_box: None,
    }
}

/// Overlay sizes shading closed hours above and below the 8:00-17:00
/// baseline grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosedOverlays {
    pub top_overlay_height_px: f64,
    pub bottom_overlay_top_px: Option<f64>,
}

/// Compute overlay geometry for hours outside the open range.
pub fn compute_closed_overlays(
    open_hour: f64,
    close_hour: f64,
    slot_minutes: i64,
) -> ClosedOverlays {
    let row_per_hour = (60.0 / slot_minutes as f64) * SLOT_ROW_PX;

    let top_overlay_height_px = if open_hour > 8.0 {
        (open_hour - 8.0) * row_per_hour
    } else {
        0.0
    };

    let bottom_overlay_top_px = if close_hour < 17.0 {
        Some((close_hour - 8.0) * row_per_hour)
    } else {
        None
    };

    ClosedOverlays {
        top_overlay_height_px,
        bottom_overlay_top_px,
    }
}
