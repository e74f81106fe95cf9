//! Visible-lane ceilings for a window's pixel budget.

use crate::models::layout::{Capacity, ColumnLaneMap};
use crate::models::window::WindowGeometry;

/// Whole lanes that fit into `height`, clamped to `cap`.
fn lanes_in(height: f32, pitch: f32, cap: usize) -> usize {
    if !(pitch > 0.0) || !(height > 0.0) {
        return 0;
    }
    ((height / pitch).floor() as usize).min(cap)
}

/// Lanes `column` needs once single-day items have been gap-filled.
pub fn total_slots_needed(lane_map: &ColumnLaneMap, column: usize, single_day_count: usize) -> usize {
    let gaps = lane_map.empty_lanes_below(column).len();
    lane_map.occupied_depth(column) + single_day_count.saturating_sub(gaps)
}

/// Pick the ceilings for one window.
///
/// `single_day_counts[c]` is the number of single-day items in column `c`.
/// If any column needs more than `max_lanes`, every column of the window
/// renders against the reserved ceiling, since the "+N more" row spans the
/// whole window.
pub fn resolve(
    geometry: &WindowGeometry,
    lane_map: &ColumnLaneMap,
    single_day_counts: &[usize],
) -> Capacity {
    let available = geometry.pixel_budget - geometry.header_reserve;
    let max_lanes = lanes_in(available, geometry.lane_pitch, geometry.hard_lane_cap);
    let max_lanes_with_overflow_reserved = lanes_in(
        available - geometry.overflow_indicator_height,
        geometry.lane_pitch,
        geometry.hard_lane_cap,
    );

    let columns = lane_map.columns().max(single_day_counts.len());
    let needs_overflow_reserve = (0..columns).any(|column| {
        let singles = single_day_counts.get(column).copied().unwrap_or(0);
        total_slots_needed(lane_map, column, singles) > max_lanes
    });

    if needs_overflow_reserve {
        log::debug!(
            "Window overflows {} lanes; reserving indicator row ({} lanes visible)",
            max_lanes,
            max_lanes_with_overflow_reserved
        );
    }

    Capacity {
        max_lanes,
        max_lanes_with_overflow_reserved,
        needs_overflow_reserve,
    }
}
