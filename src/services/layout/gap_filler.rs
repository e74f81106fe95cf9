//! Per-column merge of single-day items into the multi-day lane layout.
//!
//! Single-day items first take the lanes the multi-day layer skipped in a
//! column, lowest first, and only then stack above the highest occupied
//! lane. Everything at or above the window ceiling is cut.

use std::cmp::Ordering;

use crate::models::item::Item;
use crate::models::layout::{ColumnLaneMap, LaneAssignment, Occupant, Slot};

/// Slots for one column before and after truncation.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFill {
    /// Slots below the ceiling, ordered by lane.
    pub rendered: Vec<Slot>,
    /// Segments and single-day items touching the column.
    pub total: usize,
}

/// All-day items before timed ones, timed items by start time. The sort is
/// stable, so equal items keep the caller's order.
pub fn single_day_order(a: &Item, b: &Item) -> Ordering {
    b.all_day
        .cmp(&a.all_day)
        .then_with(|| a.start_time.cmp(&b.start_time))
}

pub fn fill(
    column: usize,
    lane_map: &ColumnLaneMap,
    assignments: &[LaneAssignment],
    single_day_items: &[&Item],
    ceiling: usize,
) -> ColumnFill {
    let mut slots: Vec<Slot> = assignments
        .iter()
        .filter(|assignment| assignment.segment.covers(column))
        .map(|assignment| Slot {
            lane: assignment.lane,
            occupant: Occupant::Segment(assignment.segment.clone()),
        })
        .collect();

    let mut singles = single_day_items.to_vec();
    singles.sort_by(|a, b| single_day_order(a, b));

    let gaps = lane_map.empty_lanes_below(column);
    let first_new_lane = lane_map.occupied_depth(column);
    let lanes = gaps.into_iter().chain(first_new_lane..);

    for (item, lane) in singles.into_iter().zip(lanes) {
        slots.push(Slot {
            lane,
            occupant: Occupant::Item(item.clone()),
        });
    }

    let total = slots.len();
    slots.sort_by_key(|slot| slot.lane);
    slots.retain(|slot| slot.lane < ceiling);

    ColumnFill {
        rendered: slots,
        total,
    }
}
