//! Greedy lane assignment for the segments of one window.
//!
//! Segments are placed longest first, then by earliest start column, then by
//! item id, each into the lowest lane where it overlaps nothing already
//! placed. The result does not depend on input order or on how many lanes
//! the window can show; capping is the capacity resolver's job.

use std::cmp::Reverse;

use crate::models::layout::{LaneAssignment, Segment};

/// Assign every segment a lane such that no two segments sharing a lane
/// overlap.
pub fn pack(mut segments: Vec<Segment>) -> Vec<LaneAssignment> {
    segments.sort_by_key(|segment| (Reverse(segment.span()), segment.start_column, segment.item_id));

    // Each lane needs at most one segment to exist, so this bounds the search.
    let lane_bound = segments.len();
    let mut lanes: Vec<Vec<(usize, usize)>> = Vec::new();
    let mut assignments = Vec::with_capacity(segments.len());

    for segment in segments {
        let mut lane = 0;
        while lane < lanes.len() && !lane_is_free(&lanes[lane], &segment) {
            lane += 1;
        }
        debug_assert!(lane < lane_bound, "lane search exceeded {} lanes", lane_bound);

        if lane == lanes.len() {
            lanes.push(Vec::new());
        }
        lanes[lane].push((segment.start_column, segment.end_column));
        log::trace!(
            "Packed {:?} columns {}..={} into lane {}",
            segment.item_id,
            segment.start_column,
            segment.end_column,
            lane
        );
        assignments.push(LaneAssignment { segment, lane });
    }

    assignments
}

fn lane_is_free(placed: &[(usize, usize)], segment: &Segment) -> bool {
    placed
        .iter()
        .all(|&(start, end)| end < segment.start_column || start > segment.end_column)
}

/// Number of lanes the packing uses.
pub fn lane_count(assignments: &[LaneAssignment]) -> usize {
    assignments
        .iter()
        .map(|assignment| assignment.lane + 1)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::ItemId;
    use crate::models::layout::BoundaryType;
    use pretty_assertions::assert_eq;

    fn segment(id: i64, start: usize, end: usize) -> Segment {
        Segment {
            item_id: ItemId(id),
            start_column: start,
            end_column: end,
            is_first_segment: true,
            is_last_segment: true,
            boundary_type: BoundaryType::Single,
        }
    }

    fn lane_for(assignments: &[LaneAssignment], id: i64) -> usize {
        assignments
            .iter()
            .find(|a| a.segment.item_id == ItemId(id))
            .map(|a| a.lane)
            .unwrap()
    }

    #[test]
    fn test_overlap_forces_new_lane() {
        let assignments = pack(vec![segment(1, 1, 4), segment(2, 3, 3)]);
        assert_eq!(lane_for(&assignments, 1), 0);
        assert_eq!(lane_for(&assignments, 2), 1);
    }

    #[test]
    fn test_disjoint_segments_share_lane() {
        let assignments = pack(vec![segment(1, 0, 1), segment(2, 2, 3)]);
        assert_eq!(lane_for(&assignments, 1), 0);
        assert_eq!(lane_for(&assignments, 2), 0);
        assert_eq!(lane_count(&assignments), 1);
    }

    #[test]
    fn test_longer_segment_wins_lane_zero() {
        // Inserted short-first, but the long one is packed first.
        let assignments = pack(vec![segment(1, 2, 2), segment(2, 0, 6)]);
        assert_eq!(lane_for(&assignments, 2), 0);
        assert_eq!(lane_for(&assignments, 1), 1);
    }

    #[test]
    fn test_equal_span_ties_break_on_start_then_id() {
        let assignments = pack(vec![segment(9, 2, 4), segment(3, 1, 3), segment(1, 1, 3)]);
        assert_eq!(lane_for(&assignments, 1), 0);
        assert_eq!(lane_for(&assignments, 3), 1);
        assert_eq!(lane_for(&assignments, 9), 2);
    }

    #[test]
    fn test_lower_lane_reused_after_gap() {
        let assignments = pack(vec![
            segment(1, 0, 3),
            segment(2, 2, 5),
            segment(3, 5, 6),
        ]);
        assert_eq!(lane_for(&assignments, 1), 0);
        assert_eq!(lane_for(&assignments, 2), 1);
        assert_eq!(lane_for(&assignments, 3), 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(pack(Vec::new()).is_empty());
        assert_eq!(lane_count(&[]), 0);
    }
}
