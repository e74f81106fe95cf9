//! Clipping of logical items to a window's column range.

use crate::models::item::Item;
use crate::models::layout::{BoundaryType, Segment};
use crate::models::window::{Window, WindowShape};
use crate::utils::date::day_offset;

/// Clip `item` to `window`.
///
/// Returns `None` when the item's days do not intersect the window. A
/// reversed item is treated as a zero-length span at its start.
pub fn segment(item: &Item, window: &Window) -> Option<Segment> {
    let active_columns = window.active_columns();
    if active_columns == 0 {
        return None;
    }
    let end = item.effective_end();
    if end < window.first_date || item.start > window.last_date() {
        return None;
    }

    let last_column = (active_columns - 1) as i64;
    let start_offset = day_offset(window.first_date, item.start);
    let end_offset = day_offset(window.first_date, end);

    let start_column = start_offset.clamp(0, last_column) as usize;
    let end_column = end_offset.clamp(0, last_column) as usize;
    let is_first_segment = start_offset >= 0;
    let is_last_segment = end_offset <= last_column;

    Some(Segment {
        item_id: item.id,
        start_column,
        end_column,
        is_first_segment,
        is_last_segment,
        boundary_type: boundary_type(window.shape, is_first_segment, is_last_segment),
    })
}

/// Segments for every segment candidate that touches `window`.
pub fn segment_all(items: &[Item], window: &Window) -> Vec<Segment> {
    items
        .iter()
        .filter(|item| item.segment_candidate)
        .filter_map(|item| segment(item, window))
        .collect()
}

fn boundary_type(shape: WindowShape, is_first: bool, is_last: bool) -> BoundaryType {
    // A partial clip always touches the window edge it was cut at, so the
    // month-row variants depend only on which side was cut.
    match (is_first, is_last) {
        (true, true) => BoundaryType::Single,
        (false, false) => BoundaryType::Middle,
        (true, false) if shape == WindowShape::MonthRow => BoundaryType::StartWindowEnd,
        (true, false) => BoundaryType::Start,
        (false, true) if shape == WindowShape::MonthRow => BoundaryType::EndWindowStart,
        (false, true) => BoundaryType::End,
    }
}
