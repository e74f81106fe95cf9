//! Lane layout engine.
//!
//! One pass per window: clip items into segments, pack segments into lanes,
//! pick the visible-lane ceiling, then gap-fill single-day items and count
//! what overflowed, column by column. Windows never read each other's state,
//! so callers may lay them out in any order or in parallel.

pub mod cache;
pub mod capacity;
pub mod gap_filler;
pub mod overflow;
pub mod packer;
pub mod segmenter;

pub use cache::LayoutCache;

use crate::models::item::Item;
use crate::models::layout::{ColumnLaneMap, ColumnPlan, VisibleSlotPlan};
use crate::models::window::Window;

pub struct LayoutService;

impl LayoutService {
    /// Lay out `items` in `window`.
    pub fn layout_window(items: &[Item], window: &Window) -> VisibleSlotPlan {
        let columns = window.active_columns();

        let segments = segmenter::segment_all(items, window);
        let assignments = packer::pack(segments);
        let lane_map = ColumnLaneMap::build(&assignments, columns);

        let singles = Self::single_day_items_by_column(items, window);
        let single_day_counts: Vec<usize> = singles.iter().map(Vec::len).collect();

        let capacity = capacity::resolve(&window.geometry, &lane_map, &single_day_counts);
        let ceiling = capacity.ceiling();

        let column_plans = singles
            .iter()
            .enumerate()
            .map(|(column, column_items)| {
                let filled = gap_filler::fill(column, &lane_map, &assignments, column_items, ceiling);
                let overflow = overflow::count(filled.total, filled.rendered.len());
                ColumnPlan {
                    column,
                    date: window.date_of(column),
                    slots: filled.rendered,
                    total_items: filled.total,
                    has_overflow: overflow.has_overflow,
                    hidden_count: overflow.hidden_count,
                }
            })
            .collect();

        log::debug!(
            "Laid out {:?} window at {}: {} segments in {} lanes, ceiling {}",
            window.shape,
            window.first_date,
            assignments.len(),
            packer::lane_count(&assignments),
            ceiling
        );

        VisibleSlotPlan {
            window: window.clone(),
            capacity,
            assignments,
            columns: column_plans,
        }
    }

    /// Lay out each window independently.
    pub fn layout_windows(items: &[Item], windows: &[Window]) -> Vec<VisibleSlotPlan> {
        windows
            .iter()
            .map(|window| Self::layout_window(items, window))
            .collect()
    }

    /// Non-candidate items grouped by the active columns they cover.
    fn single_day_items_by_column<'a>(items: &'a [Item], window: &Window) -> Vec<Vec<&'a Item>> {
        let mut columns = vec![Vec::new(); window.active_columns()];
        for item in items.iter().filter(|item| !item.segment_candidate) {
            // Clipping gives the covered column range; the boundary tag is unused here.
            if let Some(range) = segmenter::segment(item, window) {
                for column_items in &mut columns[range.start_column..=range.end_column] {
                    column_items.push(item);
                }
            }
        }
        columns
    }
}
