//! Layout descriptors produced by the lane engine.
//!
//! Nothing here knows about pixels beyond the capacity numbers; the
//! presentation layer places blocks at `(column, lane)` coordinates and
//! uses [`BoundaryType`] purely for corner rounding.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::item::{Item, ItemId};
use crate::models::window::Window;

/// Corner-rounding hint for a clipped segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryType {
    /// Starts and ends inside the window.
    Single,
    /// Starts inside the window and continues past it.
    Start,
    /// Neither boundary is inside the window.
    Middle,
    /// Started before the window and ends inside it.
    End,
    /// Month rows only: starts here and runs into the row's last column.
    StartWindowEnd,
    /// Month rows only: continues from the row's first column and ends here.
    EndWindowStart,
}

impl BoundaryType {
    pub fn rounds_left(self) -> bool {
        matches!(self, Self::Single | Self::Start | Self::StartWindowEnd)
    }

    pub fn rounds_right(self) -> bool {
        matches!(self, Self::Single | Self::End | Self::EndWindowStart)
    }
}

/// The part of one item visible in one window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub item_id: ItemId,
    pub start_column: usize,
    pub end_column: usize,
    /// The item's real start is inside this window.
    pub is_first_segment: bool,
    /// The item's real end is inside this window.
    pub is_last_segment: bool,
    pub boundary_type: BoundaryType,
}

impl Segment {
    /// `end_column - start_column`; zero for a one-column segment.
    pub fn span(&self) -> usize {
        self.end_column - self.start_column
    }

    pub fn covers(&self, column: usize) -> bool {
        column >= self.start_column && column <= self.end_column
    }

    pub fn overlaps(&self, other: &Segment) -> bool {
        !(self.end_column < other.start_column || self.start_column > other.end_column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaneAssignment {
    pub segment: Segment,
    pub lane: usize,
}

/// Per column, the lanes claimed by multi-day segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLaneMap {
    columns: Vec<BTreeSet<usize>>,
}

impl ColumnLaneMap {
    pub fn build(assignments: &[LaneAssignment], columns: usize) -> Self {
        let mut map = vec![BTreeSet::new(); columns];
        for assignment in assignments {
            let end = assignment.segment.end_column.min(columns.saturating_sub(1));
            for lanes in map
                .iter_mut()
                .take(end + 1)
                .skip(assignment.segment.start_column)
            {
                lanes.insert(assignment.lane);
            }
        }
        Self { columns: map }
    }

    pub fn columns(&self) -> usize {
        self.columns.len()
    }

    pub fn lanes(&self, column: usize) -> Option<&BTreeSet<usize>> {
        self.columns.get(column)
    }

    pub fn is_occupied(&self, column: usize, lane: usize) -> bool {
        self.lanes(column).is_some_and(|lanes| lanes.contains(&lane))
    }

    /// Highest lane any segment claims in `column`.
    pub fn max_occupied_lane(&self, column: usize) -> Option<usize> {
        self.lanes(column).and_then(|lanes| lanes.last().copied())
    }

    /// Number of lanes the multi-day layer stacks in `column`, gaps included.
    pub fn occupied_depth(&self, column: usize) -> usize {
        self.max_occupied_lane(column).map_or(0, |lane| lane + 1)
    }

    /// Unclaimed lanes below the highest claimed lane, lowest first.
    pub fn empty_lanes_below(&self, column: usize) -> Vec<usize> {
        let Some(lanes) = self.lanes(column) else {
            return Vec::new();
        };
        (0..self.occupied_depth(column))
            .filter(|lane| !lanes.contains(lane))
            .collect()
    }
}

/// Visible-lane ceilings for one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    pub max_lanes: usize,
    pub max_lanes_with_overflow_reserved: usize,
    /// Some column needs more lanes than `max_lanes`.
    pub needs_overflow_reserve: bool,
}

impl Capacity {
    /// The ceiling every column of the window renders against.
    pub fn ceiling(&self) -> usize {
        if self.needs_overflow_reserve {
            self.max_lanes_with_overflow_reserved
        } else {
            self.max_lanes
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverflowCount {
    pub hidden_count: usize,
    pub has_overflow: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Occupant {
    Segment(Segment),
    Item(Item),
}

impl Occupant {
    pub fn item_id(&self) -> ItemId {
        match self {
            Self::Segment(segment) => segment.item_id,
            Self::Item(item) => item.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub lane: usize,
    pub occupant: Occupant,
}

impl Slot {
    /// True where a segment's bar is drawn; its other columns are placeholders.
    pub fn is_segment_anchor(&self, column: usize) -> bool {
        matches!(&self.occupant, Occupant::Segment(segment) if segment.start_column == column)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnPlan {
    pub column: usize,
    pub date: NaiveDate,
    /// Rendered slots ordered by lane.
    pub slots: Vec<Slot>,
    /// Segments plus single-day items touching this column.
    pub total_items: usize,
    pub has_overflow: bool,
    pub hidden_count: usize,
}

/// Final layout of one window, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibleSlotPlan {
    pub window: Window,
    pub capacity: Capacity,
    /// Full packing result, independent of capacity.
    pub assignments: Vec<LaneAssignment>,
    pub columns: Vec<ColumnPlan>,
}

impl VisibleSlotPlan {
    pub fn column(&self, column: usize) -> Option<&ColumnPlan> {
        self.columns.get(column)
    }

    pub fn lane_of(&self, item_id: ItemId) -> Option<usize> {
        self.assignments
            .iter()
            .find(|assignment| assignment.segment.item_id == item_id)
            .map(|assignment| assignment.lane)
    }

    pub fn has_overflow(&self) -> bool {
        self.columns.iter().any(|column| column.has_overflow)
    }

    /// Panics if two segments share a lane and overlap.
    pub fn assert_no_lane_overlap(&self) {
        for (i, a) in self.assignments.iter().enumerate() {
            for b in &self.assignments[i + 1..] {
                assert!(
                    a.lane != b.lane || !a.segment.overlaps(&b.segment),
                    "lane {} holds overlapping segments {:?} and {:?}",
                    a.lane,
                    a.segment,
                    b.segment
                );
            }
        }
    }
}
