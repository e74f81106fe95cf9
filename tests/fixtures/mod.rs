// Test fixtures - reusable test data
// Provides consistent windows and items across the integration and property tests

#![allow(dead_code)]

use calendar_lanes::{Item, ItemId, Window, WindowGeometry};
use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Sunday, Jan 12 2025
    pub fn week_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 12).unwrap()
    }

    /// Day `offset` of the sample week (may be negative or past Saturday)
    pub fn day(offset: i64) -> NaiveDate {
        week_start() + chrono::Duration::days(offset)
    }
}

/// Window geometry helpers
pub mod geometry {
    use super::*;

    /// Geometry with 20px lanes and a 20px header, so `lanes` lanes fit
    /// exactly without the overflow reserve.
    pub fn fitting_lanes(lanes: usize) -> WindowGeometry {
        WindowGeometry {
            pixel_budget: 20.0 + 20.0 * lanes as f32,
            lane_pitch: 20.0,
            header_reserve: 20.0,
            overflow_indicator_height: 0.0,
            hard_lane_cap: 10,
        }
    }

    pub fn roomy() -> WindowGeometry {
        fitting_lanes(10)
    }

    pub fn week(offset_weeks: i64, geometry: WindowGeometry) -> Window {
        Window::week_row(dates::day(7 * offset_weeks), geometry)
    }
}

/// Sample items for testing
pub mod items {
    use super::*;

    /// All-day item covering columns `first..=last` of the sample week
    pub fn spanning(id: i64, first: i64, last: i64) -> Item {
        Item::new(ItemId(id), dates::day(first), dates::day(last))
    }

    /// Ordinary single-day item in column `column` of the sample week
    pub fn single(id: i64, column: i64) -> Item {
        Item::builder(ItemId(id))
            .start(dates::day(column))
            .segment_candidate(false)
            .build()
            .unwrap()
    }

    /// Multi-day item flagged for segmentation even when it is one day long
    pub fn banner(id: i64, first: i64, last: i64) -> Item {
        Item::builder(ItemId(id))
            .start(dates::day(first))
            .end(dates::day(last))
            .segment_candidate(true)
            .build()
            .unwrap()
    }
}
