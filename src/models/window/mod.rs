// Window module
// A fixed run of day columns sharing one pixel budget

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::settings::LayoutSettings;
use crate::utils::date::{add_days, day_offset, days_in_month, first_of_month, start_of_week};

/// How a window is laid out on screen. Only affects boundary hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WindowShape {
    Day,
    #[default]
    WeekRow,
    /// One month per row in the fixed-grid year layout.
    MonthRow,
    /// A week row that belongs to a month grid.
    MonthBlock,
}

/// Measured geometry for one window, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub pixel_budget: f32,
    pub lane_pitch: f32,
    pub header_reserve: f32,
    pub overflow_indicator_height: f32,
    pub hard_lane_cap: usize,
}

impl WindowGeometry {
    /// Geometry for a measured cell height using the configured lane metrics.
    pub fn from_settings(settings: &LayoutSettings, pixel_budget: f32) -> Self {
        Self {
            pixel_budget,
            lane_pitch: settings.lane_pitch(),
            header_reserve: settings.header_reserve,
            overflow_indicator_height: settings.overflow_indicator_height,
            hard_lane_cap: settings.hard_lane_cap,
        }
    }

    pub fn with_pixel_budget(mut self, pixel_budget: f32) -> Self {
        self.pixel_budget = pixel_budget;
        self
    }
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self::from_settings(&LayoutSettings::default(), 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub shape: WindowShape,
    /// Date shown in column 0.
    pub first_date: NaiveDate,
    pub columns: usize,
    pub geometry: WindowGeometry,
}

impl Window {
    pub fn new(
        shape: WindowShape,
        first_date: NaiveDate,
        columns: usize,
        geometry: WindowGeometry,
    ) -> Self {
        Self {
            shape,
            first_date,
            columns,
            geometry,
        }
    }

    pub fn day(date: NaiveDate, geometry: WindowGeometry) -> Self {
        Self::new(WindowShape::Day, date, 1, geometry)
    }

    /// Seven columns starting at `week_start`.
    pub fn week_row(week_start: NaiveDate, geometry: WindowGeometry) -> Self {
        Self::new(WindowShape::WeekRow, week_start, 7, geometry)
    }

    /// A month row of the year layout: column 0 is the 1st of the month and
    /// the row is `columns` wide regardless of the month's length.
    pub fn month_row(year: i32, month: u32, columns: usize, geometry: WindowGeometry) -> Option<Self> {
        let first = first_of_month(year, month)?;
        Some(Self::new(WindowShape::MonthRow, first, columns.max(1), geometry))
    }

    /// Twelve month rows for `year`.
    pub fn year_month_rows(year: i32, columns: usize, geometry: WindowGeometry) -> Vec<Self> {
        (1..=12)
            .filter_map(|month| Self::month_row(year, month, columns, geometry))
            .collect()
    }

    /// The week rows of a month grid, from the week containing the 1st to
    /// the week containing the last day.
    pub fn month_block(
        year: i32,
        month: u32,
        first_day: Weekday,
        geometry: WindowGeometry,
    ) -> Vec<Self> {
        let Some(first) = first_of_month(year, month) else {
            return Vec::new();
        };
        let last = add_days(first, days_in_month(year, month) as i64 - 1);

        let mut rows = Vec::new();
        let mut week_start = start_of_week(first, first_day);
        while week_start <= last {
            rows.push(Self::new(WindowShape::MonthBlock, week_start, 7, geometry));
            week_start = add_days(week_start, 7);
        }
        rows
    }

    /// Columns that hold a real date. Month rows are padded to a fixed
    /// width; the padding columns past the month's last day are inactive.
    pub fn active_columns(&self) -> usize {
        match self.shape {
            WindowShape::MonthRow => self
                .columns
                .min(days_in_month(self.first_date.year(), self.first_date.month()) as usize),
            _ => self.columns,
        }
    }

    /// Date shown in the last active column.
    pub fn last_date(&self) -> NaiveDate {
        add_days(self.first_date, self.active_columns().saturating_sub(1) as i64)
    }

    pub fn date_of(&self, column: usize) -> NaiveDate {
        add_days(self.first_date, column as i64)
    }

    /// Column showing `date`, if it lies inside the window.
    pub fn column_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = day_offset(self.first_date, date);
        (offset >= 0 && (offset as usize) < self.active_columns()).then_some(offset as usize)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.column_of(date).is_some()
    }

    /// Whether the month-row column actually belongs to the row's month.
    pub fn is_in_month(&self, column: usize) -> bool {
        match self.shape {
            WindowShape::MonthRow => column < self.active_columns(),
            _ => true,
        }
    }
}
