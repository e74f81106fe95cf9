// Date utility functions
// Day-index arithmetic shared by the window constructors and the segmenter

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Signed number of whole days from `origin` to `date`.
pub fn day_offset(origin: NaiveDate, date: NaiveDate) -> i64 {
    (date - origin).num_days()
}

/// The date `days` after `origin`, saturating at chrono's calendar range.
pub fn add_days(origin: NaiveDate, days: i64) -> NaiveDate {
    origin
        .checked_add_signed(Duration::days(days))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Convert a settings-style weekday number (0 = Sunday .. 6 = Saturday).
pub fn weekday_from_index(index: u8) -> Weekday {
    match index % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// First date of the week containing `date`, for the given first weekday.
pub fn start_of_week(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let back = (7 + date.weekday().num_days_from_sunday() as i64
        - first_day.num_days_from_sunday() as i64)
        % 7;
    add_days(date, -back)
}

pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = first_of_month(year, month) else {
        return 0;
    };
    let next = if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    };
    next.map(|n| day_offset(first, n) as u32).unwrap_or(31)
}
