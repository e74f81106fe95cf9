// Item module
// Caller-supplied logical event, reduced to day-resolution boundaries

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Opaque identifier the host uses to map layout output back to its events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub i64);

/// A logical event as seen by the layout engine.
///
/// Both boundaries are inclusive days. `segment_candidate` items go through
/// the multi-day packing layer; everything else is treated as a single-day
/// item and gap-filled per column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub all_day: bool,
    pub segment_candidate: bool,
    /// Time of day the item starts; only used to order single-day items.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
}

impl Item {
    /// Create an all-day item covering `start..=end`.
    ///
    /// The item is a segment candidate when it covers more than one day.
    ///
    /// # Examples
    /// ```
    /// use calendar_lanes::models::item::{Item, ItemId};
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2025, 3, 6).unwrap();
    /// let item = Item::new(ItemId(1), start, end);
    /// assert!(item.segment_candidate);
    /// assert_eq!(item.day_span(), 4);
    /// ```
    pub fn new(id: ItemId, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id,
            start,
            end,
            all_day: true,
            segment_candidate: end > start,
            start_time: None,
        }
    }

    /// Create an ordinary timed item on a single day.
    pub fn timed(id: ItemId, day: NaiveDate, start_time: NaiveTime) -> Self {
        Self {
            id,
            start: day,
            end: day,
            all_day: false,
            segment_candidate: false,
            start_time: Some(start_time),
        }
    }

    /// Build an item from timestamp boundaries.
    ///
    /// A timed item shorter than a full day whose end lands exactly on
    /// midnight ends on the preceding day, so an 18:00-00:00 item stays a
    /// single-day item instead of touching the next column.
    pub fn from_timed(id: ItemId, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let end = end.max(start);
        let mut end_day = end.date();
        if end.time() == NaiveTime::MIN && end > start && end - start < Duration::days(1) {
            end_day = end_day.pred_opt().unwrap_or(end_day);
        }
        let end_day = end_day.max(start.date());

        Self {
            id,
            start: start.date(),
            end: end_day,
            all_day: false,
            segment_candidate: end_day > start.date(),
            start_time: Some(start.time()),
        }
    }

    /// Create a builder for items with optional fields
    pub fn builder(id: ItemId) -> ItemBuilder {
        ItemBuilder::new(id)
    }

    /// Copy of this item with a malformed range (end before start)
    /// collapsed to a zero-length span at `start`.
    pub fn normalized(&self) -> Self {
        if self.end < self.start {
            log::warn!(
                "Item {:?} ends ({}) before it starts ({}); collapsing to one day",
                self.id,
                self.end,
                self.start
            );
        }
        Self {
            end: self.effective_end(),
            ..self.clone()
        }
    }

    /// Last day the item covers; a reversed range ends on its start day.
    pub fn effective_end(&self) -> NaiveDate {
        self.end.max(self.start)
    }

    /// Number of days covered, counting both boundaries.
    pub fn day_span(&self) -> i64 {
        (self.effective_end() - self.start).num_days() + 1
    }

    pub fn covers(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.effective_end()
    }
}

/// Builder for items with optional fields
pub struct ItemBuilder {
    id: ItemId,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    all_day: bool,
    segment_candidate: Option<bool>,
    start_time: Option<NaiveTime>,
}

impl ItemBuilder {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            start: None,
            end: None,
            all_day: true,
            segment_candidate: None,
            start_time: None,
        }
    }

    pub fn start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Force the segmentation flag instead of deriving it from the span.
    pub fn segment_candidate(mut self, candidate: bool) -> Self {
        self.segment_candidate = Some(candidate);
        self
    }

    pub fn start_time(mut self, time: NaiveTime) -> Self {
        self.start_time = Some(time);
        self.all_day = false;
        self
    }

    /// Build the item
    ///
    /// # Returns
    /// `Err` when no start day was given. A missing end defaults to the start.
    pub fn build(self) -> Result<Item, String> {
        let start = self.start.ok_or("Item start day is required")?;
        let end = self.end.unwrap_or(start);

        Ok(Item {
            id: self.id,
            start,
            end,
            all_day: self.all_day,
            segment_candidate: self.segment_candidate.unwrap_or(end > start),
            start_time: self.start_time,
        })
    }
}
