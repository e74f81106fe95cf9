//! Memoized window layouts.
//!
//! Entries are keyed by a blake3 hash of the serialized items and window,
//! so any change to the item set, pixel budget or column count misses.
//! Eviction drops the oldest inserted entry once the cache is full.

use std::collections::{HashMap, VecDeque};

use blake3::Hash;

use super::LayoutService;
use crate::models::item::Item;
use crate::models::layout::VisibleSlotPlan;
use crate::models::window::Window;

const DEFAULT_CAPACITY: usize = 64;

#[derive(Debug)]
pub struct LayoutCache {
    entries: HashMap<Hash, VisibleSlotPlan>,
    insertion_order: VecDeque<Hash>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl LayoutCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            insertion_order: VecDeque::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Content key for a layout input.
    ///
    /// Geometry floats are hashed by bit pattern: serde_json writes every
    /// non-finite float as `null`, which would merge +inf, -inf and NaN
    /// budgets into one key.
    pub fn key(items: &[Item], window: &Window) -> Hash {
        let mut hasher = blake3::Hasher::new();
        let identity = (items, window.shape, window.first_date, window.columns);
        match serde_json::to_vec(&identity) {
            Ok(bytes) => {
                hasher.update(&bytes);
            }
            Err(err) => {
                log::warn!("Failed to serialise layout input for hashing: {}", err);
                hasher.update(format!("{:?}", identity).as_bytes());
            }
        }

        let geometry = &window.geometry;
        for value in [
            geometry.pixel_budget,
            geometry.lane_pitch,
            geometry.header_reserve,
            geometry.overflow_indicator_height,
        ] {
            hasher.update(&value.to_bits().to_le_bytes());
        }
        hasher.update(&(geometry.hard_lane_cap as u64).to_le_bytes());
        hasher.finalize()
    }

    /// Cached layout for `(items, window)`, computing it on a miss.
    pub fn layout_window(&mut self, items: &[Item], window: &Window) -> &VisibleSlotPlan {
        let key = Self::key(items, window);
        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            log::trace!("Layout cache miss for window at {}", window.first_date);
            self.insert(key, LayoutService::layout_window(items, window));
        }
        &self.entries[&key]
    }

    fn insert(&mut self, key: Hash, plan: VisibleSlotPlan) {
        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.insertion_order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
        self.entries.insert(key, plan);
        self.insertion_order.push_back(key);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }
}
