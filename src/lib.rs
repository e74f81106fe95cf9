// Calendar lane layout library
// Packs date-ranged events into lanes for week rows, month grids and year rows

pub mod models;
pub mod services;
pub mod utils;

pub use models::item::{Item, ItemId};
pub use models::layout::{BoundaryType, Capacity, LaneAssignment, Segment, VisibleSlotPlan};
pub use models::settings::LayoutSettings;
pub use models::window::{Window, WindowGeometry, WindowShape};
pub use services::layout::{LayoutCache, LayoutService};
