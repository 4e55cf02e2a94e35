//! Day-keyed feed domain: calendar keys, filtering, navigation bounds,
//! and the view state machine.
//!
//! Everything in here is pure over in-memory data. Fetching lives in
//! [`crate::store`]; persistence of bookmarks lives in [`crate::storage`].

mod day;
mod filter;
mod nav;
mod state;

pub use day::DayKey;
pub use filter::{filter_category, filter_day, list_bookmarked, CategoryFilter};
pub use nav::{can_go_forward, clamp_to_today, is_today};
pub use state::{FeedAction, FeedPhase, FeedState, ViewMode};
