//! Feed view state and its single transition function.
//!
//! Every change to what the list shows goes through [`FeedState::apply`].
//! The full snapshot from the store is the only source of truth; the day
//! slice and the visible rows are recomputed projections, never edited in
//! place. Input handlers decide *which* action to apply; this module owns
//! *what* each action means.

use crate::feed::{filter_category, filter_day, list_bookmarked, CategoryFilter, DayKey};
use crate::store::Headline;
use chrono::FixedOffset;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Day plus category over the snapshot.
    Normal,
    /// Saved headlines from the whole snapshot, newest first.
    BookmarksOnly,
}

/// Outcome of the most recent load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedPhase {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone)]
pub enum FeedAction {
    SelectDay(DayKey),
    SelectCategory(CategoryFilter),
    ToggleBookmarksOnly,
    LoadStarted,
    LoadSucceeded(Vec<Headline>),
    LoadFailed(String),
}

#[derive(Debug, Clone)]
pub struct FeedState {
    pub day: DayKey,
    pub category: CategoryFilter,
    pub view: ViewMode,
    pub phase: FeedPhase,
    /// Everything the last successful load returned, in store order.
    pub full: Arc<Vec<Headline>>,
    /// `full` restricted to `day`. Cached so category changes need not
    /// re-derive day keys.
    pub day_slice: Vec<Headline>,
    /// Exactly the rows the list renders.
    pub visible: Vec<Headline>,
}

impl FeedState {
    pub fn new(day: DayKey) -> Self {
        FeedState {
            day,
            category: CategoryFilter::All,
            view: ViewMode::Normal,
            phase: FeedPhase::Loading,
            full: Arc::new(Vec::new()),
            day_slice: Vec::new(),
            visible: Vec::new(),
        }
    }

    /// Apply one action, recomputing the derived rows.
    ///
    /// `saved` is consulted only when the bookmarks view (re)materializes:
    /// while the view stays open, rows removed from `saved` remain visible
    /// until the view is left and entered again.
    ///
    /// Day and category changes while in `BookmarksOnly` update the pending
    /// selection and the day slice but leave the visible rows alone; the
    /// new selection takes effect when the view returns to `Normal`.
    pub fn apply(&mut self, action: FeedAction, saved: &HashSet<String>, tz: FixedOffset) {
        match action {
            FeedAction::SelectDay(day) => {
                self.day = day;
                self.day_slice = filter_day(&self.full, day, tz);
                if self.view == ViewMode::Normal {
                    self.visible = filter_category(&self.day_slice, &self.category);
                }
            }
            FeedAction::SelectCategory(category) => {
                self.category = category;
                if self.view == ViewMode::Normal {
                    self.visible = filter_category(&self.day_slice, &self.category);
                }
            }
            FeedAction::ToggleBookmarksOnly => {
                self.view = match self.view {
                    ViewMode::Normal => ViewMode::BookmarksOnly,
                    ViewMode::BookmarksOnly => ViewMode::Normal,
                };
                self.visible = match self.view {
                    ViewMode::BookmarksOnly => list_bookmarked(&self.full, saved),
                    ViewMode::Normal => filter_category(&self.day_slice, &self.category),
                };
            }
            FeedAction::LoadStarted => {
                // Current rows stay up while a refresh is in flight.
                self.phase = FeedPhase::Loading;
            }
            FeedAction::LoadSucceeded(headlines) => {
                self.full = Arc::new(headlines);
                self.day_slice = filter_day(&self.full, self.day, tz);
                self.visible = match self.view {
                    ViewMode::Normal => filter_category(&self.day_slice, &self.category),
                    ViewMode::BookmarksOnly => list_bookmarked(&self.full, saved),
                };
                self.phase = FeedPhase::Ready;
            }
            FeedAction::LoadFailed(message) => {
                // A failed load leaves no rows behind; the list shows the
                // failure text until a later load succeeds.
                self.full = Arc::new(Vec::new());
                self.day_slice.clear();
                self.visible.clear();
                self.phase = FeedPhase::Failed(message);
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FeedPhase::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, Utc};

    fn utc() -> FixedOffset {
        Utc.fix()
    }

    fn headline(id: &str, category: &str, published: Option<i64>) -> Headline {
        Headline {
            id: id.to_string(),
            title: format!("title {id}").into(),
            link: "https://example.com".into(),
            description: "desc".into(),
            category: category.into(),
            published,
        }
    }

    fn visible_ids(state: &FeedState) -> Vec<&str> {
        state.visible.iter().map(|h| h.id.as_str()).collect()
    }

    fn only(name: &str) -> CategoryFilter {
        CategoryFilter::Only(name.to_string())
    }

    // 2024-01-15 12:00:00 UTC and the same hour one day later.
    const DAY1_NOON: i64 = 1705320000;
    const DAY2_NOON: i64 = DAY1_NOON + 86400;

    fn day1() -> DayKey {
        DayKey::parse("2024-01-15").unwrap()
    }

    fn day2() -> DayKey {
        DayKey::parse("2024-01-16").unwrap()
    }

    fn sample() -> Vec<Headline> {
        vec![
            headline("biz1", "Business", Some(DAY1_NOON)),
            headline("sci1", "Science", Some(DAY1_NOON + 60)),
            headline("biz2", "Business", Some(DAY2_NOON)),
            headline("undated", "Business", None),
        ]
    }

    fn loaded_state() -> FeedState {
        let mut state = FeedState::new(day1());
        state.apply(FeedAction::LoadSucceeded(sample()), &HashSet::new(), utc());
        state
    }

    #[test]
    fn test_new_state_is_loading_and_empty() {
        let state = FeedState::new(day1());
        assert_eq!(state.phase, FeedPhase::Loading);
        assert!(state.visible.is_empty());
        assert_eq!(state.category, CategoryFilter::All);
        assert_eq!(state.view, ViewMode::Normal);
    }

    #[test]
    fn test_load_success_projects_selected_day() {
        let state = loaded_state();
        assert_eq!(state.phase, FeedPhase::Ready);
        // Day 2 and undated rows are outside the day slice.
        assert_eq!(visible_ids(&state), vec!["biz1", "sci1"]);
    }

    #[test]
    fn test_category_narrows_then_widens() {
        let mut state = loaded_state();
        state.apply(FeedAction::SelectCategory(only("Science")), &HashSet::new(), utc());
        assert_eq!(visible_ids(&state), vec!["sci1"]);

        state.apply(FeedAction::SelectCategory(CategoryFilter::All), &HashSet::new(), utc());
        assert_eq!(visible_ids(&state), vec!["biz1", "sci1"]);
    }

    #[test]
    fn test_day_change_keeps_category() {
        let mut state = loaded_state();
        state.apply(FeedAction::SelectCategory(only("Business")), &HashSet::new(), utc());
        state.apply(FeedAction::SelectDay(day2()), &HashSet::new(), utc());
        assert_eq!(visible_ids(&state), vec!["biz2"]);

        // A day with no Business rows yields an empty, non-error list.
        state.apply(FeedAction::SelectDay(day2().succ()), &HashSet::new(), utc());
        assert!(state.visible.is_empty());
        assert_eq!(state.phase, FeedPhase::Ready);
    }

    #[test]
    fn test_bookmarks_view_spans_days_newest_first() {
        let mut state = loaded_state();
        let saved: HashSet<String> =
            ["biz1", "biz2", "undated"].iter().map(|s| s.to_string()).collect();
        state.apply(FeedAction::ToggleBookmarksOnly, &saved, utc());
        assert_eq!(state.view, ViewMode::BookmarksOnly);
        // biz2 is newer than biz1; the undated row sorts as zero.
        assert_eq!(visible_ids(&state), vec!["biz2", "biz1", "undated"]);
    }

    #[test]
    fn test_bookmarks_view_ignores_day_and_category_changes() {
        let mut state = loaded_state();
        let saved: HashSet<String> = ["biz1"].iter().map(|s| s.to_string()).collect();
        state.apply(FeedAction::ToggleBookmarksOnly, &saved, utc());
        let before = visible_ids(&state).join(",");

        state.apply(FeedAction::SelectDay(day2()), &saved, utc());
        state.apply(FeedAction::SelectCategory(only("Science")), &saved, utc());
        assert_eq!(visible_ids(&state).join(","), before);
        // The pending selection still advanced underneath.
        assert_eq!(state.day, day2());
        assert_eq!(state.category, only("Science"));
    }

    #[test]
    fn test_leaving_bookmarks_applies_pending_selection() {
        let mut state = loaded_state();
        let saved: HashSet<String> = ["biz1"].iter().map(|s| s.to_string()).collect();
        state.apply(FeedAction::ToggleBookmarksOnly, &saved, utc());
        state.apply(FeedAction::SelectDay(day2()), &saved, utc());
        state.apply(FeedAction::SelectCategory(only("Business")), &saved, utc());

        state.apply(FeedAction::ToggleBookmarksOnly, &saved, utc());
        assert_eq!(state.view, ViewMode::Normal);
        assert_eq!(visible_ids(&state), vec!["biz2"]);
    }

    #[test]
    fn test_removed_bookmark_stays_until_reentry() {
        let mut state = loaded_state();
        let mut saved: HashSet<String> =
            ["biz1", "sci1"].iter().map(|s| s.to_string()).collect();
        state.apply(FeedAction::ToggleBookmarksOnly, &saved, utc());
        assert_eq!(state.visible.len(), 2);

        // The bookmark store changed but no action was applied, so the
        // row is still on screen.
        saved.remove("sci1");
        assert_eq!(state.visible.len(), 2);

        state.apply(FeedAction::ToggleBookmarksOnly, &saved, utc());
        state.apply(FeedAction::ToggleBookmarksOnly, &saved, utc());
        assert_eq!(visible_ids(&state), vec!["biz1"]);
    }

    #[test]
    fn test_load_failure_clears_rows() {
        let mut state = loaded_state();
        assert!(!state.visible.is_empty());
        state.apply(
            FeedAction::LoadFailed("Error fetching: boom".to_string()),
            &HashSet::new(),
            utc(),
        );
        assert_eq!(state.phase, FeedPhase::Failed("Error fetching: boom".to_string()));
        assert!(state.visible.is_empty());
        assert!(state.full.is_empty());
    }

    #[test]
    fn test_refresh_keeps_rows_while_loading() {
        let mut state = loaded_state();
        state.apply(FeedAction::LoadStarted, &HashSet::new(), utc());
        assert!(state.is_loading());
        assert_eq!(visible_ids(&state), vec!["biz1", "sci1"]);
    }

    #[test]
    fn test_reload_replaces_snapshot_in_bookmarks_view() {
        let mut state = loaded_state();
        let saved: HashSet<String> = ["biz1", "biz2"].iter().map(|s| s.to_string()).collect();
        state.apply(FeedAction::ToggleBookmarksOnly, &saved, utc());
        assert_eq!(state.visible.len(), 2);

        // biz2 disappeared from the store; the rebuilt view drops it.
        let reloaded = vec![headline("biz1", "Business", Some(DAY1_NOON))];
        state.apply(FeedAction::LoadSucceeded(reloaded), &saved, utc());
        assert_eq!(visible_ids(&state), vec!["biz1"]);
    }

    #[test]
    fn test_empty_load_is_ready_not_failed() {
        let mut state = FeedState::new(day1());
        state.apply(FeedAction::LoadSucceeded(Vec::new()), &HashSet::new(), utc());
        assert_eq!(state.phase, FeedPhase::Ready);
        assert!(state.visible.is_empty());
    }
}
