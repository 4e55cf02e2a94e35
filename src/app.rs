use crate::config::Config;
use crate::feed::{CategoryFilter, DayKey, FeedAction, FeedState, ViewMode};
use crate::storage::{BookmarkSet, Database};
use crate::store::{self, FeedError, FeedSnapshot};
use anyhow::Result;
use chrono::FixedOffset;
use reqwest::redirect::Policy;
use std::borrow::Cow;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

// ============================================================================
// Events
// ============================================================================

/// Events sent from background tasks to the UI event loop.
#[derive(Debug)]
pub enum AppEvent {
    /// A feed load round trip finished (successfully or not).
    FeedLoaded {
        generation: u64,
        result: Result<FeedSnapshot, FeedError>,
    },
}

// ============================================================================
// HTTP Client Configuration
// ============================================================================

/// Create a redirect policy for the HTTP client.
///
/// - Limits redirects to 3 hops maximum
/// - Detects redirect loops (same URL appearing twice in chain)
/// - Logs redirect chain for debugging
fn create_redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        // Limit to 3 redirects
        if attempt.previous().len() >= 3 {
            return attempt.error("Too many redirects (max 3)");
        }

        // Detect loops
        let url = attempt.url();
        for prev in attempt.previous() {
            if prev.as_str() == url.as_str() {
                return attempt.error("Redirect loop detected");
            }
        }

        tracing::debug!(
            from = %attempt.previous().last().map(|u| u.as_str()).unwrap_or("initial"),
            to = %url,
            hop = attempt.previous().len() + 1,
            "Following redirect"
        );

        attempt.follow()
    })
}

// ============================================================================
// Application State
// ============================================================================

/// Global application state shared across the UI.
pub struct App {
    pub db: Database,
    pub http_client: reqwest::Client,
    pub store_url: String,
    /// Offset used to assign headlines to calendar days.
    pub tz: FixedOffset,
    /// Category names after the built-in All entry, in cycle order.
    pub categories: Vec<String>,
    pub feed: FeedState,
    pub bookmarks: BookmarkSet,
    /// Selected row in the visible list.
    pub selected: usize,
    /// Input buffer for the go-to-date overlay; `Some` means it is open.
    pub goto_input: Option<String>,
    pub show_help: bool,
    pub status_message: Option<(Cow<'static, str>, Instant)>,
    pub needs_redraw: bool,
    /// Monotonic id for feed loads; results from older loads are dropped.
    pub feed_generation: u64,
    pub feed_load_handle: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(db: Database, config: &Config, start_day: DayKey) -> Result<Self> {
        // One remote host, so a small idle pool is plenty.
        let http_client = reqwest::Client::builder()
            .redirect(create_redirect_policy())
            .pool_max_idle_per_host(2)
            .pool_idle_timeout(std::time::Duration::from_secs(30))
            .tcp_keepalive(std::time::Duration::from_secs(60))
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            db,
            http_client,
            store_url: config.store_url.clone(),
            tz: config.timezone(),
            categories: config.categories.clone(),
            feed: FeedState::new(start_day),
            bookmarks: BookmarkSet::default(),
            selected: 0,
            goto_input: None,
            show_help: false,
            status_message: None,
            needs_redraw: true,
            feed_generation: 0,
            feed_load_handle: None,
        })
    }

    /// The current day under the configured offset.
    pub fn today(&self) -> DayKey {
        DayKey::today(self.tz)
    }

    // ========================================================================
    // Feed State Transitions
    // ========================================================================

    pub fn apply_feed(&mut self, action: FeedAction) {
        self.feed.apply(action, self.bookmarks.ids(), self.tz);
    }

    /// Switch the selected day.
    ///
    /// Resets the row selection in the normal view; in the bookmarks view
    /// the visible rows do not change, so the selection stays put.
    pub fn select_day(&mut self, day: DayKey) {
        self.apply_feed(FeedAction::SelectDay(day));
        if self.feed.view == ViewMode::Normal {
            self.selected = 0;
        }
        self.clamp_selection();
    }

    /// Step through the category ring: All, then the configured names.
    ///
    /// `step` is +1 for forward, -1 for backward; the ring wraps.
    pub fn cycle_category(&mut self, step: isize) {
        let ring_len = self.categories.len() as isize + 1;
        let current = match &self.feed.category {
            CategoryFilter::All => 0,
            CategoryFilter::Only(name) => self
                .categories
                .iter()
                .position(|c| c == name)
                .map(|i| i as isize + 1)
                .unwrap_or(0),
        };
        let next = (current + step).rem_euclid(ring_len) as usize;
        let category = if next == 0 {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(self.categories[next - 1].clone())
        };
        self.apply_feed(FeedAction::SelectCategory(category));
        if self.feed.view == ViewMode::Normal {
            self.selected = 0;
        }
        self.clamp_selection();
    }

    pub fn toggle_saved_view(&mut self) {
        self.apply_feed(FeedAction::ToggleBookmarksOnly);
        self.selected = 0;
    }

    /// Toggle the bookmark on the selected headline and flush the set.
    ///
    /// The in-memory change stands even when the flush fails: the session
    /// keeps working and the next successful flush writes the full set.
    pub async fn toggle_selected_bookmark(&mut self) {
        let Some(headline) = self.selected_headline() else {
            return;
        };
        let id = headline.id.clone();
        let saved = self.bookmarks.toggle(&id);
        match self.db.save_bookmarks(&self.bookmarks).await {
            Ok(()) => self.set_status(if saved { "Saved" } else { "Removed from saved" }),
            Err(e) => {
                tracing::warn!(error = %e, id = %id, "Failed to persist bookmarks");
                self.set_status("Bookmark change not saved (storage error)");
            }
        }
    }

    // ========================================================================
    // Row Selection
    // ========================================================================

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.feed.visible.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Clamp the row selection to the visible list.
    ///
    /// Call this after any operation that may shrink the list, such as a
    /// background load completing.
    pub fn clamp_selection(&mut self) {
        self.selected = if self.feed.visible.is_empty() {
            0
        } else {
            self.selected.min(self.feed.visible.len().saturating_sub(1))
        };

        debug_assert!(
            self.feed.visible.is_empty() || self.selected < self.feed.visible.len(),
            "selected {} out of bounds for visible len {}",
            self.selected,
            self.feed.visible.len()
        );
    }

    /// Get the currently selected headline (bounds-checked).
    pub fn selected_headline(&self) -> Option<&store::Headline> {
        self.feed.visible.get(self.selected)
    }

    // ========================================================================
    // Status Messages
    // ========================================================================

    /// Set status message (will auto-expire after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired (older than 3 seconds)
    /// Returns true if a message was actually cleared
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    // ========================================================================
    // Background Loads
    // ========================================================================

    /// Start a feed load in the background, superseding any load in flight.
    ///
    /// The previous task is aborted and the generation counter bumped so a
    /// result that still slips through is recognized as stale and dropped
    /// by the event handler.
    pub fn spawn_feed_load(&mut self, event_tx: &mpsc::Sender<AppEvent>) {
        if let Some(handle) = self.feed_load_handle.take() {
            handle.abort();
            tracing::debug!("Aborted previous feed load");
        }

        self.feed_generation = self.feed_generation.wrapping_add(1);
        let generation = self.feed_generation;
        self.apply_feed(FeedAction::LoadStarted);

        let client = self.http_client.clone();
        let store_url = self.store_url.clone();
        let tx = event_tx.clone();
        self.feed_load_handle = Some(tokio::spawn(async move {
            let result = store::load_feed(&client, &store_url).await;
            if let Err(e) = tx.send(AppEvent::FeedLoaded { generation, result }).await {
                tracing::warn!(error = %e, "Failed to send feed load result (receiver dropped)");
            }
        }));
    }
}

// ============================================================================
// Resource Cleanup
// ============================================================================

/// Abort the in-flight load task on App drop so no orphaned tokio task
/// keeps running after the event loop terminates.
impl Drop for App {
    fn drop(&mut self) {
        if let Some(handle) = self.feed_load_handle.take() {
            handle.abort();
            tracing::debug!("Aborted feed load task on App drop");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
