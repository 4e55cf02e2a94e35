//! Application event handling.
//!
//! This module processes completion events from background feed loads and
//! folds them into application state.

use crate::app::{App, AppEvent};
use crate::feed::FeedAction;
use crate::store::{FeedError, FeedSnapshot};

/// Handle application events from background tasks.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::FeedLoaded { generation, result } => {
            handle_feed_loaded(app, generation, result);
        }
    }
}

/// Handle a finished feed load.
///
/// A load spawned for an older request can land after a newer one was
/// spawned. The generation counter ensures only the most recent request
/// updates the screen; stale results are dropped.
fn handle_feed_loaded(
    app: &mut App,
    generation: u64,
    result: Result<FeedSnapshot, FeedError>,
) {
    if generation != app.feed_generation {
        tracing::debug!(
            expected = app.feed_generation,
            got = generation,
            "Ignoring stale feed load (generation mismatch)"
        );
        return;
    }

    // The task for this generation has finished; nothing left to abort.
    app.feed_load_handle = None;

    match result {
        Ok(snapshot) => {
            if snapshot.skipped > 0 {
                tracing::warn!(
                    skipped = snapshot.skipped,
                    "Dropped headlines with missing ids"
                );
            }
            let count = snapshot.headlines.len();
            app.apply_feed(FeedAction::LoadSucceeded(snapshot.headlines));
            app.clamp_selection();
            app.set_status(format!("Loaded {} headlines", count));
            tracing::info!(count, generation, "Feed load complete");
        }
        Err(e) => {
            tracing::warn!(error = %e, generation, "Feed load failed");
            // The message becomes the placeholder row; see ui::headlines.
            app.apply_feed(FeedAction::LoadFailed(e.to_string()));
            app.clamp_selection();
        }
    }
}
