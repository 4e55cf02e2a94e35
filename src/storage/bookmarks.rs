use anyhow::Result;
use std::collections::HashSet;

use super::schema::Database;

/// Preference key holding the saved headline ids as a JSON string array.
pub const BOOKMARKS_KEY: &str = "bookmarks.saved_ids";

/// The set of saved headline ids.
///
/// Mutations are idempotent: adding an id twice or removing an absent id
/// is a no-op, and the return values say whether anything changed. The set
/// lives in memory for the whole session and is flushed to the database
/// after every mutation, so a crash loses at most the change in flight.
#[derive(Debug, Clone, Default)]
pub struct BookmarkSet {
    ids: HashSet<String>,
}

impl BookmarkSet {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Add an id. Returns `true` if it was not already saved.
    pub fn add(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    /// Remove an id. Returns `true` if it was saved.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Flip an id's membership. Returns whether the id is saved afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.ids
    }
}

impl Database {
    // ========================================================================
    // Bookmark Operations
    // ========================================================================

    /// Load the saved ids from the preferences store.
    ///
    /// A missing key means no bookmarks yet. A value that does not parse as
    /// a JSON string array is logged and treated as empty rather than
    /// failing startup; the next flush rewrites it.
    pub async fn load_bookmarks(&self) -> Result<BookmarkSet> {
        let ids = match self.get_preference(BOOKMARKS_KEY).await? {
            None => HashSet::new(),
            Some(json) => match serde_json::from_str::<Vec<String>>(&json) {
                Ok(list) => list.into_iter().collect(),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored bookmarks are not valid JSON, starting empty");
                    HashSet::new()
                }
            },
        };
        Ok(BookmarkSet { ids })
    }

    /// Persist the full set, replacing whatever was stored.
    ///
    /// Ids are written sorted so the stored value is deterministic.
    pub async fn save_bookmarks(&self, bookmarks: &BookmarkSet) -> Result<()> {
        let mut ids: Vec<&str> = bookmarks.ids.iter().map(String::as_str).collect();
        ids.sort_unstable();
        let json = serde_json::to_string(&ids)?;
        self.set_preference(BOOKMARKS_KEY, &json).await
    }
}
