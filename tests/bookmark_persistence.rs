//! Integration tests for bookmark persistence across sessions.
//!
//! The in-module tests cover the set semantics against an in-memory
//! database; these open a real database file and reopen it to prove the
//! saved set survives a restart, and drive the loaded set into the saved
//! view the way startup does.

use daywire::feed::{FeedAction, FeedState, DayKey, ViewMode};
use daywire::storage::{BookmarkSet, Database, BOOKMARKS_KEY};
use daywire::store::Headline;
use chrono::{FixedOffset, Offset, Utc};
use std::path::PathBuf;

fn temp_db_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("daywire-test-{}-{}.db", name, std::process::id()))
}

fn utc() -> FixedOffset {
    Utc.fix()
}

fn headline(id: &str, published: Option<i64>) -> Headline {
    Headline {
        id: id.to_string(),
        title: format!("title {id}").into(),
        link: "https://example.com".into(),
        description: "desc".into(),
        category: "Business".into(),
        published,
    }
}

#[tokio::test]
async fn test_bookmarks_survive_reopen() {
    let path = temp_db_path("reopen");
    std::fs::remove_file(&path).ok();
    let path_str = path.to_str().unwrap();

    {
        let db = Database::open(path_str).await.unwrap();
        let mut set = BookmarkSet::default();
        set.add("h1");
        set.add("h2");
        db.save_bookmarks(&set).await.unwrap();
    }

    let db = Database::open(path_str).await.unwrap();
    let loaded = db.load_bookmarks().await.unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(loaded.contains("h1"));
    assert!(loaded.contains("h2"));

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn test_fresh_database_has_no_bookmarks() {
    let path = temp_db_path("fresh");
    std::fs::remove_file(&path).ok();

    let db = Database::open(path.to_str().unwrap()).await.unwrap();
    let loaded = db.load_bookmarks().await.unwrap();
    assert!(loaded.is_empty());

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn test_corrupt_value_recovers_and_next_save_rewrites() {
    let path = temp_db_path("corrupt");
    std::fs::remove_file(&path).ok();
    let path_str = path.to_str().unwrap();

    {
        let db = Database::open(path_str).await.unwrap();
        db.set_preference(BOOKMARKS_KEY, "definitely not json")
            .await
            .unwrap();
        // Corruption is tolerated, not fatal.
        let loaded = db.load_bookmarks().await.unwrap();
        assert!(loaded.is_empty());

        let mut set = BookmarkSet::default();
        set.add("recovered");
        db.save_bookmarks(&set).await.unwrap();
    }

    let db = Database::open(path_str).await.unwrap();
    let loaded = db.load_bookmarks().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.contains("recovered"));

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn test_toggle_sequence_persists_final_state() {
    let path = temp_db_path("toggle");
    std::fs::remove_file(&path).ok();
    let path_str = path.to_str().unwrap();

    {
        let db = Database::open(path_str).await.unwrap();
        let mut set = db.load_bookmarks().await.unwrap();
        // Save, remove, save again: the stored value tracks each flush.
        set.toggle("a");
        db.save_bookmarks(&set).await.unwrap();
        set.toggle("a");
        db.save_bookmarks(&set).await.unwrap();
        set.toggle("b");
        db.save_bookmarks(&set).await.unwrap();
    }

    let db = Database::open(path_str).await.unwrap();
    let loaded = db.load_bookmarks().await.unwrap();
    assert!(!loaded.contains("a"));
    assert!(loaded.contains("b"));
    assert_eq!(loaded.len(), 1);

    std::fs::remove_file(&path).ok();
}

// ============================================================================
// Loaded Bookmarks Drive the Saved View
// ============================================================================

#[tokio::test]
async fn test_loaded_bookmarks_materialize_saved_view() {
    let path = temp_db_path("saved-view");
    std::fs::remove_file(&path).ok();
    let path_str = path.to_str().unwrap();

    {
        let db = Database::open(path_str).await.unwrap();
        let mut set = BookmarkSet::default();
        set.add("old");
        set.add("new");
        db.save_bookmarks(&set).await.unwrap();
    }

    // Next session: the persisted set selects rows from a fresh snapshot.
    let db = Database::open(path_str).await.unwrap();
    let bookmarks = db.load_bookmarks().await.unwrap();

    let snapshot = vec![
        headline("old", Some(1_000)),
        headline("unsaved", Some(2_000)),
        headline("new", Some(3_000)),
    ];
    let mut state = FeedState::new(DayKey::parse("2024-01-15").unwrap());
    state.apply(
        FeedAction::LoadSucceeded(snapshot),
        bookmarks.ids(),
        utc(),
    );
    state.apply(FeedAction::ToggleBookmarksOnly, bookmarks.ids(), utc());

    assert_eq!(state.view, ViewMode::BookmarksOnly);
    let ids: Vec<&str> = state.visible.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "old"]);

    std::fs::remove_file(&path).ok();
}
