//! daywire - a terminal client for a day-keyed news headlines store.
//!
//! The crate splits into:
//! - [`store`] - anonymous sign-in and headline retrieval over HTTP
//! - [`feed`] - day keys, filters, and the feed view state
//! - [`storage`] - SQLite-backed preferences and bookmarks
//! - [`config`] - user configuration
//! - [`app`] - application state shared across the UI
//! - [`ui`] - terminal interface
//! - [`util`] - text and link helpers

pub mod app;
pub mod config;
pub mod feed;
pub mod storage;
pub mod store;
pub mod ui;
pub mod util;
