mod bookmarks;
mod preferences;
mod schema;
mod types;

pub use bookmarks::{BookmarkSet, BOOKMARKS_KEY};
pub use schema::Database;
pub use types::DatabaseError;
