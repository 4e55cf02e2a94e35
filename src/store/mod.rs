//! HTTP client for the headlines store: anonymous auth, the headlines
//! endpoint, and wire-format decoding.

mod auth;
mod client;
mod error;
mod types;

pub use auth::{sign_in_anonymously, Session};
pub use client::{fetch_headlines, load_feed};
pub use error::{FeedError, StoreError};
pub use types::{decode_headlines, FeedSnapshot, Headline, MISSING_FIELD};
