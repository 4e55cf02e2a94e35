use thiserror::Error;

/// Failure of a single HTTP exchange with the headlines store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error: status {0}")]
    HttpStatus(u16),

    #[error("Request timed out")]
    Timeout,

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Response too large")]
    ResponseTooLarge,
}

/// A feed load failure, split by which phase of the round trip broke.
///
/// The distinction drives the placeholder text: sign-in problems read
/// `Auth failed: ...`, everything after a successful sign-in reads
/// `Error fetching: ...`. The `Display` output is shown to the user
/// verbatim in place of the list.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Auth failed: {0}")]
    Auth(StoreError),

    #[error("Error fetching: {0}")]
    Fetch(StoreError),
}
