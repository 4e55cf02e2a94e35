use crate::store::auth::{sign_in_anonymously, Session, REQUEST_TIMEOUT};
use crate::store::{decode_headlines, FeedError, FeedSnapshot, StoreError};
use futures::StreamExt;

/// Cap on response body size to bound memory use.
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// One full feed round trip: anonymous sign-in, then the headlines fetch.
///
/// There is no retry here. A failed load surfaces as a placeholder and
/// the user re-triggers it; both phases run fresh on every call so a
/// stale or expired token can never wedge the feed.
pub async fn load_feed(
    client: &reqwest::Client,
    store_url: &str,
) -> Result<FeedSnapshot, FeedError> {
    let session = sign_in_anonymously(client, store_url)
        .await
        .map_err(FeedError::Auth)?;
    fetch_headlines(client, store_url, &session)
        .await
        .map_err(FeedError::Fetch)
}

/// `GET /v1/headlines` with the session's bearer token.
pub async fn fetch_headlines(
    client: &reqwest::Client,
    store_url: &str,
    session: &Session,
) -> Result<FeedSnapshot, StoreError> {
    let url = format!("{}/v1/headlines", store_url.trim_end_matches('/'));
    tracing::debug!(url = %url, "Fetching headlines");

    let response = tokio::time::timeout(
        REQUEST_TIMEOUT,
        client.get(&url).bearer_auth(session.bearer_token()).send(),
    )
    .await
    .map_err(|_| StoreError::Timeout)?
    .map_err(StoreError::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(StoreError::HttpStatus(status.as_u16()));
    }

    let body = read_limited_bytes(response, MAX_BODY_SIZE).await?;
    let snapshot = decode_headlines(&body).map_err(|e| StoreError::Decode(e.to_string()))?;
    tracing::debug!(
        count = snapshot.headlines.len(),
        skipped = snapshot.skipped,
        "Decoded headlines"
    );
    Ok(snapshot)
}

/// Read a response body, rejecting anything over `limit` bytes.
///
/// Checks the Content-Length header first when present, then enforces the
/// cap again while streaming since the header can lie or be absent.
async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, StoreError> {
    if let Some(len) = response.content_length() {
        if len > limit as u64 {
            return Err(StoreError::ResponseTooLarge);
        }
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(StoreError::Network)?;
        if body.len().saturating_add(chunk.len()) > limit {
            return Err(StoreError::ResponseTooLarge);
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
