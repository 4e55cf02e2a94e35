use crate::store::StoreError;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Per-request deadline for store calls, on top of the client timeout.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// An anonymous store session.
///
/// The token is wrapped so it cannot leak through `Debug` formatting in
/// logs; only [`Session::bearer_token`] exposes it, at the call site that
/// builds the Authorization header.
pub struct Session {
    token: SecretString,
}

impl Session {
    pub fn bearer_token(&self) -> &str {
        self.token.expose_secret()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("token", &"[REDACTED]").finish()
    }
}

#[derive(Deserialize)]
struct AuthResponse {
    token: String,
}

/// Obtain an anonymous session from `POST /v1/auth/anonymous`.
///
/// Any failure here, including network trouble before the store even
/// answers, belongs to the auth phase of the round trip.
pub async fn sign_in_anonymously(
    client: &reqwest::Client,
    store_url: &str,
) -> Result<Session, StoreError> {
    let url = format!("{}/v1/auth/anonymous", store_url.trim_end_matches('/'));
    tracing::debug!(url = %url, "Signing in anonymously");

    let response = tokio::time::timeout(REQUEST_TIMEOUT, client.post(&url).send())
        .await
        .map_err(|_| StoreError::Timeout)?
        .map_err(StoreError::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(StoreError::HttpStatus(status.as_u16()));
    }

    let body = response.bytes().await.map_err(StoreError::Network)?;
    let auth: AuthResponse =
        serde_json::from_slice(&body).map_err(|e| StoreError::Decode(e.to_string()))?;
    Ok(Session {
        token: SecretString::from(auth.token),
    })
}
