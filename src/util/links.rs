use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Link is not a valid URL: {0}")]
    Invalid(#[from] url::ParseError),

    #[error("Refusing to open '{0}' link (only http/https)")]
    UnsupportedScheme(String),
}

/// Validate a headline link before handing it to the system browser.
///
/// Only `http` and `https` are allowed; anything else (`file`, `javascript`,
/// custom app schemes) is rejected. Store documents are untrusted input and
/// the placeholder value `N/A` must also fail here rather than reach
/// `open::that`.
pub fn validate_open_url(link: &str) -> Result<Url, LinkError> {
    let url = Url::parse(link)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(LinkError::UnsupportedScheme(other.to_string())),
    }
}
