use thiserror::Error;

/// Errors produced while fetching or validating the meal listing.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request itself failed (DNS, connection, TLS, non-success body read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The response parsed as JSON but the `meals` array is absent or null.
    #[error("response is missing the meal listing")]
    MalformedResponse,
}
