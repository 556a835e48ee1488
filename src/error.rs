use thiserror::Error;

/// Failures a backend call can produce. The distinction matters for the
/// initial list fetch, which surfaces a different message per variant;
/// buy/delete callers only log these.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned {0}")]
    Status(reqwest::StatusCode),

    #[error("response body is not an array of films")]
    InvalidFormat,
}
