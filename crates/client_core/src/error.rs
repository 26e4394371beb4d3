use shared::error::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid server url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("generation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response from generation endpoint (HTTP {status}): {source}")]
    MalformedResponse {
        status: u16,
        source: serde_json::Error,
    },
    #[error("generation rejected: {0}")]
    Api(#[from] ApiError),
}
