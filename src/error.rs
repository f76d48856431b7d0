use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RateError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("bad response status: {0}")]
    Status(StatusCode),

    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}
