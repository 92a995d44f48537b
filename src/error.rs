use thiserror::Error;

use crate::constants::MAX_LIMIT;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("limit {0} exceeds the maximum of {MAX_LIMIT} for unauthenticated requests")]
    LimitTooHigh(u32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
