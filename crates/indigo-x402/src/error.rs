use thiserror::Error;

/// Errors returned by x402 operations.
#[derive(Debug, Error)]
pub enum X402Error {
    #[error("facilitator error: {0}")]
    Facilitator(String),

    #[error("http error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}
