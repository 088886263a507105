use thiserror::Error;

/// Errors surfaced by the backend client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("identity must not be empty")]
    EmptyIdentity,
}

pub type Result<T> = std::result::Result<T, ClientError>;
