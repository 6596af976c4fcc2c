use thiserror::Error;

/// Failures that stop a repository lookup before any body is read.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("API base URL cannot carry path segments: {0}")]
    InvalidBaseUrl(String),

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}
