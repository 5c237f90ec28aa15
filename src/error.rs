//! Error Types
//!
//! `ApiError` is what the HTTP layer reports. `Failure` is what the user sees.

use thiserror::Error;

/// Errors raised while talking to the todo resource
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server rejected request: {0}")]
    Rejected(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// User-facing failure kinds; `Display` is the fixed banner message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("Failed to fetch todos")]
    Fetch,
    #[error("Failed to create todo")]
    Create,
    #[error("Failed to update todo")]
    Update,
    #[error("Failed to delete todo")]
    Delete,
}
