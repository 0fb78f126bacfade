use thiserror::Error;

/// Errors surfaced by the listing and auth HTTP clients
#[derive(Error, Debug)]
pub enum ApiError {
    /// The service answered with its own error message ({"error": "..."})
    #[error("{0}")]
    Rejected(String),

    #[error("listing not found")]
    NotFound,

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
