use thiserror::Error;

/// Failures below the HTTP status line: the request never produced a usable body.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("base url '{0}' cannot carry path segments")]
    InvalidBaseUrl(String),
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("cancellation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed cancellation response: {0}")]
    Decode(#[from] serde_json::Error),
}
