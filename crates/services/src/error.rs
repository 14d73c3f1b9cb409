//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::QuizModelError;

/// Errors emitted by `QuizApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizApiError {
    #[error("quiz server request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("quiz server rejected the request: {0}")]
    Rejected(String),
    #[error("quiz server sent an unreadable response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("quiz server sent an invalid payload: {0}")]
    InvalidPayload(#[from] QuizModelError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while building a `QuizApiConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizApiConfigError {
    #[error("invalid quiz server url {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported quiz server url scheme {0:?}; expected http or https")]
    UnsupportedScheme(String),
}
