//! Error types for the Coinbase client library.

use thiserror::Error;

/// The main error type for all Coinbase client operations.
///
/// Remote failures are deliberately narrow here: a non-2xx status or a
/// response that does not match the expected record is not an error but a
/// [`Shaped::Raw`](crate::types::Shaped) result, so callers can inspect
/// whatever the server sent back. Only transport failures, unparseable
/// bodies, and local misuse (missing credentials) surface as `Err`.
#[derive(Error, Debug)]
pub enum CoinbaseError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for private endpoints")]
    MissingCredentials,
}
