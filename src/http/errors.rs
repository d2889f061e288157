//! Transport-level error types.
//!
//! The taxonomy mirrors what can actually go wrong on the wire:
//!
//! - [`ApiError`]: the server answered with a non-success status
//! - [`InvalidRequestError`]: the request descriptor failed validation
//!   before anything was sent
//! - [`HttpError`]: the unified type, which also wraps network failures
//!
//! # Example
//!
//! ```rust,ignore
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Network(e)) => println!("network failure: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("bad request: {e}"),
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.code, e.message),
//! }
//! ```

use thiserror::Error;

/// The server responded with a non-success status code.
///
/// Carries the status code, the server-supplied message (extracted from
/// the `errors`/`error` body keys), and the `X-Request-Id` when present.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("API request failed with status {code}: {message}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The server-supplied error message.
    pub message: String,
    /// The `X-Request-Id` header value, for error reports.
    pub request_id: Option<String>,
}

/// A request descriptor failed validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// A POST or PUT request was built without a body.
    #[error("Cannot use {method} without a request body.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for transport operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// Network or connection failure reaching the host.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
