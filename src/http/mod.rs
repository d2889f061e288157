//! Transport layer for Admin API communication.
//!
//! This module provides the HTTP plumbing the resource services are built
//! on:
//!
//! - [`Client`]: the async HTTP client; one round trip per call, no retries
//! - [`HttpRequest`]: the outgoing request descriptor
//! - [`HttpResponse`]: status, headers, and decoded JSON body
//! - [`HttpMethod`]: GET, POST, PUT, DELETE
//! - [`HttpError`]: transport error taxonomy
//!
//! The transport returns every HTTP response the server produced; status
//! interpretation (not-found, validation failure, generic API error)
//! belongs to the [`rest`](crate::rest) layer.

mod client;
mod errors;
mod request;
mod response;

pub use client::{Client, CLIENT_VERSION};
pub use errors::{ApiError, HttpError, InvalidRequestError};
pub use request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use response::HttpResponse;
