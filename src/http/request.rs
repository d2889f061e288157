//! HTTP request descriptor.
//!
//! An [`HttpRequest`] captures everything about an outgoing call — method,
//! resource-relative path, optional JSON body, and query parameters —
//! before it is handed to the [`Client`](crate::Client) for sending.

use std::collections::HashMap;
use std::fmt;

use crate::http::errors::InvalidRequestError;

/// HTTP methods used by the Admin REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET for retrieving resources.
    Get,
    /// HTTP POST for creating resources and invoking actions.
    Post,
    /// HTTP PUT for updating resources.
    Put,
    /// HTTP DELETE for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A request to be sent to the Admin API.
///
/// Bodies are always JSON; when a body is present the client sends a
/// `Content-Type: application/json` header.
///
/// # Example
///
/// ```rust
/// use shopify_rest::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let get = HttpRequest::builder(HttpMethod::Get, "comments.json")
///     .build()
///     .unwrap();
///
/// let post = HttpRequest::builder(HttpMethod::Post, "comments.json")
///     .body(json!({"comment": {"body": "hi"}}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The path, relative to the `/admin` base.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters appended to the URL.
    pub query: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a builder for the given method and path.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request before sending.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::EmptyPath`] when the path is empty
    /// and [`InvalidRequestError::MissingBody`] when a POST or PUT carries
    /// no body.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if self.path.is_empty() {
            return Err(InvalidRequestError::EmptyPath);
        }
        if matches!(self.method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidRequestError::MissingBody {
                method: self.method.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Sets query parameters when present.
    #[must_use]
    pub fn maybe_query(mut self, query: Option<HashMap<String, String>>) -> Self {
        self.query = query;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the request, validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidRequestError> {
        let request = HttpRequest {
            method: self.method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}
