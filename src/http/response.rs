//! HTTP response type.

use std::collections::HashMap;

use crate::http::errors::ApiError;

/// A response from the Admin API.
///
/// Carries the status code, the response headers, and the decoded JSON
/// body. The transport returns every HTTP response it receives — success
/// or error status — and leaves interpretation of the status code to the
/// caller; [`HttpResponse::api_error`] builds the typed error for
/// non-success responses.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers; a header may carry multiple values.
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded JSON body. An empty body decodes to `{}`.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// Useful for error reports to Shopify support.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Builds an [`ApiError`] for this response.
    ///
    /// The message is extracted from the server's `errors` or `error`
    /// body keys when present, falling back to the HTTP status text.
    #[must_use]
    pub fn api_error(&self) -> ApiError {
        let message = self
            .body
            .get("errors")
            .or_else(|| self.body.get("error"))
            .map_or_else(
                || format!("HTTP status {}", self.code),
                Self::flatten_error_value,
            );

        ApiError {
            code: self.code,
            message,
            request_id: self.request_id().map(ToString::to_string),
        }
    }

    // Server error bodies come as a string, an array of strings, or a
    // field-to-messages object; all flatten to one line.
    fn flatten_error_value(value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(items) => items
                .iter()
                .map(|v| v.as_str().map_or_else(|| v.to_string(), ToString::to_string))
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        }
    }
}
