//! HTTP client for Admin API communication.
//!
//! [`Client`] is the transport layer: it owns a pooled `reqwest` client
//! configured with the request timeout from [`Config`], attaches the
//! access-token and content-type headers, and performs exactly one round
//! trip per call. There is no retry loop and no shared mutable state;
//! overlapping calls from independent tasks are safe because every field
//! is immutable after construction.

use std::collections::HashMap;

use crate::config::Config;
use crate::http::errors::HttpError;
use crate::http::request::{HttpMethod, HttpRequest};
use crate::http::response::HttpResponse;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the Shopify Admin REST API.
///
/// Endpoint URLs take the form
/// `https://{shop}/admin/<resource>[/<id>][/<action>].json`.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`; share it by reference across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::{ApiKey, ApiSecret, Client, Config, ShopDomain};
///
/// let config = Config::builder()
///     .shop(ShopDomain::new("my-store")?)
///     .api_key(ApiKey::new("key")?)
///     .api_secret(ApiSecret::new("secret")?)
///     .access_token("shpat_abc123")
///     .build()?;
///
/// let client = Client::new(&config);
/// let response = client.get("comments", None).await?;
/// ```
#[derive(Debug)]
pub struct Client {
    /// The internal reqwest HTTP client.
    http: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Default headers included in all requests.
    default_headers: HashMap<String, String>,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a new client from the given configuration.
    ///
    /// The base URI is `https://{shop}` unless the configuration carries
    /// a base-URL override. The configured timeout applies to every
    /// request, connection setup included.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// only happens in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let base_uri = config.base_url().map_or_else(
            || format!("https://{}", config.shop().as_ref()),
            ToString::to_string,
        );

        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("shopify-rest v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(token) = config.access_token() {
            if !token.is_empty() {
                default_headers.insert("X-Shopify-Access-Token".to_string(), token.to_string());
            }
        }

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request to the Admin API.
    ///
    /// Exactly one round trip. The response is returned for any HTTP
    /// status the server produced; only failures to obtain a response at
    /// all are errors. Callers interpret the status code — the resource
    /// layer maps 404 to not-found, 422 to validation failure, and other
    /// non-success codes to [`ApiError`](crate::http::ApiError) via
    /// [`HttpResponse::api_error`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the descriptor fails
    /// validation and [`HttpError::Network`] on connection failure or
    /// timeout.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/admin/{}", self.base_uri, request.path);
        tracing::debug!(method = %request.method, %url, "sending request");

        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
            HttpMethod::Put => self.http.put(&url),
            HttpMethod::Delete => self.http.delete(&url),
        };

        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }

        if let Some(query) = &request.query {
            builder = builder.query(query);
        }

        if let Some(body) = &request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let text = res.text().await.unwrap_or_default();

        let body = if text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&text).unwrap_or_else(|_| serde_json::json!({}))
        };

        let response = HttpResponse::new(code, headers, body);
        if !response.is_ok() {
            tracing::warn!(
                status = code,
                path = %request.path,
                request_id = response.request_id().unwrap_or(""),
                "request returned non-success status"
            );
        }

        Ok(response)
    }

    /// Sends a GET request to the given resource path.
    ///
    /// The path is normalized: leading slashes are stripped and a single
    /// `.json` suffix is ensured.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on an invalid path or network failure.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, normalize_path(path))
            .maybe_query(query)
            .build()?;
        self.request(request).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on an invalid path or network failure.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, normalize_path(path))
            .body(body)
            .maybe_query(query)
            .build()?;
        self.request(request).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on an invalid path or network failure.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, normalize_path(path))
            .body(body)
            .maybe_query(query)
            .build()?;
        self.request(request).await
    }

    /// Sends a DELETE request to the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on an invalid path or network failure.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, normalize_path(path))
            .maybe_query(query)
            .build()?;
        self.request(request).await
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Normalizes a resource path.
///
/// Strips leading `/` characters and any existing `.json` suffix, then
/// appends `.json`. An empty result is passed through so request
/// validation can reject it with a typed error.
fn normalize_path(path: &str) -> String {
    let path = path.trim_start_matches('/');
    let path = path.strip_suffix(".json").unwrap_or(path);
    if path.is_empty() {
        return String::new();
    }
    format!("{path}.json")
}
