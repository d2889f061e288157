//! # Shopify Admin REST Client
//!
//! A typed Rust client for the Shopify Admin REST API. Resource services
//! translate method calls into HTTP requests and decode JSON envelope
//! responses into domain objects.
//!
//! ## Overview
//!
//! The crate has two layers:
//!
//! - A **transport layer** ([`Client`]): builds a request from a path,
//!   method, and optional JSON body; sends it once through a pooled,
//!   timeout-configured HTTP client; returns the decoded response.
//! - **Resource services** ([`rest::resources`]): one per resource
//!   family, each a thin mapping from domain verbs (`all`, `get`,
//!   `count`, `create`, `update`, `delete`, plus actions like `approve`
//!   or `disable`) onto endpoints of the form
//!   `/admin/<resource>[/<id>][/<action>].json`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shopify_rest::{ApiKey, ApiSecret, Client, Config, ShopDomain};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder()
//!     .shop(ShopDomain::new("my-store")?)
//!     .api_key(ApiKey::new("your-api-key")?)
//!     .api_secret(ApiSecret::new("your-api-secret")?)
//!     .access_token("shpat_access_token")
//!     .build()?;
//!
//! let client = Client::new(&config);
//!
//! // Fetch a gift card
//! let gift_card = client.gift_cards().get(123, None).await?;
//! println!("balance: {:?}", gift_card.balance);
//!
//! // Moderate a comment
//! let comment = client.comments().get(456, None).await?;
//! let approved = client.comments().approve(&comment).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Write Semantics
//!
//! Write operations take the domain object by reference and return a new
//! value decoded from the server's response; the argument is never
//! mutated. On any error the caller's object is untouched.
//!
//! ## Errors
//!
//! Failures surface as typed errors and are never retried or swallowed:
//! [`ConfigError`] for invalid configuration, [`HttpError`] for
//! transport problems, and [`rest::ResourceError`] for resource
//! semantics (not-found, missing id, validation).
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is an explicit value passed by
//!   reference
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: `Client` and `Config` are `Send + Sync`
//! - **One round trip per call**: no retries, no caching, no hidden
//!   state machine

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod rest;

// Re-export the primary types at the crate root
pub use config::{AccessScopes, ApiKey, ApiSecret, Config, ConfigBuilder, RedirectUri, ShopDomain};
pub use error::ConfigError;
pub use http::{
    ApiError, Client, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidRequestError,
};
pub use rest::{Resource, ResourceError};
