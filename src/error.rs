//! Configuration error types.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid values are rejected at construction time rather than surfacing
//! later as malformed requests.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building or validating configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Shopify API key.")]
    EmptyApiKey,

    /// API secret cannot be empty.
    #[error("API secret cannot be empty. Please provide a valid Shopify API secret.")]
    EmptyApiSecret,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// Redirect URI is invalid.
    #[error("Invalid redirect URI '{uri}'. Expected an absolute http(s) URL.")]
    InvalidRedirectUri {
        /// The invalid URI that was provided.
        uri: String,
    },

    /// Scopes are invalid.
    #[error("Invalid access scopes: {reason}")]
    InvalidScopes {
        /// The reason the scopes are invalid.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
