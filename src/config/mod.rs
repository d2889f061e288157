//! Configuration types.
//!
//! Configuration is an explicit [`Config`] value with named, validated
//! fields, built once through [`ConfigBuilder`] and passed by reference
//! to everything that needs it. There is no process-wide state.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use shopify_rest::{ApiKey, ApiSecret, Config, ShopDomain};
//!
//! let config = Config::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .api_key(ApiKey::new("key").unwrap())
//!     .api_secret(ApiSecret::new("secret").unwrap())
//!     .access_token("shpat_abc123")
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
//! ```

mod newtypes;
mod scopes;

pub use newtypes::{ApiKey, ApiSecret, RedirectUri, ShopDomain};
pub use scopes::AccessScopes;

use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a Shopify Admin REST client.
///
/// Holds the shop address, app credentials, the access token attached to
/// every request, the requested install scopes, and transport settings.
///
/// # Thread Safety
///
/// `Config` is `Clone`, `Send`, and `Sync`; share it freely across tasks.
#[derive(Clone, Debug)]
pub struct Config {
    shop: ShopDomain,
    api_key: ApiKey,
    api_secret: ApiSecret,
    access_token: Option<String>,
    scopes: AccessScopes,
    redirect_uri: Option<RedirectUri>,
    timeout: Duration,
    base_url: Option<String>,
}

impl Config {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API secret.
    #[must_use]
    pub const fn api_secret(&self) -> &ApiSecret {
        &self.api_secret
    }

    /// Returns the access token, if one has been set.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Returns the requested access scopes.
    #[must_use]
    pub const fn scopes(&self) -> &AccessScopes {
        &self.scopes
    }

    /// Returns the OAuth redirect URI, if configured.
    #[must_use]
    pub const fn redirect_uri(&self) -> Option<&RedirectUri> {
        self.redirect_uri.as_ref()
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the base URL override, if configured.
    ///
    /// When unset, requests go to `https://{shop}`.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

// Verify Config is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Config>();
};

/// Builder for [`Config`].
///
/// Required fields are `shop`, `api_key`, and `api_secret`.
///
/// # Defaults
///
/// - `scopes`: `read_products`
/// - `timeout`: 30 seconds
/// - `access_token`, `redirect_uri`, `base_url`: unset
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    shop: Option<ShopDomain>,
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    access_token: Option<String>,
    scopes: Option<AccessScopes>,
    redirect_uri: Option<RedirectUri>,
    timeout: Option<Duration>,
    base_url: Option<String>,
}

impl ConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API secret (required).
    #[must_use]
    pub fn api_secret(mut self, secret: ApiSecret) -> Self {
        self.api_secret = Some(secret);
        self
    }

    /// Sets the access token attached to API requests.
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the requested access scopes.
    #[must_use]
    pub fn scopes(mut self, scopes: AccessScopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Sets the OAuth redirect URI.
    #[must_use]
    pub fn redirect_uri(mut self, uri: RedirectUri) -> Self {
        self.redirect_uri = Some(uri);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the base URL used for API requests.
    ///
    /// Intended for tests and proxies; production clients derive the base
    /// URL from the shop domain.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the configuration, validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop`, `api_key`,
    /// or `api_secret` has not been set. Returns
    /// [`ConfigError::InvalidScopes`] if the default scopes fail to parse
    /// (they cannot).
    pub fn build(self) -> Result<Config, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_secret = self.api_secret.ok_or(ConfigError::MissingRequiredField {
            field: "api_secret",
        })?;

        let scopes = match self.scopes {
            Some(scopes) => scopes,
            None => "read_products".parse()?,
        };

        Ok(Config {
            shop,
            api_key,
            api_secret,
            access_token: self.access_token,
            scopes,
            redirect_uri: self.redirect_uri,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            base_url: self.base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> ConfigBuilder {
        Config::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .api_key(ApiKey::new("test-key").unwrap())
            .api_secret(ApiSecret::new("test-secret").unwrap())
    }

    #[test]
    fn test_build_with_required_fields() {
        let config = base_builder().build().unwrap();

        assert_eq!(config.shop().as_ref(), "test-shop.myshopify.com");
        assert_eq!(config.api_key().as_ref(), "test-key");
        assert!(config.access_token().is_none());
        assert!(config.base_url().is_none());
    }

    #[test]
    fn test_build_fails_without_shop() {
        let result = Config::builder()
            .api_key(ApiKey::new("k").unwrap())
            .api_secret(ApiSecret::new("s").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "shop" })
        ));
    }

    #[test]
    fn test_build_fails_without_api_key() {
        let result = Config::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .api_secret(ApiSecret::new("s").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_default_scopes_are_read_products() {
        let config = base_builder().build().unwrap();
        assert_eq!(config.scopes().to_string(), "read_products");
    }

    #[test]
    fn test_default_timeout() {
        let config = base_builder().build().unwrap();
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_explicit_timeout() {
        let config = base_builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_access_token_is_stored() {
        let config = base_builder().access_token("shpat_token").build().unwrap();
        assert_eq!(config.access_token(), Some("shpat_token"));
    }

    #[test]
    fn test_base_url_override() {
        let config = base_builder()
            .base_url("http://127.0.0.1:9999")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), Some("http://127.0.0.1:9999"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Config>();
    }
}
