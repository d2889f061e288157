//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction so that a `Config`
//! can only ever hold well-formed values.

use std::fmt;

use crate::error::ConfigError;

/// A validated Shopify API key.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Shopify API secret.
///
/// The `Debug` implementation masks the value so the secret cannot leak
/// through logs: `ApiSecret(*****)`.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiSecret;
///
/// let secret = ApiSecret::new("shhh").unwrap();
/// assert_eq!(format!("{:?}", secret), "ApiSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecret(String);

impl ApiSecret {
    /// Creates a new validated API secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyApiSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ApiSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(*****)")
    }
}

/// A validated Shopify shop domain.
///
/// Accepts the short form (`my-store`) or the full form
/// (`my-store.myshopify.com`); the short form is normalized to the full
/// domain. Any other domain with a dot is rejected.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ShopDomain;
///
/// let domain = ShopDomain::new("my-store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    full_domain: String,
    shop_name_end: usize,
}

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the domain is empty,
    /// carries a foreign suffix, or contains invalid characters.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into();
        let domain = domain.trim().to_lowercase();

        if domain.is_empty() {
            return Err(ConfigError::InvalidShopDomain { domain });
        }

        let (shop_name, full_domain) = if let Some(shop_name) = domain.strip_suffix(Self::SUFFIX) {
            (shop_name.to_string(), domain)
        } else if domain.contains('.') {
            return Err(ConfigError::InvalidShopDomain { domain });
        } else {
            (domain.clone(), format!("{}{}", domain, Self::SUFFIX))
        };

        if !Self::is_valid_shop_name(&shop_name) {
            return Err(ConfigError::InvalidShopDomain {
                domain: full_domain,
            });
        }

        Ok(Self {
            shop_name_end: shop_name.len(),
            full_domain,
        })
    }

    /// Returns the shop name portion of the domain.
    ///
    /// For `my-store.myshopify.com`, this returns `my-store`.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.full_domain[..self.shop_name_end]
    }

    // Shop names are lowercase alphanumerics and interior hyphens.
    fn is_valid_shop_name(name: &str) -> bool {
        if name.is_empty() || name.starts_with('-') || name.ends_with('-') {
            return false;
        }
        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_domain)
    }
}

/// A validated OAuth redirect URI.
///
/// Must be an absolute `http://` or `https://` URL with a non-empty host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectUri(String);

impl RedirectUri {
    /// Creates a new validated redirect URI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRedirectUri`] if the URI does not
    /// start with an http(s) scheme or has no host.
    pub fn new(uri: impl Into<String>) -> Result<Self, ConfigError> {
        let uri = uri.into();
        let rest = uri
            .strip_prefix("https://")
            .or_else(|| uri.strip_prefix("http://"));

        match rest {
            Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(Self(uri)),
            _ => Err(ConfigError::InvalidRedirectUri { uri }),
        }
    }
}

impl AsRef<str> for RedirectUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
