//! Authorization collaborators.
//!
//! These sit outside the request/response core: building the permission
//! URL an app sends a merchant to, and checking the HMAC signatures
//! Shopify puts on callbacks and webhooks. Exchanging the resulting code
//! for an access token is out of scope; the token is handed to
//! [`Config`](crate::Config) once obtained.

pub mod hmac;

use crate::config::Config;
use crate::error::ConfigError;

/// Builds the OAuth authorization URL for the configured shop.
///
/// The merchant is sent here to grant the scopes requested in the
/// configuration; Shopify then redirects to the configured redirect URI
/// with a `code` and a signed parameter set (see
/// [`hmac::verify_callback`]). `state` is echoed back and must be checked
/// by the caller.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequiredField`] when the configuration
/// has no redirect URI.
///
/// # Example
///
/// ```rust
/// use shopify_rest::{ApiKey, ApiSecret, Config, RedirectUri, ShopDomain};
/// use shopify_rest::auth::authorization_url;
///
/// let config = Config::builder()
///     .shop(ShopDomain::new("my-store").unwrap())
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .redirect_uri(RedirectUri::new("https://app.example.com/callback").unwrap())
///     .build()
///     .unwrap();
///
/// let url = authorization_url(&config, "nonce").unwrap();
/// assert!(url.starts_with("https://my-store.myshopify.com/admin/oauth/authorize?"));
/// assert!(url.contains("client_id=key"));
/// ```
pub fn authorization_url(config: &Config, state: &str) -> Result<String, ConfigError> {
    let redirect_uri = config
        .redirect_uri()
        .ok_or(ConfigError::MissingRequiredField {
            field: "redirect_uri",
        })?;

    Ok(format!(
        "https://{}/admin/oauth/authorize?client_id={}&scope={}&redirect_uri={}&state={}",
        config.shop().as_ref(),
        urlencoding::encode(config.api_key().as_ref()),
        urlencoding::encode(&config.scopes().to_string()),
        urlencoding::encode(redirect_uri.as_ref()),
        urlencoding::encode(state),
    ))
}
