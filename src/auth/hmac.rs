//! HMAC integrity checks for OAuth callbacks and webhooks.
//!
//! Shopify signs two kinds of inbound traffic with the app's API secret:
//!
//! - **OAuth callbacks** carry an `hmac` query parameter — a hex
//!   HMAC-SHA256 over the remaining parameters, sorted and joined as a
//!   query string.
//! - **Webhooks** carry an `X-Shopify-Hmac-SHA256` header — a base64
//!   HMAC-SHA256 over the raw request body.
//!
//! All comparisons are constant-time.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use shopify_rest::auth::hmac::{compute_signature, verify_callback};
//!
//! let mut params = HashMap::new();
//! params.insert("shop".to_string(), "some-shop.myshopify.com".to_string());
//! params.insert("code".to_string(), "a94a110d86d2452e92a4a64275b128e9".to_string());
//! let signature = compute_signature(
//!     "code=a94a110d86d2452e92a4a64275b128e9&shop=some-shop.myshopify.com",
//!     "hush",
//! );
//! params.insert("hmac".to_string(), signature);
//!
//! assert!(verify_callback(&params, "hush"));
//! ```

use std::collections::{BTreeMap, HashMap};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Computes a hex-encoded HMAC-SHA256 signature for the given message.
///
/// This is the encoding Shopify uses for the `hmac` query parameter on
/// OAuth callbacks.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(message: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Computes a base64-encoded HMAC-SHA256 signature for raw bytes.
///
/// This is the encoding Shopify uses for the `X-Shopify-Hmac-SHA256`
/// webhook header. The message is raw bytes so the payload is signed
/// exactly as received, without UTF-8 interpretation.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature_base64(message: &[u8], secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message);
    BASE64.encode(mac.finalize().into_bytes())
}

/// Compares two strings in constant time.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Verifies the `hmac` parameter of an OAuth callback.
///
/// The signed message is every parameter except `hmac` and `signature`,
/// rendered as `key=value`, sorted, and joined with `&`. Returns `false`
/// when the `hmac` parameter is absent or does not match.
#[must_use]
pub fn verify_callback(params: &HashMap<String, String>, secret: &str) -> bool {
    let Some(received) = params.get("hmac") else {
        return false;
    };

    let computed = compute_signature(&signable_message(params), secret);
    constant_time_compare(&computed, received)
}

/// Verifies a webhook body against its `X-Shopify-Hmac-SHA256` header.
#[must_use]
pub fn verify_webhook(body: &[u8], signature: &str, secret: &str) -> bool {
    let computed = compute_signature_base64(body, secret);
    constant_time_compare(&computed, signature)
}

// Sorted key=value pairs joined with '&', signature parameters excluded.
fn signable_message(params: &HashMap<String, String>) -> String {
    let sorted: BTreeMap<&str, &str> = params
        .iter()
        .filter(|(key, _)| key.as_str() != "hmac" && key.as_str() != "signature")
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

// Internal hex encoding since no hex crate is in the dependency stack.
mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }
}
