//! Access scope handling.
//!
//! Scopes are requested as a comma-separated list when the app is
//! installed. Parsing normalizes the list: entries are trimmed,
//! de-duplicated, and `write_foo` expands to also grant `read_foo`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// A set of access scopes requested from a shop.
///
/// # Example
///
/// ```rust
/// use shopify_rest::AccessScopes;
///
/// let scopes: AccessScopes = "write_orders, read_products".parse().unwrap();
/// assert_eq!(scopes.to_string(), "read_orders,read_products,write_orders");
///
/// let required: AccessScopes = "read_orders".parse().unwrap();
/// assert!(scopes.covers(&required));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AccessScopes {
    scopes: BTreeSet<String>,
}

impl AccessScopes {
    /// Creates an empty scope set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the scope set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns `true` if this scope set contains every scope in `other`.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other.scopes.iter().all(|s| self.scopes.contains(s))
    }

    /// Returns an iterator over the scopes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    // write_foo grants read_foo as well.
    fn implied(scope: &str) -> Option<String> {
        scope
            .strip_prefix("unauthenticated_write_")
            .map(|rest| format!("unauthenticated_read_{rest}"))
            .or_else(|| {
                scope
                    .strip_prefix("write_")
                    .map(|rest| format!("read_{rest}"))
            })
    }
}

impl FromStr for AccessScopes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scopes = BTreeSet::new();

        for scope in s.split(',') {
            let scope = scope.trim();
            if scope.is_empty() {
                continue;
            }
            if scope.contains(char::is_whitespace) {
                return Err(ConfigError::InvalidScopes {
                    reason: format!("scope '{scope}' contains whitespace"),
                });
            }
            if let Some(implied) = Self::implied(scope) {
                scopes.insert(implied);
            }
            scopes.insert(scope.to_string());
        }

        Ok(Self { scopes })
    }
}

impl fmt::Display for AccessScopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for scope in &self.scopes {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(scope)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_sorts() {
        let scopes: AccessScopes = " read_orders , read_products ".parse().unwrap();
        assert_eq!(scopes.to_string(), "read_orders,read_products");
    }

    #[test]
    fn test_parse_deduplicates() {
        let scopes: AccessScopes = "read_products,read_products".parse().unwrap();
        assert_eq!(scopes.iter().count(), 1);
    }

    #[test]
    fn test_write_implies_read() {
        let scopes: AccessScopes = "write_products".parse().unwrap();
        let required: AccessScopes = "read_products".parse().unwrap();
        assert!(scopes.covers(&required));
        assert_eq!(scopes.to_string(), "read_products,write_products");
    }

    #[test]
    fn test_unauthenticated_write_implies_unauthenticated_read() {
        let scopes: AccessScopes = "unauthenticated_write_checkouts".parse().unwrap();
        assert!(scopes.iter().any(|s| s == "unauthenticated_read_checkouts"));
    }

    #[test]
    fn test_empty_entries_are_skipped() {
        let scopes: AccessScopes = "read_products,,".parse().unwrap();
        assert_eq!(scopes.iter().count(), 1);
    }

    #[test]
    fn test_interior_whitespace_is_rejected() {
        let result = "read products".parse::<AccessScopes>();
        assert!(matches!(result, Err(ConfigError::InvalidScopes { .. })));
    }

    #[test]
    fn test_covers_fails_on_missing_scope() {
        let scopes: AccessScopes = "read_products".parse().unwrap();
        let required: AccessScopes = "read_orders".parse().unwrap();
        assert!(!scopes.covers(&required));
    }

    #[test]
    fn test_empty_set_display() {
        assert_eq!(AccessScopes::new().to_string(), "");
    }
}
