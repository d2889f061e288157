//! Endpoint path builders.
//!
//! Every Admin REST endpoint follows one uniform scheme:
//! `<resource>[/<id>][/<action>]`, with the `/admin/` prefix and `.json`
//! suffix applied by the transport. These builders produce the
//! resource-relative part, including the nested form used by variants
//! (`products/{product_id}/variants/...`).

use std::fmt::Display;

/// Path for a resource collection: `comments`.
#[must_use]
pub fn collection(plural: &str) -> String {
    plural.to_string()
}

/// Path for a single resource: `comments/123`.
#[must_use]
pub fn member(plural: &str, id: impl Display) -> String {
    format!("{plural}/{id}")
}

/// Path for a collection count: `comments/count`.
#[must_use]
pub fn count(plural: &str) -> String {
    format!("{plural}/count")
}

/// Path for a member action: `comments/123/spam`.
#[must_use]
pub fn action(plural: &str, id: impl Display, verb: &str) -> String {
    format!("{plural}/{id}/{verb}")
}

/// Path for a nested collection: `products/456/variants`.
#[must_use]
pub fn nested_collection(parent: &str, parent_id: impl Display, plural: &str) -> String {
    format!("{parent}/{parent_id}/{plural}")
}

/// Path for a nested member: `products/456/variants/123`.
#[must_use]
pub fn nested_member(
    parent: &str,
    parent_id: impl Display,
    plural: &str,
    id: impl Display,
) -> String {
    format!("{parent}/{parent_id}/{plural}/{id}")
}

/// Path for a nested collection count: `products/456/variants/count`.
#[must_use]
pub fn nested_count(parent: &str, parent_id: impl Display, plural: &str) -> String {
    format!("{parent}/{parent_id}/{plural}/count")
}
