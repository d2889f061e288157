//! REST resource infrastructure.
//!
//! This module holds the generic typed-endpoint-binding core and the
//! resource services built on it:
//!
//! - **[`Resource`] trait**: binds a domain type to its envelope keys
//! - **Envelope operations**: node, edge, count, write, action, and
//!   delete round trips with uniform error mapping
//! - **[`endpoint`] builders**: the `/admin/<resource>[/<id>][/<action>]`
//!   path scheme
//! - **[`ResourceError`]**: semantic errors (not-found, missing id,
//!   validation, payload, transport)
//! - **[`resources`]**: one service per resource family
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{Client, Config};
//! use shopify_rest::rest::resources::Comment;
//!
//! let client = Client::new(&config);
//! let comments = client.comments();
//!
//! // List, inspect, moderate
//! let pending = comments.all(None).await?;
//! if let Some(first) = pending.first() {
//!     let approved = comments.approve(first).await?;
//! }
//! ```

pub mod endpoint;
mod errors;
mod resource;

pub mod resources;

pub use errors::ResourceError;
pub use resource::Resource;
