//! Discount resource and service.
//!
//! Discounts are created, deleted, and toggled; there is no update
//! endpoint. `enable` and `disable` POST to `discounts/{id}/<action>.json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::http::{Client, HttpMethod};
use crate::rest::endpoint;
use crate::rest::errors::ResourceError;
use crate::rest::resource::{
    delete_node, get_edge, get_node, post_action, query_of, write_node, Resource,
};

/// A discount code applied at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Discount {
    /// The unique identifier of the discount. Server-assigned.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The discount code entered at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The discount type: `fixed_amount`, `percentage`, or `shipping`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,

    /// The value taken off the order (amount or percentage).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Minimum order amount required before the code applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_order_amount: Option<String>,

    /// Maximum number of times the code may be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u64>,

    /// Whether the discount applies only once per customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_once: Option<bool>,

    /// The ID of the resource the discount is scoped to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to_id: Option<u64>,

    /// The resource kind the discount is scoped to (e.g., `product`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to_resource: Option<String>,

    /// When the discount becomes usable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,

    /// When the discount stops being usable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,

    /// The status: `enabled` or `disabled`. Server-managed.
    #[serde(skip_serializing)]
    pub status: Option<String>,

    /// How many times the code has been used. Server-managed.
    #[serde(skip_serializing)]
    pub times_used: Option<u64>,
}

impl Resource for Discount {
    type Id = u64;
    const NAME: &'static str = "discount";
    const PLURAL: &'static str = "discounts";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Options for listing discounts.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountListOptions {
    /// Maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Page of results to show.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Service for the discount endpoint family.
#[derive(Debug, Clone, Copy)]
pub struct DiscountService<'a> {
    client: &'a Client,
}

impl<'a> DiscountService<'a> {
    /// Creates a service over the given client.
    #[must_use]
    pub const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists discounts.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport or decode failure.
    pub async fn all(
        &self,
        options: Option<DiscountListOptions>,
    ) -> Result<Vec<Discount>, ResourceError> {
        let path = endpoint::collection(Discount::PLURAL);
        get_edge(self.client, &path, query_of(options)?).await
    }

    /// Fetches a single discount by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the discount does not exist.
    pub async fn get(&self, id: u64) -> Result<Discount, ResourceError> {
        let path = endpoint::member(Discount::PLURAL, id);
        get_node(self.client, &path, None, &id.to_string()).await
    }

    /// Creates a new discount, returning the persisted value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects
    /// the discount.
    pub async fn create(&self, discount: &Discount) -> Result<Discount, ResourceError> {
        let path = endpoint::collection(Discount::PLURAL);
        write_node(self.client, HttpMethod::Post, &path, discount, None).await
    }

    /// Deletes a discount.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the discount has no ID and
    /// [`ResourceError::NotFound`] if it does not exist on the server.
    pub async fn delete(&self, discount: &Discount) -> Result<(), ResourceError> {
        let id = discount.require_id("delete")?;
        let path = endpoint::member(Discount::PLURAL, id);
        delete_node(self.client, &path, Discount::NAME, &id.to_string()).await
    }

    /// Enables a discount, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the discount has no ID.
    pub async fn enable(&self, discount: &Discount) -> Result<Discount, ResourceError> {
        let id = discount.require_id("enable")?;
        let path = endpoint::action(Discount::PLURAL, id, "enable");
        post_action(self.client, HttpMethod::Post, &path, &id.to_string()).await
    }

    /// Disables a discount, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the discount has no ID.
    pub async fn disable(&self, discount: &Discount) -> Result<Discount, ResourceError> {
        let id = discount.require_id("disable")?;
        let path = endpoint::action(Discount::PLURAL, id, "disable");
        post_action(self.client, HttpMethod::Post, &path, &id.to_string()).await
    }
}
