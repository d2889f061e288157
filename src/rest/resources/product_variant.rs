//! Product variant resource and service.
//!
//! Variants are a nested resource: listing, counting, creating, and
//! deleting go through `products/{product_id}/variants...`, while a
//! single variant is fetched and updated through the standalone
//! `variants/{id}` path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::http::{Client, HttpMethod};
use crate::rest::endpoint;
use crate::rest::errors::ResourceError;
use crate::rest::resource::{
    delete_node, get_count, get_edge, get_node, query_of, write_node, Resource,
};

/// A purchasable variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductVariant {
    /// The unique identifier of the variant. Server-assigned.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The ID of the product this variant belongs to. Server-assigned.
    #[serde(skip_serializing)]
    pub product_id: Option<u64>,

    /// The title of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The price of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The original price before a sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<String>,

    /// The SKU of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The 1-based position of the variant in the product's list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    /// The weight in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<u64>,

    /// Whether out-of-stock purchases are allowed: `deny` or `continue`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_policy: Option<String>,

    /// The service tracking inventory for this variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_management: Option<String>,

    /// The fulfillment service handling this variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,

    /// The value of the product's first option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,

    /// The value of the product's second option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,

    /// The value of the product's third option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,

    /// Whether the variant is charged taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,

    /// The barcode (ISBN, UPC, GTIN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// The ID of the image attached to this variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<u64>,

    /// The weight in the unit given by `weight_unit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// The unit for `weight`: g, kg, oz, lb.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,

    /// The available inventory. Server-managed.
    #[serde(skip_serializing)]
    pub inventory_quantity: Option<i64>,

    /// When the variant was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the variant was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for ProductVariant {
    type Id = u64;
    const NAME: &'static str = "variant";
    const PLURAL: &'static str = "variants";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Path segment of the parent resource.
const PARENT: &str = "products";

/// Options for fetching a single variant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductVariantGetOptions {
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Options for listing variants of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductVariantListOptions {
    /// Maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only variants after the specified ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Service for the product variant endpoint family.
#[derive(Debug, Clone, Copy)]
pub struct ProductVariantService<'a> {
    client: &'a Client,
}

impl<'a> ProductVariantService<'a> {
    /// Creates a service over the given client.
    #[must_use]
    pub const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists the variants of a product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport or decode failure.
    pub async fn all(
        &self,
        product_id: u64,
        options: Option<ProductVariantListOptions>,
    ) -> Result<Vec<ProductVariant>, ResourceError> {
        let path = endpoint::nested_collection(PARENT, product_id, ProductVariant::PLURAL);
        get_edge(self.client, &path, query_of(options)?).await
    }

    /// Counts the variants of a product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport or decode failure.
    pub async fn count(&self, product_id: u64) -> Result<u64, ResourceError> {
        let path = endpoint::nested_count(PARENT, product_id, ProductVariant::PLURAL);
        get_count(self.client, &path, None, ProductVariant::NAME).await
    }

    /// Fetches a single variant by its own ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the variant does not exist.
    pub async fn get(
        &self,
        id: u64,
        options: Option<ProductVariantGetOptions>,
    ) -> Result<ProductVariant, ResourceError> {
        let path = endpoint::member(ProductVariant::PLURAL, id);
        get_node(self.client, &path, query_of(options)?, &id.to_string()).await
    }

    /// Creates a new variant under a product, returning the persisted
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects
    /// the variant.
    pub async fn create(
        &self,
        product_id: u64,
        variant: &ProductVariant,
    ) -> Result<ProductVariant, ResourceError> {
        let path = endpoint::nested_collection(PARENT, product_id, ProductVariant::PLURAL);
        write_node(self.client, HttpMethod::Post, &path, variant, None).await
    }

    /// Updates an existing variant, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the variant has no ID.
    pub async fn update(&self, variant: &ProductVariant) -> Result<ProductVariant, ResourceError> {
        let id = variant.require_id("update")?;
        let path = endpoint::member(ProductVariant::PLURAL, id);
        write_node(
            self.client,
            HttpMethod::Put,
            &path,
            variant,
            Some(&id.to_string()),
        )
        .await
    }

    /// Deletes a variant from a product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the variant has no ID and
    /// [`ResourceError::NotFound`] if it does not exist on the server.
    pub async fn delete(
        &self,
        product_id: u64,
        variant: &ProductVariant,
    ) -> Result<(), ResourceError> {
        let id = variant.require_id("delete")?;
        let path = endpoint::nested_member(PARENT, product_id, ProductVariant::PLURAL, id);
        delete_node(self.client, &path, ProductVariant::NAME, &id.to_string()).await
    }
}
