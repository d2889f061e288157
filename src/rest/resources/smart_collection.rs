//! Smart collection resource and service.
//!
//! Smart collections gather products by rule rather than by hand. Beyond
//! CRUD, the service can set the ordering of products within a collection
//! through `smart_collections/{id}/order.json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::http::{Client, HttpMethod};
use crate::rest::endpoint;
use crate::rest::errors::ResourceError;
use crate::rest::resource::{
    delete_node, get_count, get_edge, get_node, query_of, write_node, Resource,
};

/// A rule deciding which products belong to a smart collection.
///
/// Example: `{"column": "vendor", "relation": "equals", "condition": "Apple"}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CollectionRule {
    /// The product property the rule tests.
    pub column: String,
    /// The comparison: equals, contains, starts_with, greater_than, ...
    pub relation: String,
    /// The value the property is compared against.
    pub condition: String,
}

/// A collection of products matched by rules.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SmartCollection {
    /// The unique identifier of the collection. Server-assigned.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The title of the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The description of the collection in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The URL handle of the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// The rules selecting products into the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<CollectionRule>>,

    /// Whether products need to match any rule rather than all rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disjunctive: Option<bool>,

    /// The order in which products appear: best-selling, alpha-asc, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,

    /// Template suffix used when rendering the collection page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// Whether the collection is visible to all sales channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    /// When the collection was published.
    #[serde(skip_serializing)]
    pub published_at: Option<DateTime<Utc>>,

    /// When the collection was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for SmartCollection {
    type Id = u64;
    const NAME: &'static str = "smart_collection";
    const PLURAL: &'static str = "smart_collections";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Options for fetching a single smart collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SmartCollectionGetOptions {
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Options for listing smart collections.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SmartCollectionListOptions {
    /// Maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only collections after the specified ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Filter by collection title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Filter to collections containing the given product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Filter by handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Filter by published status: published, unpublished, any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Ordering payload for [`SmartCollectionService::order`].
///
/// Setting `products` pins an explicit manual sequence; `sort_order`
/// switches the collection's ordering rule.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SmartCollectionOrderOptions {
    /// Product IDs in the desired manual order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<u64>>,

    /// The ordering rule to apply: alpha-asc, best-selling, manual, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

/// Service for the smart collection endpoint family.
#[derive(Debug, Clone, Copy)]
pub struct SmartCollectionService<'a> {
    client: &'a Client,
}

impl<'a> SmartCollectionService<'a> {
    /// Creates a service over the given client.
    #[must_use]
    pub const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists smart collections matching the given options.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport or decode failure.
    pub async fn all(
        &self,
        options: Option<SmartCollectionListOptions>,
    ) -> Result<Vec<SmartCollection>, ResourceError> {
        let path = endpoint::collection(SmartCollection::PLURAL);
        get_edge(self.client, &path, query_of(options)?).await
    }

    /// Counts smart collections.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport or decode failure.
    pub async fn count(&self) -> Result<u64, ResourceError> {
        let path = endpoint::count(SmartCollection::PLURAL);
        get_count(self.client, &path, None, SmartCollection::NAME).await
    }

    /// Fetches a single smart collection by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the collection does not
    /// exist.
    pub async fn get(
        &self,
        id: u64,
        options: Option<SmartCollectionGetOptions>,
    ) -> Result<SmartCollection, ResourceError> {
        let path = endpoint::member(SmartCollection::PLURAL, id);
        get_node(self.client, &path, query_of(options)?, &id.to_string()).await
    }

    /// Creates a new smart collection, returning the persisted value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects
    /// the collection.
    pub async fn create(
        &self,
        collection: &SmartCollection,
    ) -> Result<SmartCollection, ResourceError> {
        let path = endpoint::collection(SmartCollection::PLURAL);
        write_node(self.client, HttpMethod::Post, &path, collection, None).await
    }

    /// Updates an existing smart collection, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the collection has no ID.
    pub async fn update(
        &self,
        collection: &SmartCollection,
    ) -> Result<SmartCollection, ResourceError> {
        let id = collection.require_id("update")?;
        let path = endpoint::member(SmartCollection::PLURAL, id);
        write_node(
            self.client,
            HttpMethod::Put,
            &path,
            collection,
            Some(&id.to_string()),
        )
        .await
    }

    /// Deletes a smart collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the collection has no ID
    /// and [`ResourceError::NotFound`] if it does not exist on the server.
    pub async fn delete(&self, collection: &SmartCollection) -> Result<(), ResourceError> {
        let id = collection.require_id("delete")?;
        let path = endpoint::member(SmartCollection::PLURAL, id);
        delete_node(self.client, &path, SmartCollection::NAME, &id.to_string()).await
    }

    /// Sets the ordering of products within a smart collection.
    ///
    /// Sends a PUT to `smart_collections/{id}/order.json` with the
    /// ordering payload. The server answers with an empty body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the collection does not
    /// exist and [`ResourceError::Payload`] if the payload fails to
    /// serialize.
    pub async fn order(
        &self,
        id: u64,
        options: &SmartCollectionOrderOptions,
    ) -> Result<(), ResourceError> {
        let path = endpoint::action(SmartCollection::PLURAL, id, "order");

        let body = serde_json::to_value(options).map_err(|e| ResourceError::Payload {
            key: "order".to_string(),
            detail: format!("failed to serialize ordering payload: {e}"),
        })?;

        let response = self.client.put(&path, body, None).await?;
        if !response.is_ok() {
            return Err(ResourceError::from_response(
                SmartCollection::NAME,
                Some(&id.to_string()),
                &response,
            ));
        }
        Ok(())
    }
}
