//! Gift card resource and service.
//!
//! Gift cards hold store credit. There is no delete endpoint; a card is
//! taken out of circulation with [`GiftCardService::disable`], which
//! cannot be undone. The code itself is write-only: after creation only
//! `last_characters` is readable.
//!
//! # Example
//!
//! ```rust,ignore
//! let gift_cards = client.gift_cards();
//!
//! let card = gift_cards
//!     .create(&GiftCard {
//!         initial_value: Some("100.00".to_string()),
//!         note: Some("Employee reward".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Find cards by code fragment or note content
//! let results = gift_cards
//!     .search(Some(GiftCardSearchOptions {
//!         query: Some("Employee".to_string()),
//!         ..Default::default()
//!     }))
//!     .await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::http::{Client, HttpMethod};
use crate::rest::endpoint;
use crate::rest::errors::ResourceError;
use crate::rest::resource::{
    get_count, get_edge, get_node, post_action, query_of, write_node, Resource,
};

/// A gift card holding store credit.
///
/// The balance, the disabling timestamp, and the linkage fields are
/// server-managed. `code` is accepted on creation only; responses carry
/// just its last characters.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GiftCard {
    /// The unique identifier of the gift card. Server-assigned.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The current balance. Server-managed.
    #[serde(skip_serializing)]
    pub balance: Option<String>,

    /// When the gift card was disabled; `None` while it is active.
    #[serde(skip_serializing)]
    pub disabled_at: Option<DateTime<Utc>>,

    /// The ID of the line item that created this gift card, if any.
    #[serde(skip_serializing)]
    pub line_item_id: Option<u64>,

    /// The ID of the API client that created this gift card.
    #[serde(skip_serializing)]
    pub api_client_id: Option<u64>,

    /// The ID of the staff user who created this gift card.
    #[serde(skip_serializing)]
    pub user_id: Option<u64>,

    /// The last characters of the code, the only readable part of it.
    #[serde(skip_serializing)]
    pub last_characters: Option<String>,

    /// The ID of the order that created this gift card, if any.
    #[serde(skip_serializing)]
    pub order_id: Option<u64>,

    /// When the gift card was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the gift card was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The gift card code. Write-only; supplied on creation or
    /// auto-generated by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The initial value. Required for creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,

    /// The currency code (e.g., "USD").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The customer this gift card is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    /// An internal note. Updatable after creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// When the gift card expires. Updatable after creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<NaiveDate>,

    /// Template suffix used when rendering the gift card page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
}

impl GiftCard {
    /// Returns whether the gift card is still usable.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.disabled_at.is_none()
    }

    /// Returns whether the gift card has been disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled_at.is_some()
    }
}

impl Resource for GiftCard {
    type Id = u64;
    const NAME: &'static str = "gift_card";
    const PLURAL: &'static str = "gift_cards";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Options for fetching a single gift card.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GiftCardGetOptions {
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Options for listing gift cards.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GiftCardListOptions {
    /// Maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only gift cards after the specified ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Filter by status: `enabled` or `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Options for counting gift cards.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GiftCardCountOptions {
    /// Filter by status: `enabled` or `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Options for searching gift cards.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GiftCardSearchOptions {
    /// The search query, matched against code suffix and note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Field and direction to order results by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Service for the gift card endpoint family.
#[derive(Debug, Clone, Copy)]
pub struct GiftCardService<'a> {
    client: &'a Client,
}

impl<'a> GiftCardService<'a> {
    /// Creates a service over the given client.
    #[must_use]
    pub const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists gift cards matching the given options.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport or decode failure.
    pub async fn all(
        &self,
        options: Option<GiftCardListOptions>,
    ) -> Result<Vec<GiftCard>, ResourceError> {
        let path = endpoint::collection(GiftCard::PLURAL);
        get_edge(self.client, &path, query_of(options)?).await
    }

    /// Counts gift cards matching the given options.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport or decode failure.
    pub async fn count(
        &self,
        options: Option<GiftCardCountOptions>,
    ) -> Result<u64, ResourceError> {
        let path = endpoint::count(GiftCard::PLURAL);
        get_count(self.client, &path, query_of(options)?, GiftCard::NAME).await
    }

    /// Fetches a single gift card by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the gift card does not
    /// exist.
    pub async fn get(
        &self,
        id: u64,
        options: Option<GiftCardGetOptions>,
    ) -> Result<GiftCard, ResourceError> {
        let path = endpoint::member(GiftCard::PLURAL, id);
        get_node(self.client, &path, query_of(options)?, &id.to_string()).await
    }

    /// Creates a new gift card, returning the persisted value.
    ///
    /// `initial_value` is required by the server.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects
    /// the gift card.
    pub async fn create(&self, gift_card: &GiftCard) -> Result<GiftCard, ResourceError> {
        let path = endpoint::collection(GiftCard::PLURAL);
        write_node(self.client, HttpMethod::Post, &path, gift_card, None).await
    }

    /// Updates an existing gift card, returning the new value.
    ///
    /// Only the note, expiry, and template fields are updatable.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the gift card has no ID.
    pub async fn update(&self, gift_card: &GiftCard) -> Result<GiftCard, ResourceError> {
        let id = gift_card.require_id("update")?;
        let path = endpoint::member(GiftCard::PLURAL, id);
        write_node(
            self.client,
            HttpMethod::Put,
            &path,
            gift_card,
            Some(&id.to_string()),
        )
        .await
    }

    /// Disables a gift card, returning the new value.
    ///
    /// A disabled gift card cannot be re-enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the gift card has no ID.
    pub async fn disable(&self, gift_card: &GiftCard) -> Result<GiftCard, ResourceError> {
        let id = gift_card.require_id("disable")?;
        let path = endpoint::action(GiftCard::PLURAL, id, "disable");
        post_action(self.client, HttpMethod::Put, &path, &id.to_string()).await
    }

    /// Searches for gift cards matching the supplied query.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport or decode failure.
    pub async fn search(
        &self,
        options: Option<GiftCardSearchOptions>,
    ) -> Result<Vec<GiftCard>, ResourceError> {
        let path = format!("{}/search", GiftCard::PLURAL);
        get_edge(self.client, &path, query_of(options)?).await
    }
}
