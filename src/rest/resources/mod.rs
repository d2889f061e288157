//! Resource services.
//!
//! One module per resource family. Each service is a thin mapping from
//! domain verbs onto endpoints: it chooses an endpoint string and an HTTP
//! method, then delegates to the crate's generic envelope operations —
//! there is no further logic.
//!
//! Services are reached through the accessors on [`Client`]:
//!
//! ```rust,ignore
//! let count = client.comments().count(None).await?;
//! let card = client.gift_cards().get(123, None).await?;
//! ```

mod comment;
mod discount;
mod gift_card;
mod product_variant;
mod smart_collection;
mod user;

pub use comment::{
    Comment, CommentCountOptions, CommentGetOptions, CommentListOptions, CommentService,
};
pub use discount::{Discount, DiscountListOptions, DiscountService};
pub use gift_card::{
    GiftCard, GiftCardCountOptions, GiftCardGetOptions, GiftCardListOptions,
    GiftCardSearchOptions, GiftCardService,
};
pub use product_variant::{
    ProductVariant, ProductVariantGetOptions, ProductVariantListOptions, ProductVariantService,
};
pub use smart_collection::{
    CollectionRule, SmartCollection, SmartCollectionGetOptions, SmartCollectionListOptions,
    SmartCollectionOrderOptions, SmartCollectionService,
};
pub use user::{User, UserService};

use crate::http::Client;

impl Client {
    /// Returns the comment service.
    #[must_use]
    pub const fn comments(&self) -> CommentService<'_> {
        CommentService::new(self)
    }

    /// Returns the discount service.
    #[must_use]
    pub const fn discounts(&self) -> DiscountService<'_> {
        DiscountService::new(self)
    }

    /// Returns the gift card service.
    #[must_use]
    pub const fn gift_cards(&self) -> GiftCardService<'_> {
        GiftCardService::new(self)
    }

    /// Returns the product variant service.
    #[must_use]
    pub const fn product_variants(&self) -> ProductVariantService<'_> {
        ProductVariantService::new(self)
    }

    /// Returns the smart collection service.
    #[must_use]
    pub const fn smart_collections(&self) -> SmartCollectionService<'_> {
        SmartCollectionService::new(self)
    }

    /// Returns the user service.
    #[must_use]
    pub const fn users(&self) -> UserService<'_> {
        UserService::new(self)
    }
}
