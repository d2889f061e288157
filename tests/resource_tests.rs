//! End-to-end tests for the resource services.
//!
//! Each test mounts the exact endpoint a service must hit on a wiremock
//! server and verifies the request shape and the decoded result,
//! including the error-mapping contract (404 → not-found, 422 →
//! validation, missing id → no request at all).

use serde_json::json;
use shopify_rest::rest::resources::{
    Comment, CommentCountOptions, CommentListOptions, Discount, GiftCard, GiftCardSearchOptions,
    ProductVariant, SmartCollection, SmartCollectionOrderOptions,
};
use shopify_rest::rest::ResourceError;
use shopify_rest::{ApiKey, ApiSecret, Client, Config, ShopDomain};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> Config {
    Config::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .api_key(ApiKey::new("test-key").unwrap())
        .api_secret(ApiSecret::new("test-secret").unwrap())
        .access_token("test-token")
        .base_url(base_url)
        .build()
        .unwrap()
}

// ============================================================================
// Gift cards
// ============================================================================

#[tokio::test]
async fn test_gift_card_get_decodes_id_and_balance() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/gift_cards/123.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gift_card": {"id": 123, "balance": "45.00"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let gift_card = client.gift_cards().get(123, None).await.unwrap();

    assert_eq!(gift_card.id, Some(123));
    assert_eq!(gift_card.balance.as_deref(), Some("45.00"));
}

#[tokio::test]
async fn test_gift_card_disable_is_put_to_action_path() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/admin/gift_cards/123/disable.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gift_card": {"id": 123, "disabled_at": "2017-02-01T19:56:00Z"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let card = GiftCard {
        id: Some(123),
        ..Default::default()
    };

    let disabled = client.gift_cards().disable(&card).await.unwrap();

    assert!(disabled.is_disabled());
    // The caller's object is untouched
    assert!(card.is_enabled());
}

#[tokio::test]
async fn test_gift_card_search_sends_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/gift_cards/search.json"))
        .and(query_param("query", "Birthday"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gift_cards": [{"id": 1}, {"id": 2}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let results = client
        .gift_cards()
        .search(Some(GiftCardSearchOptions {
            query: Some("Birthday".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, Some(1));
}

#[tokio::test]
async fn test_gift_card_count_unwraps_count_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/gift_cards/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let count = client.gift_cards().count(None).await.unwrap();

    assert_eq!(count, 3);
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn test_comment_create_posts_envelope_and_decodes_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/comments.json"))
        .and(body_json(json!({"comment": {"body": "hi"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "comment": {"id": 9, "body": "hi", "status": "pending"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let draft = Comment {
        body: Some("hi".to_string()),
        ..Default::default()
    };

    let created = client.comments().create(&draft).await.unwrap();

    assert_eq!(created.id, Some(9));
    assert_eq!(created.status.as_deref(), Some("pending"));
    // The draft is untouched; only the returned value is persisted
    assert_eq!(draft.id, None);
}

#[tokio::test]
async fn test_comment_moderation_actions_hit_action_paths() {
    let server = MockServer::start().await;

    for verb in ["spam", "not_spam", "approve", "remove", "restore"] {
        Mock::given(method("POST"))
            .and(path(format!("/admin/comments/653537639/{verb}.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "comment": {"id": 653_537_639_u64, "status": "published"}
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = Client::new(&test_config(&server.uri()));
    let comment = Comment {
        id: Some(653_537_639),
        ..Default::default()
    };

    let comments = client.comments();
    comments.spam(&comment).await.unwrap();
    comments.not_spam(&comment).await.unwrap();
    comments.approve(&comment).await.unwrap();
    comments.remove(&comment).await.unwrap();
    comments.restore(&comment).await.unwrap();
}

#[tokio::test]
async fn test_comment_count_with_status_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/comments/count.json"))
        .and(query_param("status", "pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let count = client
        .comments()
        .count(Some(CommentCountOptions {
            status: Some("pending".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();

    assert_eq!(count, 7);
}

#[tokio::test]
async fn test_comment_all_preserves_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/comments.json"))
        .and(query_param("status", "published"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "comments": [
                {"id": 30, "body": "third"},
                {"id": 10, "body": "first"},
                {"id": 20, "body": "second"}
            ]
        })))
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let comments = client
        .comments()
        .all(Some(CommentListOptions {
            status: Some("published".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();

    let ids: Vec<u64> = comments.iter().filter_map(|c| c.id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[tokio::test]
async fn test_comment_update_without_id_sends_nothing() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 the mock server

    let client = Client::new(&test_config(&server.uri()));
    let comment = Comment {
        body: Some("no id".to_string()),
        ..Default::default()
    };

    let error = client.comments().update(&comment).await.unwrap_err();
    assert!(matches!(
        error,
        ResourceError::MissingId {
            resource: "comment",
            operation: "update"
        }
    ));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_comment_create_validation_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/comments.json"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": {"body": ["can't be blank"]}
        })))
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let draft = Comment::default();

    let error = client.comments().create(&draft).await.unwrap_err();

    if let ResourceError::ValidationFailed { errors, .. } = error {
        assert_eq!(errors.get("body"), Some(&vec!["can't be blank".to_string()]));
    } else {
        panic!("expected ValidationFailed, got {error:?}");
    }
}

// ============================================================================
// Discounts
// ============================================================================

#[tokio::test]
async fn test_discount_delete_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/discounts/680866.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let discount = Discount {
        id: Some(680_866),
        ..Default::default()
    };

    let error = client.discounts().delete(&discount).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::NotFound { resource: "discount", ref id } if id == "680866"
    ));
}

#[tokio::test]
async fn test_discount_enable_and_disable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/discounts/680866/enable.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "discount": {"id": 680_866_u64, "status": "enabled"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/admin/discounts/680866/disable.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "discount": {"id": 680_866_u64, "status": "disabled"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let discount = Discount {
        id: Some(680_866),
        ..Default::default()
    };

    let enabled = client.discounts().enable(&discount).await.unwrap();
    assert_eq!(enabled.status.as_deref(), Some("enabled"));

    let disabled = client.discounts().disable(&discount).await.unwrap();
    assert_eq!(disabled.status.as_deref(), Some("disabled"));
}

#[tokio::test]
async fn test_discount_get_then_delete_then_get_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/discounts/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "discount": {"id": 1, "code": "TENOFF"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/admin/discounts/1.json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));

    let discount = client.discounts().get(1).await.unwrap();
    assert_eq!(discount.code.as_deref(), Some("TENOFF"));

    client.discounts().delete(&discount).await.unwrap();

    // The resource is gone now
    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/admin/discounts/1.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;

    let error = client.discounts().get(1).await.unwrap_err();
    assert!(matches!(error, ResourceError::NotFound { .. }));
}

// ============================================================================
// Product variants (nested resource)
// ============================================================================

#[tokio::test]
async fn test_variant_list_and_count_use_nested_paths() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/products/632910392/variants.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "variants": [
                {"id": 808_950_810_u64, "product_id": 632_910_392_u64, "title": "Pink"},
                {"id": 808_950_811_u64, "product_id": 632_910_392_u64, "title": "Red"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin/products/632910392/variants/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let variants = client.product_variants();

    let listed = variants.all(632_910_392, None).await.unwrap();
    let count = variants.count(632_910_392).await.unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(count, listed.len() as u64);
}

#[tokio::test]
async fn test_variant_create_posts_to_nested_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/products/632910392/variants.json"))
        .and(body_json(json!({"variant": {"option1": "Yellow", "price": "1.00"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "variant": {"id": 1, "product_id": 632_910_392_u64, "option1": "Yellow", "price": "1.00"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let draft = ProductVariant {
        option1: Some("Yellow".to_string()),
        price: Some("1.00".to_string()),
        ..Default::default()
    };

    let created = client
        .product_variants()
        .create(632_910_392, &draft)
        .await
        .unwrap();

    assert_eq!(created.id, Some(1));
    assert_eq!(created.product_id, Some(632_910_392));
}

#[tokio::test]
async fn test_variant_get_and_update_use_standalone_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/variants/808950810.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "variant": {"id": 808_950_810_u64, "price": "199.00"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/admin/variants/808950810.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "variant": {"id": 808_950_810_u64, "price": "249.00"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let variants = client.product_variants();

    let variant = variants.get(808_950_810, None).await.unwrap();
    assert_eq!(variant.price.as_deref(), Some("199.00"));

    let mut changed = variant.clone();
    changed.price = Some("249.00".to_string());
    let updated = variants.update(&changed).await.unwrap();
    assert_eq!(updated.price.as_deref(), Some("249.00"));
}

#[tokio::test]
async fn test_variant_delete_uses_nested_path() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/products/632910392/variants/808950810.json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let variant = ProductVariant {
        id: Some(808_950_810),
        ..Default::default()
    };

    client
        .product_variants()
        .delete(632_910_392, &variant)
        .await
        .unwrap();
}

// ============================================================================
// Smart collections
// ============================================================================

#[tokio::test]
async fn test_smart_collection_crud_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/smart_collections.json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "smart_collection": {"id": 482_865_238_u64, "title": "Smart iPods"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/admin/smart_collections/482865238.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "smart_collection": {"id": 482_865_238_u64, "title": "Smarter iPods"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let collections = client.smart_collections();

    let created = collections
        .create(&SmartCollection {
            title: Some("Smart iPods".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, Some(482_865_238));

    let mut renamed = created.clone();
    renamed.title = Some("Smarter iPods".to_string());
    let updated = collections.update(&renamed).await.unwrap();
    assert_eq!(updated.title.as_deref(), Some("Smarter iPods"));
}

#[tokio::test]
async fn test_smart_collection_order_puts_payload() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/admin/smart_collections/482865238/order.json"))
        .and(body_json(json!({
            "products": [389_013_215_u64, 921_728_736_u64],
            "sort_order": "manual"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    client
        .smart_collections()
        .order(
            482_865_238,
            &SmartCollectionOrderOptions {
                products: Some(vec![389_013_215, 921_728_736]),
                sort_order: Some("manual".to_string()),
            },
        )
        .await
        .unwrap();
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_user_all_and_current() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/users.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{"id": 799_407_056_u64, "first_name": "Steve"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin/users/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"id": 799_407_056_u64, "account_owner": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let users = client.users();

    let all = users.all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].first_name.as_deref(), Some("Steve"));

    let current = users.current().await.unwrap();
    assert_eq!(current.account_owner, Some(true));
}

#[tokio::test]
async fn test_user_get_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/users/42.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let error = client.users().get(42).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::NotFound { resource: "user", ref id } if id == "42"
    ));
}

// ============================================================================
// Idempotent update (export → resubmit)
// ============================================================================

#[tokio::test]
async fn test_update_with_unchanged_export_sends_identical_body() {
    let server = MockServer::start().await;

    let response_body = json!({
        "comment": {
            "id": 9,
            "body": "hi",
            "author": "Soleone",
            "status": "published"
        }
    });

    // The exported body carries only writable fields
    Mock::given(method("PUT"))
        .and(path("/admin/comments/9.json"))
        .and(body_json(json!({"comment": {"body": "hi", "author": "Soleone"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body.clone()))
        .expect(2)
        .mount(&server)
        .await;

    let client = Client::new(&test_config(&server.uri()));
    let comments = client.comments();

    let comment: Comment = serde_json::from_value(response_body["comment"].clone()).unwrap();

    let first = comments.update(&comment).await.unwrap();
    let second = comments.update(&first).await.unwrap();

    assert_eq!(first, second);
}
