//! Product operation integration tests.

mod common;

use billforge_core::{EntityStatus, ProductCreate, ProductId, ProductUpdate, TaxCategory};
use billforge_client::ProductListParams;
use common::{envelope, page, product_json, TestHarness};
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn list_products_decodes_page() {
    let harness = TestHarness::new().await;

    let body = page(
        vec![
            product_json("pro_01gsz4t5hdjse780zja8vvr7jg", "Team workspace"),
            product_json("pro_01h1vjes1y163xfj1rh1tkfb65", "Analytics addon"),
            product_json("pro_01gsz4s0w61y0pp88528f1wvvb", "Priority support"),
        ],
        5,
        false,
    );

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("per_page", "5"))
        .and(query_param_is_missing("after"))
        .and(query_param_is_missing("status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&harness.server)
        .await;

    let result = harness
        .client
        .list_products(&ProductListParams {
            per_page: Some(5),
            ..ProductListParams::default()
        })
        .await
        .unwrap();

    assert_eq!(result.data.len(), 3);
    assert_eq!(result.data[0].name, "Team workspace");
    assert_eq!(result.meta.pagination.per_page, 5);
    assert!(!result.meta.pagination.has_more);
}

#[tokio::test]
async fn list_products_sends_csv_filters() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param(
            "id",
            "pro_01gsz4t5hdjse780zja8vvr7jg,pro_01h1vjes1y163xfj1rh1tkfb65",
        ))
        .and(query_param("status", "active,archived"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![], 50, false)))
        .mount(&harness.server)
        .await;

    let result = harness
        .client
        .list_products(&ProductListParams {
            id: vec![
                ProductId::new("pro_01gsz4t5hdjse780zja8vvr7jg").unwrap(),
                ProductId::new("pro_01h1vjes1y163xfj1rh1tkfb65").unwrap(),
            ],
            status: vec![EntityStatus::Active, EntityStatus::Archived],
            ..ProductListParams::default()
        })
        .await
        .unwrap();

    assert!(result.data.is_empty());
}

#[tokio::test]
async fn list_products_follows_cursor() {
    let harness = TestHarness::new().await;

    let first = page(
        vec![product_json("pro_01gsz4t5hdjse780zja8vvr7jg", "Team workspace")],
        1,
        true,
    );

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param_is_missing("after"))
        .respond_with(ResponseTemplate::new(200).set_body_json(first))
        .mount(&harness.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("after", "pro_01gsz4t5hdjse780zja8vvr7jg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![], 1, false)))
        .mount(&harness.server)
        .await;

    let first_page = harness
        .client
        .list_products(&ProductListParams::default())
        .await
        .unwrap();
    assert!(first_page.meta.pagination.has_more);

    let after = first_page.meta.pagination.next_after().unwrap().to_string();
    let second_page = harness
        .client
        .list_products(&ProductListParams {
            after: Some(after),
            ..ProductListParams::default()
        })
        .await
        .unwrap();
    assert!(!second_page.meta.pagination.has_more);
}

// ============================================================================
// Create / Get / Update
// ============================================================================

#[tokio::test]
async fn create_product_posts_exact_body() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/products"))
        .and(body_json(serde_json::json!({
            "name": "Team workspace",
            "tax_category": "saas"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(product_json(
            "pro_01gsz4t5hdjse780zja8vvr7jg",
            "Team workspace",
        ))))
        .mount(&harness.server)
        .await;

    let product = harness
        .client
        .create_product(&ProductCreate::new("Team workspace", TaxCategory::Saas))
        .await
        .unwrap();

    assert_eq!(product.id.as_str(), "pro_01gsz4t5hdjse780zja8vvr7jg");
}

#[tokio::test]
async fn get_product_interpolates_path() {
    let harness = TestHarness::new().await;
    let id = ProductId::new("pro_01gsz4t5hdjse780zja8vvr7jg").unwrap();

    Mock::given(method("GET"))
        .and(path("/products/pro_01gsz4t5hdjse780zja8vvr7jg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(product_json(
            "pro_01gsz4t5hdjse780zja8vvr7jg",
            "Team workspace",
        ))))
        .mount(&harness.server)
        .await;

    let product = harness.client.get_product(&id).await.unwrap();
    assert_eq!(product.name, "Team workspace");
}

#[tokio::test]
async fn update_product_patches_only_present_fields() {
    let harness = TestHarness::new().await;
    let id = ProductId::new("pro_01gsz4t5hdjse780zja8vvr7jg").unwrap();

    Mock::given(method("PATCH"))
        .and(path("/products/pro_01gsz4t5hdjse780zja8vvr7jg"))
        .and(body_json(serde_json::json!({"status": "archived"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(product_json(
            "pro_01gsz4t5hdjse780zja8vvr7jg",
            "Team workspace",
        ))))
        .mount(&harness.server)
        .await;

    let update = ProductUpdate {
        status: Some(EntityStatus::Archived),
        ..ProductUpdate::default()
    };
    harness.client.update_product(&id, &update).await.unwrap();
}
