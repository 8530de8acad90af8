//! Customer, address, and business integration tests.

mod common;

use billforge_core::{AddressCreate, CountryCode, CustomerCreate, CustomerId};
use billforge_client::{AddressListParams, CustomerListParams};
use common::{envelope, page, TestHarness};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn customer_json(id: &str, email: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": null,
        "email": email,
        "locale": "en",
        "marketing_consent": false,
        "status": "active",
        "custom_data": null,
        "created_at": "2023-05-08T08:55:03.071Z",
        "updated_at": null
    })
}

fn address_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "description": "Head office",
        "first_line": "4050 Jefferson Plaza, 41st Floor",
        "second_line": null,
        "city": "New York",
        "postal_code": "10021",
        "region": "NY",
        "country_code": "US",
        "status": "active",
        "custom_data": null,
        "created_at": "2023-05-08T08:55:03.071Z",
        "updated_at": null
    })
}

#[tokio::test]
async fn create_customer_decodes_defaulted_locale() {
    let harness = TestHarness::new().await;

    // The response omits locale; the declared default applies.
    let mut body = customer_json("ctm_01h04vsc0qhwtsbsxh3422wjjw", "dev@example.com");
    body.as_object_mut().unwrap().remove("locale");

    Mock::given(method("POST"))
        .and(path("/customers"))
        .and(body_json(json!({"email": "dev@example.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(body)))
        .mount(&harness.server)
        .await;

    let customer = harness
        .client
        .create_customer(&CustomerCreate::new("dev@example.com"))
        .await
        .unwrap();
    assert_eq!(customer.locale, "en");
}

#[tokio::test]
async fn list_customers_passes_search() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("search", "example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![customer_json(
                "ctm_01h04vsc0qhwtsbsxh3422wjjw",
                "dev@example.com",
            )],
            50,
            false,
        )))
        .mount(&harness.server)
        .await;

    let result = harness
        .client
        .list_customers(&CustomerListParams {
            search: Some("example.com".to_string()),
            ..CustomerListParams::default()
        })
        .await
        .unwrap();
    assert_eq!(result.data.len(), 1);
}

#[tokio::test]
async fn addresses_are_scoped_under_their_customer() {
    let harness = TestHarness::new().await;
    let customer_id = CustomerId::new("ctm_01h04vsc0qhwtsbsxh3422wjjw").unwrap();

    Mock::given(method("GET"))
        .and(path(
            "/customers/ctm_01h04vsc0qhwtsbsxh3422wjjw/addresses",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![address_json("add_01h04vsc0qhwtsbsxh3422wjjw")],
            50,
            false,
        )))
        .mount(&harness.server)
        .await;

    let result = harness
        .client
        .list_addresses(&customer_id, &AddressListParams::default())
        .await
        .unwrap();
    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].country_code.as_str(), "US");
}

#[tokio::test]
async fn create_address_posts_country_code() {
    let harness = TestHarness::new().await;
    let customer_id = CustomerId::new("ctm_01h04vsc0qhwtsbsxh3422wjjw").unwrap();

    Mock::given(method("POST"))
        .and(path(
            "/customers/ctm_01h04vsc0qhwtsbsxh3422wjjw/addresses",
        ))
        .and(body_json(json!({"country_code": "US"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(address_json(
            "add_01h04vsc0qhwtsbsxh3422wjjw",
        ))))
        .mount(&harness.server)
        .await;

    let address = harness
        .client
        .create_address(&customer_id, &AddressCreate::new(CountryCode::new("US").unwrap()))
        .await
        .unwrap();
    assert_eq!(address.id.as_str(), "add_01h04vsc0qhwtsbsxh3422wjjw");
}
