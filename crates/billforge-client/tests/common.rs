//! Common test utilities for billforge-client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use billforge_client::{Client, Config};
use serde_json::json;
use wiremock::MockServer;

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The mock API server requests are sent to.
    pub server: MockServer,
    /// A client pointed at the mock server.
    pub client: Client,
}

impl TestHarness {
    /// Start a mock server and build a client against it.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let client = Client::new(Config::new("bf_sk_test").with_base_url(server.uri()));
        Self { server, client }
    }
}

/// A product body in the shape the API returns.
pub fn product_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "tax_category": "saas",
        "image_url": null,
        "custom_data": null,
        "status": "active",
        "created_at": "2023-02-23T13:54:59.781Z",
        "updated_at": null
    })
}

/// A price body in the shape the API returns.
pub fn price_json(id: &str, product_id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "product_id": product_id,
        "description": "Monthly seat",
        "name": "Monthly",
        "billing_cycle": {"interval": "month", "frequency": 1},
        "trial_period": null,
        "tax_mode": "account_setting",
        "unit_price": {"amount": "1000", "currency_code": "USD"},
        "unit_price_overrides": [],
        "quantity": {"minimum": 1, "maximum": 100},
        "status": "active",
        "custom_data": null,
        "created_at": "2023-02-23T13:55:32.538Z",
        "updated_at": null
    })
}

/// A subscription body in the shape the API returns.
pub fn subscription_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "status": status,
        "customer_id": "ctm_01h04vsc0qhwtsbsxh3422wjjw",
        "address_id": "add_01h04vsc0qhwtsbsxh3422wjjw",
        "business_id": null,
        "currency_code": "USD",
        "collection_mode": "automatic",
        "billing_cycle": {"interval": "month", "frequency": 1},
        "current_billing_period": {
            "starts_at": "2024-04-01T00:00:00Z",
            "ends_at": "2024-05-01T00:00:00Z"
        },
        "discount": null,
        "scheduled_change": null,
        "management_urls": null,
        "items": [],
        "custom_data": null,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": null,
        "started_at": "2024-01-01T00:00:00Z",
        "first_billed_at": "2024-01-01T00:00:00Z",
        "next_billed_at": "2024-05-01T00:00:00Z",
        "paused_at": null,
        "canceled_at": null
    })
}

/// A transaction body in the shape the API returns.
pub fn transaction_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "status": status,
        "customer_id": "ctm_01h04vsc0qhwtsbsxh3422wjjw",
        "address_id": null,
        "business_id": null,
        "currency_code": "USD",
        "origin": "api",
        "subscription_id": null,
        "invoice_id": null,
        "invoice_number": null,
        "collection_mode": "automatic",
        "discount_id": null,
        "billing_period": null,
        "items": [],
        "details": null,
        "checkout": null,
        "custom_data": null,
        "created_at": "2024-04-12T10:18:47.635Z",
        "updated_at": null,
        "billed_at": null
    })
}

/// Wrap an entity in the single-entity envelope.
pub fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({"data": data, "meta": {"request_id": "req_01h04vsca253rqt4cwt3c7qmp5"}})
}

/// Wrap entities in the paginated list envelope.
pub fn page(data: Vec<serde_json::Value>, per_page: u32, has_more: bool) -> serde_json::Value {
    let estimated_total = data.len();
    let next = has_more
        .then_some("https://api.test/products?after=pro_01gsz4t5hdjse780zja8vvr7jg");
    json!({
        "data": data,
        "meta": {
            "request_id": "req_01h04vsca253rqt4cwt3c7qmp5",
            "pagination": {
                "per_page": per_page,
                "next": next,
                "has_more": has_more,
                "estimated_total": estimated_total
            }
        }
    })
}

/// An API error body in the shape the platform returns.
pub fn error_body(error_type: &str, code: &str, detail: &str) -> serde_json::Value {
    json!({
        "error": {
            "type": error_type,
            "code": code,
            "detail": detail,
            "documentation_url": format!("https://developer.billforge.com/errors/{code}")
        },
        "meta": {"request_id": "req_01h04vsca253rqt4cwt3c7qmp5"}
    })
}
