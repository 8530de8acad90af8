//! Transaction operation integration tests.

mod common;

use billforge_core::{
    Amount, CurrencyCode, Money, PriceId, ProductId, TaxCategory, TransactionCreate,
    TransactionId, TransactionItemInput, TransactionPreviewRequest, TransactionPriceInput,
    TransactionPriceWithProductInput, TransactionProductInput,
};
use billforge_client::TransactionInclude;
use common::{envelope, transaction_json, TestHarness};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn usd(amount: &str) -> Money {
    Money::new(Amount::new(amount).unwrap(), CurrencyCode::Usd)
}

#[tokio::test]
async fn create_transaction_serializes_all_item_shapes() {
    let harness = TestHarness::new().await;

    let expected_body = json!({
        "items": [
            {
                "price_id": "pri_01gsz8x8sawmvhz1pv30nge1ke",
                "quantity": 2
            },
            {
                "price": {
                    "description": "One-off setup fee",
                    "product_id": "pro_01gsz4t5hdjse780zja8vvr7jg",
                    "unit_price": {"amount": "50000", "currency_code": "USD"}
                },
                "quantity": 1
            },
            {
                "price": {
                    "description": "Custom consulting",
                    "product": {
                        "name": "Consulting",
                        "tax_category": "professional-services"
                    },
                    "unit_price": {"amount": "250000", "currency_code": "USD"}
                },
                "quantity": 1
            }
        ],
        "currency_code": "USD"
    });

    Mock::given(method("POST"))
        .and(path("/transactions"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(transaction_json(
            "txn_01h04vsc0qhwtsbsxh3422wjjw",
            "ready",
        ))))
        .mount(&harness.server)
        .await;

    let mut create = TransactionCreate::new(vec![
        TransactionItemInput::CatalogPrice {
            price_id: PriceId::new("pri_01gsz8x8sawmvhz1pv30nge1ke").unwrap(),
            quantity: 2,
        },
        TransactionItemInput::NonCatalogPrice {
            price: TransactionPriceInput {
                description: "One-off setup fee".to_string(),
                product_id: ProductId::new("pro_01gsz4t5hdjse780zja8vvr7jg").unwrap(),
                unit_price: usd("50000"),
                billing_cycle: None,
                trial_period: None,
                tax_mode: None,
            },
            quantity: 1,
        },
        TransactionItemInput::NonCatalogPriceAndProduct {
            price: TransactionPriceWithProductInput {
                description: "Custom consulting".to_string(),
                product: TransactionProductInput {
                    name: "Consulting".to_string(),
                    tax_category: TaxCategory::ProfessionalServices,
                    description: None,
                    image_url: None,
                },
                unit_price: usd("250000"),
                billing_cycle: None,
                trial_period: None,
                tax_mode: None,
            },
            quantity: 1,
        },
    ]);
    create.currency_code = Some(CurrencyCode::Usd);

    let transaction = harness.client.create_transaction(&create).await.unwrap();
    assert_eq!(transaction.id.as_str(), "txn_01h04vsc0qhwtsbsxh3422wjjw");
}

#[tokio::test]
async fn get_transaction_passes_include_csv() {
    let harness = TestHarness::new().await;
    let id = TransactionId::new("txn_01h04vsc0qhwtsbsxh3422wjjw").unwrap();

    Mock::given(method("GET"))
        .and(path("/transactions/txn_01h04vsc0qhwtsbsxh3422wjjw"))
        .and(query_param("include", "customer,discount"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(transaction_json(
            "txn_01h04vsc0qhwtsbsxh3422wjjw",
            "completed",
        ))))
        .mount(&harness.server)
        .await;

    let transaction = harness
        .client
        .get_transaction(
            &id,
            &[TransactionInclude::Customer, TransactionInclude::Discount],
        )
        .await
        .unwrap();
    assert_eq!(transaction.customer_id.unwrap().as_str(), "ctm_01h04vsc0qhwtsbsxh3422wjjw");
}

#[tokio::test]
async fn preview_transaction_decodes_details() {
    let harness = TestHarness::new().await;

    let preview_body = json!({
        "currency_code": "USD",
        "customer_id": null,
        "discount_id": null,
        "details": {
            "tax_rates_used": [{"tax_rate": "0.2", "totals": null}],
            "totals": {
                "subtotal": "2000",
                "discount": "0",
                "tax": "400",
                "total": "2400",
                "credit": null,
                "balance": null,
                "grand_total": "2400",
                "currency_code": "USD"
            },
            "line_items": []
        }
    });

    Mock::given(method("POST"))
        .and(path("/transactions/preview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(preview_body)))
        .mount(&harness.server)
        .await;

    let request = TransactionPreviewRequest::new(vec![TransactionItemInput::CatalogPrice {
        price_id: PriceId::new("pri_01gsz8x8sawmvhz1pv30nge1ke").unwrap(),
        quantity: 2,
    }]);

    let preview = harness.client.preview_transaction(&request).await.unwrap();
    assert_eq!(preview.details.totals.total.as_str(), "2400");
    assert_eq!(preview.details.tax_rates_used.len(), 1);
}

#[tokio::test]
async fn invoice_returns_download_url() {
    let harness = TestHarness::new().await;
    let id = TransactionId::new("txn_01h04vsc0qhwtsbsxh3422wjjw").unwrap();

    Mock::given(method("GET"))
        .and(path(
            "/transactions/txn_01h04vsc0qhwtsbsxh3422wjjw/invoice",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            json!({"url": "https://files.billforge.com/invoices/inv_123.pdf?sig=abc"}),
        )))
        .mount(&harness.server)
        .await;

    let invoice = harness.client.get_transaction_invoice(&id).await.unwrap();
    assert!(invoice.url.contains("/invoices/"));
}
