//! Transaction entities: one-time and recurring charges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Price, Product, TaxCategory};
use crate::common::{CollectionMode, CustomData, Duration, TaxMode, TimePeriod};
use crate::ids::{
    AddressId, BusinessId, CustomerId, DiscountId, InvoiceId, PriceId, ProductId, SubscriptionId,
    TransactionId,
};
use crate::money::{Amount, CurrencyCode, Money};

/// Lifecycle state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Being assembled; totals not yet final.
    Draft,
    /// Finalized and ready for payment.
    Ready,
    /// Invoice issued, awaiting manual payment.
    Billed,
    /// Payment captured.
    Paid,
    /// Paid and fully processed.
    Completed,
    /// Abandoned before payment.
    Canceled,
    /// Automatic collection failed.
    PastDue,
}

impl TransactionStatus {
    /// Return the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Ready => "ready",
            Self::Billed => "billed",
            Self::Paid => "paid",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
            Self::PastDue => "past_due",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What caused a transaction to be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionOrigin {
    /// Created through the API.
    Api,
    /// One-time charge against a subscription.
    SubscriptionCharge,
    /// Recurring subscription billing.
    SubscriptionRecurring,
    /// Generated by a subscription change.
    SubscriptionUpdate,
    /// Created by a checkout session.
    Web,
}

/// Totals for a transaction or one of its line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Totals {
    /// Sum before discount and tax.
    pub subtotal: Amount,
    /// Discount applied.
    pub discount: Amount,
    /// Tax applied.
    pub tax: Amount,
    /// Amount after discount and tax.
    pub total: Amount,
    /// Credit applied from the customer balance.
    pub credit: Option<Amount>,
    /// Amount still due after credit.
    pub balance: Option<Amount>,
    /// Amount due including past-due balance carried forward.
    pub grand_total: Option<Amount>,
    /// Currency of the totals; matches the transaction currency.
    pub currency_code: Option<CurrencyCode>,
}

/// Tax rate applied to some portion of a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxRateUsed {
    /// Rate as a decimal string, e.g. `"0.2"` for 20%.
    pub tax_rate: String,
    /// Totals the rate applied to.
    pub totals: Option<Totals>,
}

/// A calculated line of a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineItem {
    /// Server-assigned line identifier.
    pub id: Option<String>,
    /// Price this line charges.
    pub price_id: PriceId,
    /// Units charged.
    pub quantity: u32,
    /// Tax rate applied to this line.
    pub tax_rate: Option<String>,
    /// Line totals.
    pub totals: Totals,
    /// Product the price belongs to, when expanded.
    pub product: Option<Product>,
}

/// Calculated breakdown of a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionDetails {
    /// Tax rates used across the transaction.
    #[serde(default)]
    pub tax_rates_used: Vec<TaxRateUsed>,
    /// Transaction-level totals.
    pub totals: Totals,
    /// Per-line breakdown.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// Proration applied to a subscription-originated item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Proration {
    /// Fraction of the billing period being charged, as a decimal string.
    pub rate: String,
    /// Period the proration covers.
    pub billing_period: TimePeriod,
}

/// An item on a returned transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionItem {
    /// The price charged, resolved to its full entity.
    pub price: Price,
    /// Units charged.
    pub quantity: u32,
    /// Proration, for subscription-change transactions.
    pub proration: Option<Proration>,
}

/// Hosted checkout attached to a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Checkout {
    /// URL customers pay at; absent when checkout is disabled.
    pub url: Option<String>,
}

/// A transaction: the record of charging a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transaction {
    /// Transaction identifier.
    pub id: TransactionId,
    /// Lifecycle state.
    pub status: TransactionStatus,
    /// Customer being charged.
    pub customer_id: Option<CustomerId>,
    /// Address used for tax calculation.
    pub address_id: Option<AddressId>,
    /// Business the charge is invoiced to.
    pub business_id: Option<BusinessId>,
    /// Currency of the transaction.
    pub currency_code: CurrencyCode,
    /// What created the transaction.
    pub origin: TransactionOrigin,
    /// Subscription that generated it, if any.
    pub subscription_id: Option<SubscriptionId>,
    /// Invoice issued for it, if any.
    pub invoice_id: Option<InvoiceId>,
    /// Sequential invoice number, once billed.
    pub invoice_number: Option<String>,
    /// How payment is collected.
    #[serde(default)]
    pub collection_mode: CollectionMode,
    /// Discount applied.
    pub discount_id: Option<DiscountId>,
    /// Period the charge covers, for subscription billing.
    pub billing_period: Option<TimePeriod>,
    /// What is being charged.
    pub items: Vec<TransactionItem>,
    /// Calculated totals; absent on drafts without an address.
    pub details: Option<TransactionDetails>,
    /// Hosted checkout for the transaction.
    pub checkout: Option<Checkout>,
    /// Seller-defined metadata.
    pub custom_data: Option<CustomData>,
    /// When the transaction was created.
    pub created_at: DateTime<Utc>,
    /// When the transaction was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// When the transaction was billed.
    pub billed_at: Option<DateTime<Utc>>,
}

/// Product fields accepted inline on a non-catalog transaction item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionProductInput {
    /// Display name.
    pub name: String,
    /// Tax category.
    pub tax_category: TaxCategory,
    /// Longer description shown at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL of an image shown at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Price fields accepted inline for an existing product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPriceInput {
    /// Internal description of the price.
    pub description: String,
    /// Existing product the price charges for.
    pub product_id: ProductId,
    /// Amount charged.
    pub unit_price: Money,
    /// How often the price recurs; omit for a one-time charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<Duration>,
    /// Free trial before the first charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period: Option<Duration>,
    /// How tax is calculated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_mode: Option<TaxMode>,
}

/// Price and product accepted inline together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPriceWithProductInput {
    /// Internal description of the price.
    pub description: String,
    /// Product created alongside the price.
    pub product: TransactionProductInput,
    /// Amount charged.
    pub unit_price: Money,
    /// How often the price recurs; omit for a one-time charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<Duration>,
    /// Free trial before the first charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period: Option<Duration>,
    /// How tax is calculated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_mode: Option<TaxMode>,
}

/// Line item for transaction create, update, and preview requests.
///
/// The API accepts three shapes: a catalog price referenced by id, an inline
/// price for an existing product, or an inline price and product together.
/// The shapes carry no discriminator; which one applies is decided by the
/// fields present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionItemInput {
    /// Reference a catalog price by id.
    CatalogPrice {
        /// The price to charge.
        price_id: PriceId,
        /// Units to charge.
        quantity: u32,
    },
    /// Inline price for an existing product.
    NonCatalogPrice {
        /// The price to charge.
        price: TransactionPriceInput,
        /// Units to charge.
        quantity: u32,
    },
    /// Inline price and product together.
    NonCatalogPriceAndProduct {
        /// The price and product to charge.
        price: TransactionPriceWithProductInput,
        /// Units to charge.
        quantity: u32,
    },
}

/// Fields accepted when creating a transaction.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionCreate {
    /// What to charge.
    pub items: Vec<TransactionItemInput>,
    /// Create as `draft` or `ready`; server default is `ready` when the
    /// transaction has enough information to finalize.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    /// Customer being charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Address used for tax calculation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<AddressId>,
    /// Business the charge is invoiced to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_id: Option<BusinessId>,
    /// Currency of the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// How payment is collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_mode: Option<CollectionMode>,
    /// Discount to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_id: Option<DiscountId>,
    /// Period the charge covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period: Option<TimePeriod>,
    /// Seller-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
}

impl TransactionCreate {
    /// Build a create request charging the given items.
    #[must_use]
    pub fn new(items: Vec<TransactionItemInput>) -> Self {
        Self {
            items,
            status: None,
            customer_id: None,
            address_id: None,
            business_id: None,
            currency_code: None,
            collection_mode: None,
            discount_id: None,
            billing_period: None,
            custom_data: None,
        }
    }
}

/// Fields accepted when updating a transaction. Only `draft` and `ready`
/// transactions can be updated; absent fields are unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionUpdate {
    /// Move between `draft`, `ready`, and `billed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    /// Customer being charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Address used for tax calculation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<AddressId>,
    /// Business the charge is invoiced to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_id: Option<BusinessId>,
    /// Currency of the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// How payment is collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_mode: Option<CollectionMode>,
    /// Discount to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_id: Option<DiscountId>,
    /// Period the charge covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period: Option<TimePeriod>,
    /// Replace the charged items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<TransactionItemInput>>,
    /// Seller-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
}

/// Address fields accepted when previewing without a saved address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressPreview {
    /// Country. Drives tax calculation.
    pub country_code: crate::money::CountryCode,
    /// Postal or ZIP code, for sub-national tax rates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Fields accepted when previewing a transaction.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionPreviewRequest {
    /// What would be charged.
    pub items: Vec<TransactionItemInput>,
    /// Customer to price for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Saved address to price against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<AddressId>,
    /// Ad-hoc address to price against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressPreview>,
    /// Currency to price in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// Discount to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_id: Option<DiscountId>,
}

impl TransactionPreviewRequest {
    /// Build a preview request for the given items.
    #[must_use]
    pub fn new(items: Vec<TransactionItemInput>) -> Self {
        Self {
            items,
            customer_id: None,
            address_id: None,
            address: None,
            currency_code: None,
            discount_id: None,
        }
    }
}

/// Calculated preview of a transaction. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionPreview {
    /// Currency the preview was priced in.
    pub currency_code: CurrencyCode,
    /// Customer the preview was priced for.
    pub customer_id: Option<CustomerId>,
    /// Discount applied.
    pub discount_id: Option<DiscountId>,
    /// Calculated breakdown.
    pub details: TransactionDetails,
}

/// Location of the invoice PDF for a billed transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionInvoice {
    /// Time-limited download URL.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_union_decodes_catalog_price() {
        let item: TransactionItemInput = serde_json::from_str(
            r#"{"price_id": "pri_01gsz8x8sawmvhz1pv30nge1ke", "quantity": 2}"#,
        )
        .unwrap();
        assert!(matches!(
            item,
            TransactionItemInput::CatalogPrice { quantity: 2, .. }
        ));
    }

    #[test]
    fn item_union_decodes_inline_price() {
        let item: TransactionItemInput = serde_json::from_str(
            r#"{
                "price": {
                    "description": "One-off setup fee",
                    "product_id": "pro_01gsz4t5hdjse780zja8vvr7jg",
                    "unit_price": {"amount": "50000", "currency_code": "USD"}
                },
                "quantity": 1
            }"#,
        )
        .unwrap();
        assert!(matches!(item, TransactionItemInput::NonCatalogPrice { .. }));
    }

    #[test]
    fn item_union_decodes_inline_price_and_product() {
        let item: TransactionItemInput = serde_json::from_str(
            r#"{
                "price": {
                    "description": "Custom consulting",
                    "product": {"name": "Consulting", "tax_category": "professional-services"},
                    "unit_price": {"amount": "250000", "currency_code": "USD"}
                },
                "quantity": 1
            }"#,
        )
        .unwrap();
        assert!(matches!(
            item,
            TransactionItemInput::NonCatalogPriceAndProduct { .. }
        ));
    }

    #[test]
    fn item_union_rejects_missing_quantity() {
        let result: Result<TransactionItemInput, _> =
            serde_json::from_str(r#"{"price_id": "pri_01gsz8x8sawmvhz1pv30nge1ke"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn item_union_serializes_without_discriminator() {
        let item = TransactionItemInput::CatalogPrice {
            price_id: PriceId::new("pri_01gsz8x8sawmvhz1pv30nge1ke").unwrap(),
            quantity: 5,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"price_id": "pri_01gsz8x8sawmvhz1pv30nge1ke", "quantity": 5})
        );
    }

    #[test]
    fn unknown_status_fails_decoding() {
        let result: Result<TransactionStatus, _> = serde_json::from_str("\"pending\"");
        assert!(result.is_err());
    }
}
