//! Subscription entities and lifecycle request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Price;
use crate::common::{CollectionMode, CustomData, Duration, TimePeriod};
use crate::ids::{AddressId, BusinessId, CustomerId, DiscountId, PriceId, SubscriptionId};
use crate::money::CurrencyCode;
use crate::transaction::TransactionItemInput;

/// Lifecycle state of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Billing normally.
    Active,
    /// Terminated; no further billing.
    Canceled,
    /// A renewal payment failed.
    PastDue,
    /// Billing suspended, can be resumed.
    Paused,
    /// In a trial period before the first charge.
    Trialing,
}

impl SubscriptionStatus {
    /// Return the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Canceled => "canceled",
            Self::PastDue => "past_due",
            Self::Paused => "paused",
            Self::Trialing => "trialing",
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a single item within a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionItemStatus {
    /// Billed each cycle.
    Active,
    /// No longer billed.
    Inactive,
    /// In trial.
    Trialing,
}

/// A price being billed on a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubscriptionItem {
    /// Item state.
    pub status: SubscriptionItemStatus,
    /// Units billed each cycle.
    pub quantity: u32,
    /// Whether the item recurs or was a one-time charge.
    pub recurring: bool,
    /// Trial dates for the item.
    pub trial_dates: Option<TimePeriod>,
    /// When the item was last billed.
    pub previously_billed_at: Option<DateTime<Utc>>,
    /// When the item is next billed.
    pub next_billed_at: Option<DateTime<Utc>>,
    /// The price billed, resolved to its full entity.
    pub price: Price,
    /// When the item was added.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// A change scheduled to happen at the end of the billing period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduledChange {
    /// What will happen.
    pub action: ScheduledChangeAction,
    /// When it takes effect.
    pub effective_at: DateTime<Utc>,
    /// When billing resumes, for scheduled pauses.
    pub resume_at: Option<DateTime<Utc>>,
}

/// Action a scheduled change performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduledChangeAction {
    /// Cancel the subscription.
    Cancel,
    /// Pause the subscription.
    Pause,
    /// Resume a paused subscription.
    Resume,
}

/// Discount currently applied to a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubscriptionDiscount {
    /// The discount applied.
    pub id: DiscountId,
    /// When it starts applying.
    pub starts_at: Option<DateTime<Utc>>,
    /// When it stops applying.
    pub ends_at: Option<DateTime<Utc>>,
}

/// Customer-facing URLs for managing a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManagementUrls {
    /// Hosted page for updating the payment method.
    pub update_payment_method: Option<String>,
    /// Hosted page for canceling.
    pub cancel: String,
}

/// A recurring billing agreement with a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Subscription {
    /// Subscription identifier.
    pub id: SubscriptionId,
    /// Lifecycle state.
    pub status: SubscriptionStatus,
    /// Customer billed.
    pub customer_id: CustomerId,
    /// Address used for tax calculation.
    pub address_id: AddressId,
    /// Business invoiced, for B2B subscriptions.
    pub business_id: Option<BusinessId>,
    /// Currency billed in.
    pub currency_code: CurrencyCode,
    /// How payment is collected.
    #[serde(default)]
    pub collection_mode: CollectionMode,
    /// How often the subscription bills.
    pub billing_cycle: Duration,
    /// Current period being billed.
    pub current_billing_period: Option<TimePeriod>,
    /// Discount applied.
    pub discount: Option<SubscriptionDiscount>,
    /// Change scheduled for the period end.
    pub scheduled_change: Option<ScheduledChange>,
    /// Customer-facing management URLs.
    pub management_urls: Option<ManagementUrls>,
    /// Prices billed.
    pub items: Vec<SubscriptionItem>,
    /// Seller-defined metadata.
    pub custom_data: Option<CustomData>,
    /// When the subscription was created.
    pub created_at: DateTime<Utc>,
    /// When the subscription was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// When the subscription started.
    pub started_at: Option<DateTime<Utc>>,
    /// When the first charge happened.
    pub first_billed_at: Option<DateTime<Utc>>,
    /// When the next charge happens.
    pub next_billed_at: Option<DateTime<Utc>>,
    /// When the subscription was paused.
    pub paused_at: Option<DateTime<Utc>>,
    /// When the subscription was canceled.
    pub canceled_at: Option<DateTime<Utc>>,
}

/// When a lifecycle change takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectiveFrom {
    /// At the end of the current billing period.
    NextBillingPeriod,
    /// Right away.
    Immediately,
}

/// How to bill for a mid-cycle subscription change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProrationBillingMode {
    /// Prorate and charge immediately.
    ProratedImmediately,
    /// Prorate and add to the next bill.
    ProratedNextBillingPeriod,
    /// Charge the full amount immediately.
    FullImmediately,
    /// Charge the full amount on the next bill.
    FullNextBillingPeriod,
    /// Change without charging.
    DoNotBill,
}

/// An item entry on a subscription update: the full item list replaces the
/// current one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionItemUpdate {
    /// Price to bill.
    pub price_id: PriceId,
    /// Units to bill each cycle.
    pub quantity: u32,
}

/// Discount binding accepted on a subscription update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionDiscountUpdate {
    /// Discount to apply.
    pub id: DiscountId,
    /// When the discount starts applying.
    pub effective_from: EffectiveFrom,
}

/// Fields accepted when updating a subscription. Absent fields are
/// unchanged. Changing `items` requires `proration_billing_mode`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubscriptionUpdate {
    /// Customer billed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Address used for tax calculation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<AddressId>,
    /// Business invoiced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_id: Option<BusinessId>,
    /// Currency billed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// Move the next billing date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_billed_at: Option<DateTime<Utc>>,
    /// Discount to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<SubscriptionDiscountUpdate>,
    /// How payment is collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_mode: Option<CollectionMode>,
    /// Replace the billed items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SubscriptionItemUpdate>>,
    /// How to bill for the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proration_billing_mode: Option<ProrationBillingMode>,
    /// Seller-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
}

/// Request body for canceling a subscription.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubscriptionCancel {
    /// Server default is `next_billing_period`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<EffectiveFrom>,
}

/// Request body for pausing a subscription.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubscriptionPause {
    /// Server default is `next_billing_period`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<EffectiveFrom>,
    /// Resume automatically at this time; paused indefinitely when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_at: Option<DateTime<Utc>>,
}

/// Request body for resuming a paused subscription.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionResume {
    /// When billing resumes.
    pub effective_from: EffectiveFrom,
}

/// Request body for a one-time charge against a subscription.
///
/// Items use the same three input shapes as transactions.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionCharge {
    /// When the charge is billed.
    pub effective_from: EffectiveFrom,
    /// What to charge.
    pub items: Vec<TransactionItemInput>,
}
