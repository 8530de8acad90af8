//! Adjustment entities: refunds, credits, and chargebacks against billed
//! transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AdjustmentId, CustomerId, SubscriptionId, TransactionId};
use crate::money::{Amount, CurrencyCode};

/// What an adjustment does to the original transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentAction {
    /// Credit the customer balance.
    Credit,
    /// Reverse an earlier credit.
    CreditReverse,
    /// Return money to the payment method.
    Refund,
    /// Payment disputed by the cardholder.
    Chargeback,
    /// Dispute resolved in the seller's favor.
    ChargebackReverse,
    /// Dispute warning received.
    ChargebackWarning,
}

/// Approval state of an adjustment. Refunds need payment-provider approval;
/// other actions apply immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentStatus {
    /// Waiting for approval.
    PendingApproval,
    /// Approved and applied.
    Approved,
    /// Rejected by the payment provider.
    Rejected,
    /// Reversed after being applied.
    Reversed,
}

/// How much of a line item an adjustment covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentItemType {
    /// The whole line.
    Full,
    /// Part of the line; requires an explicit amount.
    Partial,
    /// The tax portion only.
    Tax,
    /// The proration portion only.
    Proration,
}

/// Totals for a single adjusted line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdjustmentItemTotals {
    /// Amount before tax.
    pub subtotal: Amount,
    /// Tax adjusted.
    pub tax: Amount,
    /// Amount including tax.
    pub total: Amount,
}

/// One adjusted line of the original transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdjustmentItem {
    /// Server-assigned identifier for the adjusted line.
    pub id: Option<String>,
    /// The transaction line being adjusted.
    pub item_id: String,
    /// How much of the line is covered.
    #[serde(rename = "type")]
    pub item_type: AdjustmentItemType,
    /// Amount for `partial` adjustments; computed otherwise.
    pub amount: Option<Amount>,
    /// Calculated totals for the line.
    pub totals: Option<AdjustmentItemTotals>,
}

/// Adjustment-level totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdjustmentTotals {
    /// Amount before tax.
    pub subtotal: Amount,
    /// Tax adjusted.
    pub tax: Amount,
    /// Amount including tax.
    pub total: Amount,
    /// Processing fee returned, for refunds.
    pub fee: Option<Amount>,
    /// Earnings impact.
    pub earnings: Option<Amount>,
    /// Currency of the totals.
    pub currency_code: CurrencyCode,
}

/// A post-billing correction to a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Adjustment {
    /// Adjustment identifier.
    pub id: AdjustmentId,
    /// What the adjustment does.
    pub action: AdjustmentAction,
    /// Transaction being adjusted.
    pub transaction_id: TransactionId,
    /// Subscription behind the transaction, if any.
    pub subscription_id: Option<SubscriptionId>,
    /// Customer affected.
    pub customer_id: CustomerId,
    /// Why the adjustment was made.
    pub reason: String,
    /// Whether a credit was applied to the customer balance.
    pub credit_applied_to_balance: Option<bool>,
    /// Currency of the adjustment.
    pub currency_code: CurrencyCode,
    /// Approval state.
    pub status: AdjustmentStatus,
    /// Lines adjusted.
    pub items: Vec<AdjustmentItem>,
    /// Adjustment-level totals.
    pub totals: Option<AdjustmentTotals>,
    /// When the adjustment was created.
    pub created_at: DateTime<Utc>,
    /// When the adjustment was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// One line of an adjustment create request.
#[derive(Debug, Clone, Serialize)]
pub struct AdjustmentItemCreate {
    /// The transaction line to adjust.
    pub item_id: String,
    /// How much of the line to cover.
    #[serde(rename = "type")]
    pub item_type: AdjustmentItemType,
    /// Amount, required for `partial` adjustments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

/// Fields accepted when creating an adjustment.
#[derive(Debug, Clone, Serialize)]
pub struct AdjustmentCreate {
    /// What the adjustment does.
    pub action: AdjustmentAction,
    /// Transaction to adjust.
    pub transaction_id: TransactionId,
    /// Why the adjustment is being made.
    pub reason: String,
    /// Lines to adjust.
    pub items: Vec<AdjustmentItemCreate>,
}

/// Location of the credit note PDF for an adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreditNote {
    /// Time-limited download URL.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjustment_item_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&AdjustmentItemType::Partial).unwrap(),
            "\"partial\""
        );
        let parsed: AdjustmentItemType = serde_json::from_str("\"proration\"").unwrap();
        assert_eq!(parsed, AdjustmentItemType::Proration);
    }

    #[test]
    fn create_request_shape() {
        let create = AdjustmentCreate {
            action: AdjustmentAction::Refund,
            transaction_id: TransactionId::new("txn_01h04vsc0qhwtsbsxh3422wjjw").unwrap(),
            reason: "Duplicate charge".to_string(),
            items: vec![AdjustmentItemCreate {
                item_id: "txnitm_01h04vsc0qhwtsbsxh3422wjjw".to_string(),
                item_type: AdjustmentItemType::Full,
                amount: None,
            }],
        };
        let json = serde_json::to_value(&create).unwrap();
        assert_eq!(json["action"], "refund");
        assert_eq!(json["items"][0]["type"], "full");
        assert!(json["items"][0].get("amount").is_none());
    }

    #[test]
    fn pending_approval_status_decodes() {
        let status: AdjustmentStatus = serde_json::from_str("\"pending_approval\"").unwrap();
        assert_eq!(status, AdjustmentStatus::PendingApproval);
    }
}
