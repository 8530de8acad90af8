//! Adjustment operations: refunds, credits, and chargebacks.

use billforge_core::{
    Adjustment, AdjustmentAction, AdjustmentCreate, AdjustmentId, AdjustmentStatus, CreditNote,
    CustomerId, Page, SubscriptionId, TransactionId,
};
use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::params::QueryParams;

fn action_str(action: AdjustmentAction) -> &'static str {
    match action {
        AdjustmentAction::Credit => "credit",
        AdjustmentAction::CreditReverse => "credit_reverse",
        AdjustmentAction::Refund => "refund",
        AdjustmentAction::Chargeback => "chargeback",
        AdjustmentAction::ChargebackReverse => "chargeback_reverse",
        AdjustmentAction::ChargebackWarning => "chargeback_warning",
    }
}

fn status_str(status: AdjustmentStatus) -> &'static str {
    match status {
        AdjustmentStatus::PendingApproval => "pending_approval",
        AdjustmentStatus::Approved => "approved",
        AdjustmentStatus::Rejected => "rejected",
        AdjustmentStatus::Reversed => "reversed",
    }
}

/// Query parameters for [`Client::list_adjustments`].
#[derive(Debug, Clone, Default)]
pub struct AdjustmentListParams {
    /// Return entities after the given cursor.
    pub after: Option<String>,
    /// Page size; server default is 50, maximum 200.
    pub per_page: Option<u32>,
    /// Restrict to the given ids.
    pub id: Vec<AdjustmentId>,
    /// Restrict to the given customers.
    pub customer_id: Vec<CustomerId>,
    /// Restrict to adjustments against the given transactions.
    pub transaction_id: Vec<TransactionId>,
    /// Restrict to adjustments against the given subscriptions.
    pub subscription_id: Vec<SubscriptionId>,
    /// Restrict to the given actions.
    pub action: Option<AdjustmentAction>,
    /// Restrict to the given statuses.
    pub status: Vec<AdjustmentStatus>,
}

impl AdjustmentListParams {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("after", self.after.as_deref());
        query.push_opt("per_page", self.per_page);
        query.push_csv("id", &self.id);
        query.push_csv("customer_id", &self.customer_id);
        query.push_csv("transaction_id", &self.transaction_id);
        query.push_csv("subscription_id", &self.subscription_id);
        query.push_opt("action", self.action.map(action_str));
        query.push_csv("status", self.status.iter().copied().map(status_str));
        query
    }
}

impl Client {
    /// List adjustments.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_adjustments(
        &self,
        params: &AdjustmentListParams,
    ) -> Result<Page<Adjustment>> {
        self.get_page("list_adjustments", "/adjustments", &params.to_query())
            .await
    }

    /// Create an adjustment against a billed or completed transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_adjustment(&self, adjustment: &AdjustmentCreate) -> Result<Adjustment> {
        self.send_entity(
            "create_adjustment",
            Method::POST,
            "/adjustments",
            adjustment,
        )
        .await
    }

    /// Get a time-limited URL for the credit note PDF of an adjustment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_adjustment_credit_note(&self, id: &AdjustmentId) -> Result<CreditNote> {
        self.get_entity(
            "get_adjustment_credit_note",
            &format!("/adjustments/{id}/credit-note"),
            &QueryParams::new(),
        )
        .await
    }
}
