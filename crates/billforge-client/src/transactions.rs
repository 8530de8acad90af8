//! Transaction operations.

use billforge_core::{
    CustomerId, Page, SubscriptionId, Transaction, TransactionCreate, TransactionId,
    TransactionInvoice, TransactionPreview, TransactionPreviewRequest, TransactionStatus,
    TransactionUpdate,
};
use reqwest::Method;
use std::fmt;

use crate::client::Client;
use crate::error::Result;
use crate::params::QueryParams;

/// Related entities that can be embedded in transaction responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionInclude {
    /// Embed the address.
    Address,
    /// Embed adjustments against the transaction.
    Adjustments,
    /// Embed the business.
    Business,
    /// Embed the customer.
    Customer,
    /// Embed the discount.
    Discount,
}

impl TransactionInclude {
    /// Return the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Adjustments => "adjustments",
            Self::Business => "business",
            Self::Customer => "customer",
            Self::Discount => "discount",
        }
    }
}

impl fmt::Display for TransactionInclude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for [`Client::list_transactions`].
#[derive(Debug, Clone, Default)]
pub struct TransactionListParams {
    /// Return entities after the given cursor.
    pub after: Option<String>,
    /// Page size; server default is 50, maximum 200.
    pub per_page: Option<u32>,
    /// Restrict to the given ids.
    pub id: Vec<TransactionId>,
    /// Restrict to the given customers.
    pub customer_id: Vec<CustomerId>,
    /// Restrict to the given subscriptions.
    pub subscription_id: Vec<SubscriptionId>,
    /// Restrict to the given statuses.
    pub status: Vec<TransactionStatus>,
    /// Restrict to transactions billed at or after this RFC 3339 instant.
    pub billed_at_from: Option<String>,
    /// Embed related entities.
    pub include: Vec<TransactionInclude>,
    /// Sort order, e.g. `"billed_at[DESC]"`.
    pub order_by: Option<String>,
}

impl TransactionListParams {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("after", self.after.as_deref());
        query.push_opt("per_page", self.per_page);
        query.push_csv("id", &self.id);
        query.push_csv("customer_id", &self.customer_id);
        query.push_csv("subscription_id", &self.subscription_id);
        query.push_csv("status", self.status.iter());
        query.push_opt("billed_at[GTE]", self.billed_at_from.as_deref());
        query.push_csv("include", self.include.iter());
        query.push_opt("order_by", self.order_by.as_deref());
        query
    }
}

impl Client {
    /// List transactions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_transactions(
        &self,
        params: &TransactionListParams,
    ) -> Result<Page<Transaction>> {
        self.get_page("list_transactions", "/transactions", &params.to_query())
            .await
    }

    /// Create a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_transaction(
        &self,
        transaction: &TransactionCreate,
    ) -> Result<Transaction> {
        self.send_entity(
            "create_transaction",
            Method::POST,
            "/transactions",
            transaction,
        )
        .await
    }

    /// Get a transaction by id, optionally embedding related entities.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_transaction(
        &self,
        id: &TransactionId,
        include: &[TransactionInclude],
    ) -> Result<Transaction> {
        let mut query = QueryParams::new();
        query.push_csv("include", include.iter());
        self.get_entity("get_transaction", &format!("/transactions/{id}"), &query)
            .await
    }

    /// Update a `draft` or `ready` transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_transaction(
        &self,
        id: &TransactionId,
        update: &TransactionUpdate,
    ) -> Result<Transaction> {
        self.send_entity(
            "update_transaction",
            Method::PATCH,
            &format!("/transactions/{id}"),
            update,
        )
        .await
    }

    /// Price a prospective transaction without persisting anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn preview_transaction(
        &self,
        preview: &TransactionPreviewRequest,
    ) -> Result<TransactionPreview> {
        self.send_entity(
            "preview_transaction",
            Method::POST,
            "/transactions/preview",
            preview,
        )
        .await
    }

    /// Get a time-limited URL for the invoice PDF of a billed transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_transaction_invoice(
        &self,
        id: &TransactionId,
    ) -> Result<TransactionInvoice> {
        self.get_entity(
            "get_transaction_invoice",
            &format!("/transactions/{id}/invoice"),
            &QueryParams::new(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_values_join_as_csv() {
        let params = TransactionListParams {
            include: vec![TransactionInclude::Customer, TransactionInclude::Address],
            ..TransactionListParams::default()
        };
        assert_eq!(
            params.to_query().pairs(),
            &[("include".to_string(), "customer,address".to_string())]
        );
    }

    #[test]
    fn billed_at_filter_uses_operator_key() {
        let params = TransactionListParams {
            billed_at_from: Some("2024-01-01T00:00:00Z".to_string()),
            ..TransactionListParams::default()
        };
        assert_eq!(
            params.to_query().pairs(),
            &[(
                "billed_at[GTE]".to_string(),
                "2024-01-01T00:00:00Z".to_string()
            )]
        );
    }
}
