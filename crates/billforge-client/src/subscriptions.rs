//! Subscription operations, including the lifecycle verbs.

use billforge_core::{
    CustomerId, Page, PriceId, Subscription, SubscriptionCancel, SubscriptionCharge,
    SubscriptionId, SubscriptionPause, SubscriptionResume, SubscriptionStatus, SubscriptionUpdate,
    Transaction,
};
use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::params::QueryParams;

/// Query parameters for [`Client::list_subscriptions`].
#[derive(Debug, Clone, Default)]
pub struct SubscriptionListParams {
    /// Return entities after the given cursor.
    pub after: Option<String>,
    /// Page size; server default is 50, maximum 200.
    pub per_page: Option<u32>,
    /// Restrict to the given ids.
    pub id: Vec<SubscriptionId>,
    /// Restrict to the given customers.
    pub customer_id: Vec<CustomerId>,
    /// Restrict to subscriptions billing the given prices.
    pub price_id: Vec<PriceId>,
    /// Restrict to the given statuses.
    pub status: Vec<SubscriptionStatus>,
    /// Restrict to subscriptions with a scheduled change.
    pub scheduled_change_action: Option<String>,
    /// Sort order, e.g. `"created_at[DESC]"`.
    pub order_by: Option<String>,
}

impl SubscriptionListParams {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("after", self.after.as_deref());
        query.push_opt("per_page", self.per_page);
        query.push_csv("id", &self.id);
        query.push_csv("customer_id", &self.customer_id);
        query.push_csv("price_id", &self.price_id);
        query.push_csv("status", self.status.iter());
        query.push_opt(
            "scheduled_change_action",
            self.scheduled_change_action.as_deref(),
        );
        query.push_opt("order_by", self.order_by.as_deref());
        query
    }
}

impl Client {
    /// List subscriptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_subscriptions(
        &self,
        params: &SubscriptionListParams,
    ) -> Result<Page<Subscription>> {
        self.get_page("list_subscriptions", "/subscriptions", &params.to_query())
            .await
    }

    /// Get a subscription by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_subscription(&self, id: &SubscriptionId) -> Result<Subscription> {
        self.get_entity(
            "get_subscription",
            &format!("/subscriptions/{id}"),
            &QueryParams::new(),
        )
        .await
    }

    /// Update a subscription. Changing `items` requires a proration billing
    /// mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_subscription(
        &self,
        id: &SubscriptionId,
        update: &SubscriptionUpdate,
    ) -> Result<Subscription> {
        self.send_entity(
            "update_subscription",
            Method::PATCH,
            &format!("/subscriptions/{id}"),
            update,
        )
        .await
    }

    /// Cancel a subscription, immediately or at the period end.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn cancel_subscription(
        &self,
        id: &SubscriptionId,
        request: &SubscriptionCancel,
    ) -> Result<Subscription> {
        self.send_entity(
            "cancel_subscription",
            Method::POST,
            &format!("/subscriptions/{id}/cancel"),
            request,
        )
        .await
    }

    /// Pause a subscription, optionally scheduling an automatic resume.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn pause_subscription(
        &self,
        id: &SubscriptionId,
        request: &SubscriptionPause,
    ) -> Result<Subscription> {
        self.send_entity(
            "pause_subscription",
            Method::POST,
            &format!("/subscriptions/{id}/pause"),
            request,
        )
        .await
    }

    /// Resume a paused subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn resume_subscription(
        &self,
        id: &SubscriptionId,
        request: &SubscriptionResume,
    ) -> Result<Subscription> {
        self.send_entity(
            "resume_subscription",
            Method::POST,
            &format!("/subscriptions/{id}/resume"),
            request,
        )
        .await
    }

    /// Activate a trialing subscription ahead of its first billing date.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn activate_subscription(&self, id: &SubscriptionId) -> Result<Subscription> {
        self.post_empty(
            "activate_subscription",
            &format!("/subscriptions/{id}/activate"),
        )
        .await
    }

    /// Charge one-time items against a subscription. Returns the transaction
    /// created for the charge.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn charge_subscription(
        &self,
        id: &SubscriptionId,
        charge: &SubscriptionCharge,
    ) -> Result<Transaction> {
        self.send_entity(
            "charge_subscription",
            Method::POST,
            &format!("/subscriptions/{id}/charge"),
            charge,
        )
        .await
    }
}
