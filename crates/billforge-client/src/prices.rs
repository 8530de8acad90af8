//! Price catalog operations.

use billforge_core::{EntityStatus, Page, Price, PriceCreate, PriceId, PriceUpdate, ProductId};
use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::params::QueryParams;

/// Query parameters for [`Client::list_prices`].
#[derive(Debug, Clone, Default)]
pub struct PriceListParams {
    /// Return entities after the given cursor.
    pub after: Option<String>,
    /// Page size; server default is 50, maximum 200.
    pub per_page: Option<u32>,
    /// Restrict to the given ids.
    pub id: Vec<PriceId>,
    /// Restrict to prices of the given products.
    pub product_id: Vec<ProductId>,
    /// Restrict to the given statuses.
    pub status: Vec<EntityStatus>,
    /// Restrict to recurring (`true`) or one-time (`false`) prices.
    pub recurring: Option<bool>,
    /// Sort order, e.g. `"created_at[DESC]"`.
    pub order_by: Option<String>,
}

impl PriceListParams {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("after", self.after.as_deref());
        query.push_opt("per_page", self.per_page);
        query.push_csv("id", &self.id);
        query.push_csv("product_id", &self.product_id);
        query.push_csv("status", self.status.iter());
        query.push_opt("recurring", self.recurring);
        query.push_opt("order_by", self.order_by.as_deref());
        query
    }
}

impl Client {
    /// List prices.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_prices(&self, params: &PriceListParams) -> Result<Page<Price>> {
        self.get_page("list_prices", "/prices", &params.to_query())
            .await
    }

    /// Create a price for a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_price(&self, price: &PriceCreate) -> Result<Price> {
        self.send_entity("create_price", Method::POST, "/prices", price)
            .await
    }

    /// Get a price by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_price(&self, id: &PriceId) -> Result<Price> {
        self.get_entity("get_price", &format!("/prices/{id}"), &QueryParams::new())
            .await
    }

    /// Update a price. Set `status` to archive it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_price(&self, id: &PriceId, update: &PriceUpdate) -> Result<Price> {
        self.send_entity("update_price", Method::PATCH, &format!("/prices/{id}"), update)
            .await
    }
}
