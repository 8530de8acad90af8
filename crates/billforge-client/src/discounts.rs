//! Discount operations.

use billforge_core::{
    Discount, DiscountCode, DiscountCreate, DiscountId, DiscountStatus, DiscountUpdate, Page,
};
use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::params::QueryParams;

/// Query parameters for [`Client::list_discounts`].
#[derive(Debug, Clone, Default)]
pub struct DiscountListParams {
    /// Return entities after the given cursor.
    pub after: Option<String>,
    /// Page size; server default is 50, maximum 200.
    pub per_page: Option<u32>,
    /// Restrict to the given ids.
    pub id: Vec<DiscountId>,
    /// Restrict to the given checkout codes.
    pub code: Vec<DiscountCode>,
    /// Restrict to the given statuses.
    pub status: Vec<DiscountStatus>,
}

impl DiscountListParams {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("after", self.after.as_deref());
        query.push_opt("per_page", self.per_page);
        query.push_csv("id", &self.id);
        query.push_csv("code", &self.code);
        query.push_csv("status", self.status.iter());
        query
    }
}

impl Client {
    /// List discounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_discounts(&self, params: &DiscountListParams) -> Result<Page<Discount>> {
        self.get_page("list_discounts", "/discounts", &params.to_query())
            .await
    }

    /// Create a discount.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_discount(&self, discount: &DiscountCreate) -> Result<Discount> {
        self.send_entity("create_discount", Method::POST, "/discounts", discount)
            .await
    }

    /// Get a discount by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_discount(&self, id: &DiscountId) -> Result<Discount> {
        self.get_entity("get_discount", &format!("/discounts/{id}"), &QueryParams::new())
            .await
    }

    /// Update a discount. Set `status` to archive it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_discount(
        &self,
        id: &DiscountId,
        update: &DiscountUpdate,
    ) -> Result<Discount> {
        self.send_entity(
            "update_discount",
            Method::PATCH,
            &format!("/discounts/{id}"),
            update,
        )
        .await
    }
}
