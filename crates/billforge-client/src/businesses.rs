//! Customer business operations. Businesses are scoped under their customer.

use billforge_core::{
    Business, BusinessCreate, BusinessId, BusinessUpdate, CustomerId, EntityStatus, Page,
};
use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::params::QueryParams;

/// Query parameters for [`Client::list_businesses`].
#[derive(Debug, Clone, Default)]
pub struct BusinessListParams {
    /// Return entities after the given cursor.
    pub after: Option<String>,
    /// Page size; server default is 50, maximum 200.
    pub per_page: Option<u32>,
    /// Restrict to the given ids.
    pub id: Vec<BusinessId>,
    /// Restrict to the given statuses.
    pub status: Vec<EntityStatus>,
    /// Full-text search over name and registration numbers.
    pub search: Option<String>,
}

impl BusinessListParams {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("after", self.after.as_deref());
        query.push_opt("per_page", self.per_page);
        query.push_csv("id", &self.id);
        query.push_csv("status", self.status.iter());
        query.push_opt("search", self.search.as_deref());
        query
    }
}

impl Client {
    /// List a customer's businesses.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_businesses(
        &self,
        customer_id: &CustomerId,
        params: &BusinessListParams,
    ) -> Result<Page<Business>> {
        self.get_page(
            "list_businesses",
            &format!("/customers/{customer_id}/businesses"),
            &params.to_query(),
        )
        .await
    }

    /// Create a business for a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_business(
        &self,
        customer_id: &CustomerId,
        business: &BusinessCreate,
    ) -> Result<Business> {
        self.send_entity(
            "create_business",
            Method::POST,
            &format!("/customers/{customer_id}/businesses"),
            business,
        )
        .await
    }

    /// Get a business by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_business(
        &self,
        customer_id: &CustomerId,
        id: &BusinessId,
    ) -> Result<Business> {
        self.get_entity(
            "get_business",
            &format!("/customers/{customer_id}/businesses/{id}"),
            &QueryParams::new(),
        )
        .await
    }

    /// Update a business. Set `status` to archive it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_business(
        &self,
        customer_id: &CustomerId,
        id: &BusinessId,
        update: &BusinessUpdate,
    ) -> Result<Business> {
        self.send_entity(
            "update_business",
            Method::PATCH,
            &format!("/customers/{customer_id}/businesses/{id}"),
            update,
        )
        .await
    }
}
