//! Customer operations.

use billforge_core::{
    Customer, CustomerCreate, CustomerId, CustomerUpdate, EntityStatus, Page,
};
use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::params::QueryParams;

/// Query parameters for [`Client::list_customers`].
#[derive(Debug, Clone, Default)]
pub struct CustomerListParams {
    /// Return entities after the given cursor.
    pub after: Option<String>,
    /// Page size; server default is 50, maximum 200.
    pub per_page: Option<u32>,
    /// Restrict to the given ids.
    pub id: Vec<CustomerId>,
    /// Restrict to the given statuses.
    pub status: Vec<EntityStatus>,
    /// Full-text search over name and email.
    pub search: Option<String>,
    /// Restrict to the given email addresses.
    pub email: Vec<String>,
}

impl CustomerListParams {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("after", self.after.as_deref());
        query.push_opt("per_page", self.per_page);
        query.push_csv("id", &self.id);
        query.push_csv("status", self.status.iter());
        query.push_opt("search", self.search.as_deref());
        query.push_csv("email", &self.email);
        query
    }
}

impl Client {
    /// List customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_customers(&self, params: &CustomerListParams) -> Result<Page<Customer>> {
        self.get_page("list_customers", "/customers", &params.to_query())
            .await
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_customer(&self, customer: &CustomerCreate) -> Result<Customer> {
        self.send_entity("create_customer", Method::POST, "/customers", customer)
            .await
    }

    /// Get a customer by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_customer(&self, id: &CustomerId) -> Result<Customer> {
        self.get_entity("get_customer", &format!("/customers/{id}"), &QueryParams::new())
            .await
    }

    /// Update a customer. Set `status` to archive them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_customer(
        &self,
        id: &CustomerId,
        update: &CustomerUpdate,
    ) -> Result<Customer> {
        self.send_entity(
            "update_customer",
            Method::PATCH,
            &format!("/customers/{id}"),
            update,
        )
        .await
    }
}
