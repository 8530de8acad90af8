//! Customer address operations. Addresses are scoped under their customer.

use billforge_core::{
    Address, AddressCreate, AddressId, AddressUpdate, CustomerId, EntityStatus, Page,
};
use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::params::QueryParams;

/// Query parameters for [`Client::list_addresses`].
#[derive(Debug, Clone, Default)]
pub struct AddressListParams {
    /// Return entities after the given cursor.
    pub after: Option<String>,
    /// Page size; server default is 50, maximum 200.
    pub per_page: Option<u32>,
    /// Restrict to the given ids.
    pub id: Vec<AddressId>,
    /// Restrict to the given statuses.
    pub status: Vec<EntityStatus>,
}

impl AddressListParams {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("after", self.after.as_deref());
        query.push_opt("per_page", self.per_page);
        query.push_csv("id", &self.id);
        query.push_csv("status", self.status.iter());
        query
    }
}

impl Client {
    /// List a customer's addresses.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_addresses(
        &self,
        customer_id: &CustomerId,
        params: &AddressListParams,
    ) -> Result<Page<Address>> {
        self.get_page(
            "list_addresses",
            &format!("/customers/{customer_id}/addresses"),
            &params.to_query(),
        )
        .await
    }

    /// Create an address for a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_address(
        &self,
        customer_id: &CustomerId,
        address: &AddressCreate,
    ) -> Result<Address> {
        self.send_entity(
            "create_address",
            Method::POST,
            &format!("/customers/{customer_id}/addresses"),
            address,
        )
        .await
    }

    /// Get an address by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_address(
        &self,
        customer_id: &CustomerId,
        id: &AddressId,
    ) -> Result<Address> {
        self.get_entity(
            "get_address",
            &format!("/customers/{customer_id}/addresses/{id}"),
            &QueryParams::new(),
        )
        .await
    }

    /// Update an address. Set `status` to archive it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_address(
        &self,
        customer_id: &CustomerId,
        id: &AddressId,
        update: &AddressUpdate,
    ) -> Result<Address> {
        self.send_entity(
            "update_address",
            Method::PATCH,
            &format!("/customers/{customer_id}/addresses/{id}"),
            update,
        )
        .await
    }
}
