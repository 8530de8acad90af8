//! Product catalog operations.

use billforge_core::{EntityStatus, Page, Product, ProductCreate, ProductId, ProductUpdate};
use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::params::QueryParams;

/// Query parameters for [`Client::list_products`].
#[derive(Debug, Clone, Default)]
pub struct ProductListParams {
    /// Return entities after the given cursor.
    pub after: Option<String>,
    /// Page size; server default is 50, maximum 200.
    pub per_page: Option<u32>,
    /// Restrict to the given ids.
    pub id: Vec<ProductId>,
    /// Restrict to the given statuses.
    pub status: Vec<EntityStatus>,
    /// Sort order, e.g. `"created_at[DESC]"`.
    pub order_by: Option<String>,
}

impl ProductListParams {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("after", self.after.as_deref());
        query.push_opt("per_page", self.per_page);
        query.push_csv("id", &self.id);
        query.push_csv("status", self.status.iter());
        query.push_opt("order_by", self.order_by.as_deref());
        query
    }
}

impl Client {
    /// List products in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_products(&self, params: &ProductListParams) -> Result<Page<Product>> {
        self.get_page("list_products", "/products", &params.to_query())
            .await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_product(&self, product: &ProductCreate) -> Result<Product> {
        self.send_entity("create_product", Method::POST, "/products", product)
            .await
    }

    /// Get a product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_product(&self, id: &ProductId) -> Result<Product> {
        self.get_entity("get_product", &format!("/products/{id}"), &QueryParams::new())
            .await
    }

    /// Update a product. Set `status` to archive it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_product(&self, id: &ProductId, update: &ProductUpdate) -> Result<Product> {
        self.send_entity(
            "update_product",
            Method::PATCH,
            &format!("/products/{id}"),
            update,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_omit_absent_fields() {
        let params = ProductListParams::default();
        assert!(params.to_query().is_empty());
    }

    #[test]
    fn list_params_join_ids() {
        let params = ProductListParams {
            id: vec![
                ProductId::new("pro_01gsz4t5hdjse780zja8vvr7jg").unwrap(),
                ProductId::new("pro_01h1vjes1y163xfj1rh1tkfb65").unwrap(),
            ],
            status: vec![EntityStatus::Active],
            ..ProductListParams::default()
        };
        let query = params.to_query();
        assert_eq!(
            query.pairs(),
            &[
                (
                    "id".to_string(),
                    "pro_01gsz4t5hdjse780zja8vvr7jg,pro_01h1vjes1y163xfj1rh1tkfb65".to_string()
                ),
                ("status".to_string(), "active".to_string()),
            ]
        );
    }
}
