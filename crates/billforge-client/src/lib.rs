//! Billforge Client SDK.
//!
//! This crate provides a typed client for the Billforge billing platform's
//! REST API. Every remote operation is a method on [`Client`] that takes
//! typed arguments and returns either a decoded, schema-validated value or
//! a typed [`Error`].
//!
//! # Example
//!
//! ```no_run
//! use billforge_client::{Client, Config, Environment, ProductListParams};
//!
//! # async fn example() -> Result<(), billforge_client::Error> {
//! let client = Client::new(
//!     Config::new("bf_sk_01gtys...").with_environment(&Environment::Sandbox),
//! );
//!
//! let page = client
//!     .list_products(&ProductListParams {
//!         per_page: Some(10),
//!         ..ProductListParams::default()
//!     })
//!     .await?;
//!
//! for product in &page.data {
//!     println!("{} - {}", product.id, product.name);
//! }
//! if page.meta.pagination.has_more {
//!     println!("more pages available");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Failures come in three distinct categories (transport failures, schema
//! mismatches on success responses, and API error responses) so callers
//! can match on the [`Error`] variant and recover appropriately. See the
//! [`error`] module.
//!
//! # Transports
//!
//! Network I/O goes through the [`Transport`] trait. The default is a
//! pooled reqwest client; inject your own with [`Client::with_transport`],
//! or intercept per-call with [`Client::with_transform`]. The client itself
//! never retries, caches, or batches: one call is one exchange.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod addresses;
mod adjustments;
mod businesses;
mod client;
pub mod config;
mod customers;
mod discounts;
pub mod error;
mod events;
mod notifications;
mod params;
mod prices;
mod products;
mod reports;
mod subscriptions;
mod transactions;
pub mod transport;

pub use addresses::AddressListParams;
pub use adjustments::AdjustmentListParams;
pub use businesses::BusinessListParams;
pub use client::{Client, TransportHook};
pub use config::{Config, ConfigError, Environment};
pub use customers::CustomerListParams;
pub use discounts::DiscountListParams;
pub use error::{Error, Result};
pub use events::EventListParams;
pub use notifications::{NotificationListParams, NotificationSettingListParams};
pub use params::QueryParams;
pub use prices::PriceListParams;
pub use products::ProductListParams;
pub use reports::ReportListParams;
pub use subscriptions::SubscriptionListParams;
pub use transactions::{TransactionInclude, TransactionListParams};
pub use transport::{HttpTransport, Request, Response, Transport, TransportError};
