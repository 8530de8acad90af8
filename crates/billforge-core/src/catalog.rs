//! Product and price catalog entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{CustomData, Duration, EntityStatus, TaxMode};
use crate::ids::{PriceId, ProductId};
use crate::money::{CountryCode, Money};

/// Tax category a product falls under, used for rate selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxCategory {
    /// Physical or otherwise standard-rated goods.
    Standard,
    /// Software as a service.
    Saas,
    /// Downloadable digital goods.
    DigitalGoods,
    /// Electronic books.
    Ebooks,
    /// Implementation services.
    ImplementationServices,
    /// Professional services.
    ProfessionalServices,
    /// Training services.
    TrainingServices,
    /// Website hosting.
    WebsiteHosting,
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Longer description shown at checkout.
    pub description: Option<String>,
    /// Tax category.
    pub tax_category: TaxCategory,
    /// URL of an image shown at checkout.
    pub image_url: Option<String>,
    /// Seller-defined metadata.
    pub custom_data: Option<CustomData>,
    /// Whether the product is active or archived.
    pub status: EntityStatus,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields accepted when creating a product.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCreate {
    /// Display name.
    pub name: String,
    /// Tax category.
    pub tax_category: TaxCategory,
    /// Longer description shown at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL of an image shown at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Seller-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
}

impl ProductCreate {
    /// Build a create request with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, tax_category: TaxCategory) -> Self {
        Self {
            name: name.into(),
            tax_category,
            description: None,
            image_url: None,
            custom_data: None,
        }
    }
}

/// Fields accepted when updating a product. Absent fields are unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductUpdate {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Longer description shown at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tax category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_category: Option<TaxCategory>,
    /// URL of an image shown at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Seller-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
    /// Set to `Archived` to retire the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}

/// Country-specific override of a price's unit amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitPriceOverride {
    /// Countries the override applies to.
    pub country_codes: Vec<CountryCode>,
    /// Amount charged in those countries.
    pub unit_price: Money,
}

/// Quantity limits for a price on a single transaction.
///
/// Defaults to 1..=100 when absent from the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceQuantity {
    /// Minimum purchasable quantity.
    pub minimum: u32,
    /// Maximum purchasable quantity.
    pub maximum: u32,
}

impl Default for PriceQuantity {
    fn default() -> Self {
        Self {
            minimum: 1,
            maximum: 100,
        }
    }
}

/// A price for a product: how much and how often to charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Price {
    /// Price identifier.
    pub id: PriceId,
    /// Product this price belongs to.
    pub product_id: ProductId,
    /// Internal description of the price.
    pub description: String,
    /// Name shown to customers at checkout.
    pub name: Option<String>,
    /// How often the price recurs; one-time charge when absent.
    pub billing_cycle: Option<Duration>,
    /// Free trial before the first charge; only for recurring prices.
    pub trial_period: Option<Duration>,
    /// How tax is calculated; follows the account setting when absent.
    #[serde(default)]
    pub tax_mode: TaxMode,
    /// Base amount charged.
    pub unit_price: Money,
    /// Country-specific amounts.
    #[serde(default)]
    pub unit_price_overrides: Vec<UnitPriceOverride>,
    /// Quantity limits per transaction.
    #[serde(default)]
    pub quantity: PriceQuantity,
    /// Whether the price is active or archived.
    pub status: EntityStatus,
    /// Seller-defined metadata.
    pub custom_data: Option<CustomData>,
    /// When the price was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the price was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields accepted when creating a price.
#[derive(Debug, Clone, Serialize)]
pub struct PriceCreate {
    /// Internal description of the price.
    pub description: String,
    /// Product this price belongs to.
    pub product_id: ProductId,
    /// Base amount charged.
    pub unit_price: Money,
    /// Name shown to customers at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// How often the price recurs; omit for a one-time charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<Duration>,
    /// Free trial before the first charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period: Option<Duration>,
    /// How tax is calculated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_mode: Option<TaxMode>,
    /// Country-specific amounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price_overrides: Option<Vec<UnitPriceOverride>>,
    /// Quantity limits per transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<PriceQuantity>,
    /// Seller-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
}

impl PriceCreate {
    /// Build a create request with the required fields.
    #[must_use]
    pub fn new(description: impl Into<String>, product_id: ProductId, unit_price: Money) -> Self {
        Self {
            description: description.into(),
            product_id,
            unit_price,
            name: None,
            billing_cycle: None,
            trial_period: None,
            tax_mode: None,
            unit_price_overrides: None,
            quantity: None,
            custom_data: None,
        }
    }
}

/// Fields accepted when updating a price. Absent fields are unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PriceUpdate {
    /// Internal description of the price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name shown to customers at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// How often the price recurs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<Duration>,
    /// Free trial before the first charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period: Option<Duration>,
    /// How tax is calculated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_mode: Option<TaxMode>,
    /// Base amount charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,
    /// Country-specific amounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price_overrides: Option<Vec<UnitPriceOverride>>,
    /// Quantity limits per transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<PriceQuantity>,
    /// Seller-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
    /// Set to `Archived` to retire the price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}
