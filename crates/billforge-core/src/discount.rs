//! Discount entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::common::CustomData;
use crate::ids::DiscountId;
use crate::money::CurrencyCode;

/// Lifecycle state of a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountStatus {
    /// Usable at checkout and via the API.
    Active,
    /// Retired by the seller.
    Archived,
    /// Past its expiry date.
    Expired,
    /// Usage limit reached.
    Used,
}

impl DiscountStatus {
    /// Return the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Expired => "expired",
            Self::Used => "used",
        }
    }
}

impl fmt::Display for DiscountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a discount reduces the charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// Fixed amount off the total.
    Flat,
    /// Fixed amount off each unit.
    FlatPerSeat,
    /// Percentage off the total.
    Percentage,
}

/// Minimum length of a discount code.
const CODE_MIN_LEN: usize = 5;

/// Maximum length of a discount code.
const CODE_MAX_LEN: usize = 32;

/// A checkout code customers can enter to redeem a discount.
///
/// 5 to 32 characters, uppercase letters and digits only.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiscountCode(String);

impl DiscountCode {
    /// Parse a discount code.
    ///
    /// # Errors
    ///
    /// Returns an error unless the value is 5 to 32 uppercase letters or
    /// digits.
    pub fn new(value: impl Into<String>) -> Result<Self, DiscountCodeError> {
        let value = value.into();
        let valid_chars = value
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if value.len() < CODE_MIN_LEN || value.len() > CODE_MAX_LEN || !valid_chars {
            return Err(DiscountCodeError::InvalidCode { value });
        }
        Ok(Self(value))
    }

    /// Return the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DiscountCode {
    type Err = DiscountCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Debug for DiscountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiscountCode({})", self.0)
    }
}

impl fmt::Display for DiscountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for DiscountCode {
    type Error = DiscountCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DiscountCode> for String {
    fn from(code: DiscountCode) -> Self {
        code.0
    }
}

/// Errors that can occur when parsing a discount code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiscountCodeError {
    /// The code is not 5 to 32 uppercase letters or digits.
    #[error("invalid discount code: {value:?}")]
    InvalidCode {
        /// The rejected value.
        value: String,
    },
}

/// A discount that reduces what a customer pays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Discount {
    /// Discount identifier.
    pub id: DiscountId,
    /// Lifecycle state.
    pub status: DiscountStatus,
    /// Internal description.
    pub description: String,
    /// Whether customers can redeem the code at checkout.
    #[serde(default)]
    pub enabled_for_checkout: bool,
    /// Checkout code, when one exists.
    pub code: Option<DiscountCode>,
    /// How the discount reduces the charge.
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    /// Amount off (minor units) or percentage, as a decimal string.
    pub amount: String,
    /// Currency for flat discounts; absent for percentages.
    pub currency_code: Option<CurrencyCode>,
    /// Whether the discount applies to every billing cycle.
    #[serde(default)]
    pub recur: bool,
    /// Cap on recurring applications; unlimited when absent.
    pub maximum_recurring_intervals: Option<u32>,
    /// Cap on total redemptions; unlimited when absent.
    pub usage_limit: Option<u32>,
    /// Redemptions so far.
    #[serde(default)]
    pub times_used: u32,
    /// Product or price ids the discount is limited to.
    pub restrict_to: Option<Vec<String>>,
    /// When the discount expires.
    pub expires_at: Option<DateTime<Utc>>,
    /// Seller-defined metadata.
    pub custom_data: Option<CustomData>,
    /// When the discount was created.
    pub created_at: DateTime<Utc>,
    /// When the discount was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields accepted when creating a discount.
#[derive(Debug, Clone, Serialize)]
pub struct DiscountCreate {
    /// Internal description.
    pub description: String,
    /// How the discount reduces the charge.
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    /// Amount off (minor units) or percentage, as a decimal string.
    pub amount: String,
    /// Currency, required for flat discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// Whether customers can redeem the code at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_for_checkout: Option<bool>,
    /// Checkout code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<DiscountCode>,
    /// Whether the discount applies to every billing cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recur: Option<bool>,
    /// Cap on recurring applications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_recurring_intervals: Option<u32>,
    /// Cap on total redemptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    /// Product or price ids to limit the discount to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_to: Option<Vec<String>>,
    /// When the discount expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Seller-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
}

impl DiscountCreate {
    /// Build a create request with the required fields.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        discount_type: DiscountType,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            discount_type,
            amount: amount.into(),
            currency_code: None,
            enabled_for_checkout: None,
            code: None,
            recur: None,
            maximum_recurring_intervals: None,
            usage_limit: None,
            restrict_to: None,
            expires_at: None,
            custom_data: None,
        }
    }
}

/// Fields accepted when updating a discount. Absent fields are unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiscountUpdate {
    /// Internal description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// How the discount reduces the charge.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,
    /// Amount off (minor units) or percentage, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Currency for flat discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// Whether customers can redeem the code at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_for_checkout: Option<bool>,
    /// Checkout code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<DiscountCode>,
    /// Whether the discount applies to every billing cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recur: Option<bool>,
    /// Cap on recurring applications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_recurring_intervals: Option<u32>,
    /// Cap on total redemptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    /// Product or price ids to limit the discount to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_to: Option<Vec<String>>,
    /// When the discount expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Seller-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
    /// Set to `Archived` to retire the discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DiscountStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_length_bounds() {
        assert!(DiscountCode::new("SAVE1").is_ok());
        assert!(DiscountCode::new("SAVE").is_err());
        assert!(DiscountCode::new("A".repeat(32)).is_ok());
        assert!(DiscountCode::new("A".repeat(33)).is_err());
    }

    #[test]
    fn code_rejects_lowercase_and_symbols() {
        assert!(DiscountCode::new("save20").is_err());
        assert!(DiscountCode::new("SAVE-20").is_err());
    }

    #[test]
    fn overlong_code_fails_deserialization() {
        let long = format!("\"{}\"", "A".repeat(33));
        let result: Result<DiscountCode, _> = serde_json::from_str(&long);
        assert!(result.is_err());
    }

    #[test]
    fn discount_decodes_with_defaults() {
        let discount: Discount = serde_json::from_str(
            r#"{
                "id": "dsc_01gv5kpg05xp104dkr45zygphw",
                "status": "active",
                "description": "Launch promotion",
                "code": "LAUNCH25",
                "type": "percentage",
                "amount": "25",
                "currency_code": null,
                "maximum_recurring_intervals": null,
                "usage_limit": 1000,
                "restrict_to": null,
                "expires_at": null,
                "custom_data": null,
                "created_at": "2023-03-08T14:02:20.603Z",
                "updated_at": null
            }"#,
        )
        .unwrap();
        // enabled_for_checkout, recur, and times_used were absent.
        assert!(!discount.enabled_for_checkout);
        assert!(!discount.recur);
        assert_eq!(discount.times_used, 0);
        assert_eq!(discount.discount_type, DiscountType::Percentage);
    }
}
