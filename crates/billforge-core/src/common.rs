//! Shared primitive types used across entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Billing interval unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    /// Daily.
    Day,
    /// Weekly.
    Week,
    /// Monthly.
    Month,
    /// Yearly.
    Year,
}

/// Number of intervals in a billing cycle; always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Frequency(u32);

impl Frequency {
    /// Build a frequency.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero.
    pub fn new(value: u32) -> Result<Self, DurationError> {
        if value == 0 {
            return Err(DurationError::ZeroFrequency);
        }
        Ok(Self(value))
    }

    /// Return the frequency as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Frequency {
    type Error = DurationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Frequency> for u32 {
    fn from(frequency: Frequency) -> Self {
        frequency.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when building a duration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    /// Frequency must be at least one.
    #[error("frequency must be at least 1")]
    ZeroFrequency,
}

/// How often something recurs: an interval unit plus a frequency.
///
/// `{ "interval": "month", "frequency": 3 }` is every three months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Duration {
    /// Interval unit.
    pub interval: Interval,
    /// Number of intervals per cycle.
    pub frequency: Frequency,
}

impl Duration {
    /// Build a duration.
    ///
    /// # Errors
    ///
    /// Returns an error if `frequency` is zero.
    pub fn new(interval: Interval, frequency: u32) -> Result<Self, DurationError> {
        Ok(Self {
            interval,
            frequency: Frequency::new(frequency)?,
        })
    }
}

/// A half-open period of time, as returned for billing periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimePeriod {
    /// When the period starts.
    pub starts_at: DateTime<Utc>,
    /// When the period ends.
    pub ends_at: DateTime<Utc>,
}

/// Free-form structured metadata attached to an entity.
///
/// Always a JSON object on the wire; non-object values fail decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomData(pub serde_json::Map<String, serde_json::Value>);

/// Whether an entity is live or retired from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    /// Usable in new transactions.
    Active,
    /// Retired; existing references keep working.
    Archived,
}

impl EntityStatus {
    /// Return the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How tax is calculated for a price.
///
/// Defaults to the seller's account setting when the field is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    /// Follow the seller-level tax configuration.
    #[default]
    AccountSetting,
    /// Prices are tax-exclusive; tax is added on top.
    External,
    /// Prices are tax-inclusive.
    Internal,
}

/// How payment is collected for a transaction or subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionMode {
    /// Charge the stored payment method automatically.
    #[default]
    Automatic,
    /// Issue an invoice and wait for manual payment.
    Manual,
}
