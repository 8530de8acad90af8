//! Monetary primitives.
//!
//! Billforge represents money as a decimal string of minor units plus a
//! three-letter currency code, e.g. `{ "amount": "1099", "currency_code":
//! "USD" }`. Amounts stay strings end to end so no precision is lost in
//! transit; [`Amount::minor_units`] converts when arithmetic is needed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of digits accepted in an amount string.
const MAX_AMOUNT_DIGITS: usize = 18;

/// A monetary amount in minor units, as a validated decimal string.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(String);

impl Amount {
    /// Parse an amount string.
    ///
    /// # Errors
    ///
    /// Returns an error unless the value is 1 to 18 ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, MoneyError> {
        let value = value.into();
        if value.is_empty()
            || value.len() > MAX_AMOUNT_DIGITS
            || !value.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(MoneyError::InvalidAmount { value });
        }
        Ok(Self(value))
    }

    /// Build an amount from a number of minor units.
    #[must_use]
    pub fn from_minor_units(units: u64) -> Self {
        Self(units.to_string())
    }

    /// Return the amount as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the amount into minor units.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount exceeds the `u64` range.
    pub fn minor_units(&self) -> Result<u64, MoneyError> {
        self.0.parse().map_err(|_| MoneyError::AmountOverflow {
            value: self.0.clone(),
        })
    }
}

impl FromStr for Amount {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({})", self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Amount {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Currencies the platform supports for charging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[allow(missing_docs)]
pub enum CurrencyCode {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Cad,
    Chf,
    Hkd,
    Sgd,
    Sek,
    Ars,
    Brl,
    Cny,
    Cop,
    Czk,
    Dkk,
    Huf,
    Ils,
    Inr,
    Krw,
    Mxn,
    Nok,
    Nzd,
    Pln,
    Rub,
    Thb,
    Try,
    Twd,
    Uah,
    Zar,
}

impl CurrencyCode {
    /// Return the ISO 4217 code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Chf => "CHF",
            Self::Hkd => "HKD",
            Self::Sgd => "SGD",
            Self::Sek => "SEK",
            Self::Ars => "ARS",
            Self::Brl => "BRL",
            Self::Cny => "CNY",
            Self::Cop => "COP",
            Self::Czk => "CZK",
            Self::Dkk => "DKK",
            Self::Huf => "HUF",
            Self::Ils => "ILS",
            Self::Inr => "INR",
            Self::Krw => "KRW",
            Self::Mxn => "MXN",
            Self::Nok => "NOK",
            Self::Nzd => "NZD",
            Self::Pln => "PLN",
            Self::Rub => "RUB",
            Self::Thb => "THB",
            Self::Try => "TRY",
            Self::Twd => "TWD",
            Self::Uah => "UAH",
            Self::Zar => "ZAR",
        }
    }

    /// Whether the currency has no minor unit (amounts are whole units).
    #[must_use]
    pub const fn is_zero_decimal(self) -> bool {
        matches!(self, Self::Jpy | Self::Krw | Self::Twd)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An amount in a specific currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Money {
    /// Amount in minor units of the currency.
    pub amount: Amount,
    /// Currency the amount is denominated in.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Build a money value.
    #[must_use]
    pub const fn new(amount: Amount, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }
}

/// A two-letter ISO 3166-1 alpha-2 country code.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse a country code.
    ///
    /// # Errors
    ///
    /// Returns an error unless the value is exactly two ASCII uppercase
    /// letters.
    pub fn new(value: impl Into<String>) -> Result<Self, MoneyError> {
        let value = value.into();
        if value.len() != 2 || !value.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(MoneyError::InvalidCountryCode { value });
        }
        Ok(Self(value))
    }

    /// Return the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CountryCode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Debug for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryCode({})", self.0)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

/// Errors that can occur when parsing monetary primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    /// The amount is not a plain decimal string of minor units.
    #[error("invalid amount: {value:?}")]
    InvalidAmount {
        /// The rejected value.
        value: String,
    },

    /// The amount does not fit in a `u64`.
    #[error("amount out of range: {value:?}")]
    AmountOverflow {
        /// The rejected value.
        value: String,
    },

    /// The country code is not two uppercase ASCII letters.
    #[error("invalid country code: {value:?}")]
    InvalidCountryCode {
        /// The rejected value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_roundtrip() {
        let amount = Amount::new("1099").unwrap();
        assert_eq!(amount.as_str(), "1099");
        assert_eq!(amount.minor_units().unwrap(), 1099);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"1099\"");
        let parsed: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, parsed);
    }

    #[test]
    fn amount_rejects_non_digits() {
        assert!(Amount::new("10.99").is_err());
        assert!(Amount::new("-100").is_err());
        assert!(Amount::new("").is_err());
        assert!(Amount::new("1e3").is_err());
    }

    #[test]
    fn amount_rejects_too_many_digits() {
        assert!(Amount::new("1234567890123456789").is_err());
        assert!(Amount::new("123456789012345678").is_ok());
    }

    #[test]
    fn currency_serializes_uppercase() {
        let json = serde_json::to_string(&CurrencyCode::Usd).unwrap();
        assert_eq!(json, "\"USD\"");
        let parsed: CurrencyCode = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(parsed, CurrencyCode::Eur);
    }

    #[test]
    fn unknown_currency_fails_deserialization() {
        let result: Result<CurrencyCode, _> = serde_json::from_str("\"XXX\"");
        assert!(result.is_err());
    }

    #[test]
    fn money_decodes_from_wire_shape() {
        let money: Money =
            serde_json::from_str(r#"{"amount":"1099","currency_code":"GBP"}"#).unwrap();
        assert_eq!(money.amount.as_str(), "1099");
        assert_eq!(money.currency_code, CurrencyCode::Gbp);
    }

    #[test]
    fn country_code_validation() {
        assert!(CountryCode::new("US").is_ok());
        assert!(CountryCode::new("us").is_err());
        assert!(CountryCode::new("USA").is_err());
        assert!(CountryCode::new("U").is_err());
    }

    #[test]
    fn zero_decimal_currencies() {
        assert!(CurrencyCode::Jpy.is_zero_decimal());
        assert!(!CurrencyCode::Usd.is_zero_decimal());
    }
}
