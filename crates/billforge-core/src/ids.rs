//! Identifier types for Billforge entities.
//!
//! Every Billforge identifier is a prefixed string such as
//! `pro_01gsz4t5hdjse780zja8vvr7jg`: a short entity prefix, an underscore,
//! and a 26-character lowercase base-32 suffix. This module provides one
//! strongly-typed newtype per entity so identifiers cannot be mixed up at
//! compile time.
//!
//! # Macro-based ID Types
//!
//! The `entity_id!` macro reduces boilerplate for identifier types, ensuring
//! consistent implementation of validation, serialization, parsing, and
//! display traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of the random suffix in every identifier.
const ID_SUFFIX_LEN: usize = 26;

/// Suffixes are exactly 26 lowercase base-32 characters.
fn valid_suffix(suffix: &str) -> bool {
    suffix.len() == ID_SUFFIX_LEN
        && suffix
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Macro to define a prefixed identifier type with standard trait
/// implementations.
///
/// This macro generates a newtype wrapper around `String` with
/// implementations for:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `Serialize`, `Deserialize` (as string, validated on deserialize)
/// - `FromStr`, `Display`, `Debug`
/// - `TryFrom<String>`, `Into<String>`
/// - `AsRef<str>`
macro_rules! entity_id {
    ($name:ident, $prefix:literal, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Entity prefix, without the underscore separator.
            pub const PREFIX: &'static str = $prefix;

            /// Parse an identifier, validating the prefix and suffix format.
            ///
            /// # Errors
            ///
            /// Returns an error if the value is not
            /// `<prefix>_<26 lowercase base-32 characters>`.
            pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
                let value = value.into();
                match value.strip_prefix(concat!($prefix, "_")) {
                    Some(suffix) if valid_suffix(suffix) => Ok(Self(value)),
                    Some(_) => Err(IdError::InvalidSuffix { id: value }),
                    None => Err(IdError::InvalidPrefix {
                        expected: $prefix,
                        id: value,
                    }),
                }
            }

            /// Return the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

entity_id!(ProductId, "pro", "A product identifier (`pro_` prefix).");
entity_id!(PriceId, "pri", "A price identifier (`pri_` prefix).");
entity_id!(CustomerId, "ctm", "A customer identifier (`ctm_` prefix).");
entity_id!(AddressId, "add", "An address identifier (`add_` prefix).");
entity_id!(BusinessId, "biz", "A business identifier (`biz_` prefix).");
entity_id!(TransactionId, "txn", "A transaction identifier (`txn_` prefix).");
entity_id!(InvoiceId, "inv", "An invoice identifier (`inv_` prefix).");
entity_id!(SubscriptionId, "sub", "A subscription identifier (`sub_` prefix).");
entity_id!(DiscountId, "dsc", "A discount identifier (`dsc_` prefix).");
entity_id!(AdjustmentId, "adj", "An adjustment identifier (`adj_` prefix).");
entity_id!(EventId, "evt", "An event identifier (`evt_` prefix).");
entity_id!(NotificationId, "ntf", "A notification identifier (`ntf_` prefix).");
entity_id!(
    NotificationSettingId,
    "ntfset",
    "A notification destination identifier (`ntfset_` prefix)."
);
entity_id!(ReportId, "rep", "A report identifier (`rep_` prefix).");

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The identifier does not carry the expected entity prefix.
    #[error("identifier {id:?} does not start with expected prefix {expected:?}")]
    InvalidPrefix {
        /// The prefix the entity type requires.
        expected: &'static str,
        /// The rejected value.
        id: String,
    },

    /// The suffix after the prefix is not 26 lowercase base-32 characters.
    #[error("identifier {id:?} has a malformed suffix")]
    InvalidSuffix {
        /// The rejected value.
        id: String,
    },
}
