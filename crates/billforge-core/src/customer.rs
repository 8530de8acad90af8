//! Customer, address, and business entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{CustomData, EntityStatus};
use crate::ids::{AddressId, BusinessId, CustomerId};
use crate::money::CountryCode;

fn default_locale() -> String {
    "en".to_string()
}

/// A customer who can be billed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Customer {
    /// Customer identifier.
    pub id: CustomerId,
    /// Full name; required for tax-compliant invoicing in some regions.
    pub name: Option<String>,
    /// Email address. Validated server-side.
    pub email: String,
    /// IETF BCP 47 locale used for customer-facing messages.
    /// Defaults to `"en"` when absent.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Whether the customer agreed to receive marketing.
    #[serde(default)]
    pub marketing_consent: bool,
    /// Whether the customer is active or archived.
    pub status: EntityStatus,
    /// Seller-defined metadata.
    pub custom_data: Option<CustomData>,
    /// When the customer was created.
    pub created_at: DateTime<Utc>,
    /// When the customer was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields accepted when creating a customer.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerCreate {
    /// Email address.
    pub email: String,
    /// Full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// IETF BCP 47 locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Seller-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
}

impl CustomerCreate {
    /// Build a create request with the required fields.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            locale: None,
            custom_data: None,
        }
    }
}

/// Fields accepted when updating a customer. Absent fields are unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerUpdate {
    /// Full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// IETF BCP 47 locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Seller-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
    /// Set to `Archived` to retire the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}

/// A billing address belonging to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Address {
    /// Address identifier.
    pub id: AddressId,
    /// Internal label for the address.
    pub description: Option<String>,
    /// First address line.
    pub first_line: Option<String>,
    /// Second address line.
    pub second_line: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Postal or ZIP code. Required in countries with postal codes.
    pub postal_code: Option<String>,
    /// State, county, or region.
    pub region: Option<String>,
    /// Country. Drives tax calculation.
    pub country_code: CountryCode,
    /// Whether the address is active or archived.
    pub status: EntityStatus,
    /// Seller-defined metadata.
    pub custom_data: Option<CustomData>,
    /// When the address was created.
    pub created_at: DateTime<Utc>,
    /// When the address was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields accepted when creating an address.
#[derive(Debug, Clone, Serialize)]
pub struct AddressCreate {
    /// Country. Drives tax calculation.
    pub country_code: CountryCode,
    /// Internal label for the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// First address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_line: Option<String>,
    /// Second address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_line: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// State, county, or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Seller-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
}

impl AddressCreate {
    /// Build a create request with the required fields.
    #[must_use]
    pub fn new(country_code: CountryCode) -> Self {
        Self {
            country_code,
            description: None,
            first_line: None,
            second_line: None,
            city: None,
            postal_code: None,
            region: None,
            custom_data: None,
        }
    }
}

/// Fields accepted when updating an address. Absent fields are unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddressUpdate {
    /// Internal label for the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// First address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_line: Option<String>,
    /// Second address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_line: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// State, county, or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<CountryCode>,
    /// Seller-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
    /// Set to `Archived` to retire the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}

/// A contact person at a business, notified about invoices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// Contact name.
    pub name: Option<String>,
    /// Contact email address.
    pub email: String,
}

/// A business entity attached to a customer for B2B invoicing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Business {
    /// Business identifier.
    pub id: BusinessId,
    /// Registered company name.
    pub name: String,
    /// Company registration number.
    pub company_number: Option<String>,
    /// Tax or VAT identifier.
    pub tax_identifier: Option<String>,
    /// Whether the business is active or archived.
    pub status: EntityStatus,
    /// People to notify about invoices.
    #[serde(default)]
    pub contacts: Vec<Contact>,
    /// Seller-defined metadata.
    pub custom_data: Option<CustomData>,
    /// When the business was created.
    pub created_at: DateTime<Utc>,
    /// When the business was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields accepted when creating a business.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessCreate {
    /// Registered company name.
    pub name: String,
    /// Company registration number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_number: Option<String>,
    /// Tax or VAT identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_identifier: Option<String>,
    /// People to notify about invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
    /// Seller-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
}

impl BusinessCreate {
    /// Build a create request with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company_number: None,
            tax_identifier: None,
            contacts: None,
            custom_data: None,
        }
    }
}

/// Fields accepted when updating a business. Absent fields are unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BusinessUpdate {
    /// Registered company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Company registration number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_number: Option<String>,
    /// Tax or VAT identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_identifier: Option<String>,
    /// People to notify about invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
    /// Seller-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
    /// Set to `Archived` to retire the business.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_locale_defaults_when_absent() {
        let customer: Customer = serde_json::from_str(
            r#"{
                "id": "ctm_01h04vsc0qhwtsbsxh3422wjjw",
                "name": null,
                "email": "dev@example.com",
                "status": "active",
                "custom_data": null,
                "created_at": "2023-05-08T08:55:03.071Z",
                "updated_at": null
            }"#,
        )
        .unwrap();
        assert_eq!(customer.locale, "en");
        assert!(!customer.marketing_consent);
    }

    #[test]
    fn customer_explicit_locale_preserved() {
        let customer: Customer = serde_json::from_str(
            r#"{
                "id": "ctm_01h04vsc0qhwtsbsxh3422wjjw",
                "name": "Dana",
                "email": "dev@example.com",
                "locale": "de",
                "marketing_consent": true,
                "status": "active",
                "custom_data": null,
                "created_at": "2023-05-08T08:55:03.071Z",
                "updated_at": null
            }"#,
        )
        .unwrap();
        assert_eq!(customer.locale, "de");
        assert!(customer.marketing_consent);
    }

    #[test]
    fn address_requires_country_code() {
        let result: Result<Address, _> = serde_json::from_str(
            r#"{
                "id": "add_01h04vsc0qhwtsbsxh3422wjjw",
                "description": null,
                "first_line": null,
                "second_line": null,
                "city": null,
                "postal_code": null,
                "region": null,
                "status": "active",
                "custom_data": null,
                "created_at": "2023-05-08T08:55:03.071Z",
                "updated_at": null
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn business_contacts_default_empty() {
        let business: Business = serde_json::from_str(
            r#"{
                "id": "biz_01h04vsc0qhwtsbsxh3422wjjw",
                "name": "Example GmbH",
                "company_number": null,
                "tax_identifier": "DE123456789",
                "status": "active",
                "custom_data": null,
                "created_at": "2023-05-08T08:55:03.071Z",
                "updated_at": null
            }"#,
        )
        .unwrap();
        assert!(business.contacts.is_empty());
    }
}
