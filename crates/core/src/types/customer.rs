//! Customer and address payloads for checkout.
//!
//! [`CustomerDetails`] is what a caller supplies: every field optional.
//! [`Customer`] is what the checkout endpoints receive, with placeholder
//! defaults filled in and the address block included only when it has a
//! first line.

use serde::{Deserialize, Serialize};

/// First name sent when none is supplied.
pub const DEFAULT_FIRST_NAME: &str = "First";

/// Last name sent when none is supplied.
pub const DEFAULT_LAST_NAME: &str = "Last";

/// Email sent when none is supplied.
pub const DEFAULT_EMAIL: &str = "dev@example.com";

/// Caller-supplied customer fields, in the order the CLI accepts them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDetails {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Customer block of a checkout request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Mailing address attached to a [`Customer`].
///
/// Only `address1` decides whether the block exists. The remaining fields
/// are forwarded exactly as supplied; a missing city, region, postal code or
/// country is omitted and left for the API to reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address1: String,
    #[serde(default)]
    pub address2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Address {
    /// Names of the forwarded fields that were not supplied.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("city", self.city.is_none()),
            ("region", self.region.is_none()),
            ("postalCode", self.postal_code.is_none()),
            ("country", self.country.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}

impl CustomerDetails {
    /// Build the customer block sent to the checkout endpoints.
    ///
    /// Names and email fall back to [`DEFAULT_FIRST_NAME`],
    /// [`DEFAULT_LAST_NAME`] and [`DEFAULT_EMAIL`] when absent or blank, so
    /// the output always carries non-empty values for them.
    #[must_use]
    pub fn build(self) -> Customer {
        let address = non_blank(self.address1).map(|address1| Address {
            address1,
            address2: self.address2.unwrap_or_default(),
            city: self.city,
            region: self.region,
            postal_code: self.postal_code,
            country: self.country,
        });

        Customer {
            first_name: or_default(self.first_name, DEFAULT_FIRST_NAME),
            last_name: or_default(self.last_name, DEFAULT_LAST_NAME),
            email: or_default(self.email, DEFAULT_EMAIL),
            phone_number: non_blank(self.phone),
            address,
        }
    }
}

impl From<CustomerDetails> for Customer {
    fn from(details: CustomerDetails) -> Self {
        details.build()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn or_default(value: Option<String>, default: &str) -> String {
    non_blank(value).unwrap_or_else(|| default.to_owned())
}
