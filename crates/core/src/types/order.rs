//! Order lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ListingId;
use super::price::CurrencyCode;

/// One purchasable item entry: a listing, how many tickets, and the agreed
/// unit price.
///
/// Serializes to the shape both cart endpoints accept:
///
/// ```json
/// {"listingId":"L123","quantity":2,"currencyType":"USD","price":49.99}
/// ```
///
/// `quantity` is not checked for positivity; zero or negative values are
/// forwarded and left for the API to reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    listing_id: ListingId,
    quantity: i32,
    #[serde(rename = "currencyType")]
    currency: CurrencyCode,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
}

impl OrderLine {
    /// Create a new order line.
    #[must_use]
    pub const fn new(
        listing_id: ListingId,
        quantity: i32,
        price: Decimal,
        currency: CurrencyCode,
    ) -> Self {
        Self {
            listing_id,
            quantity,
            currency,
            price,
        }
    }

    #[must_use]
    pub const fn listing_id(&self) -> &ListingId {
        &self.listing_id
    }

    #[must_use]
    pub const fn quantity(&self) -> i32 {
        self.quantity
    }

    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    #[must_use]
    pub const fn currency(&self) -> &CurrencyCode {
        &self.currency
    }
}
