//! Checkout commands.
//!
//! # Usage
//!
//! ```bash
//! # Server-managed cart (create cart, add item, checkout)
//! aurora managed-checkout L123 2 49.99 USD a@b.com Jane Doe
//!
//! # Cart submitted inline, default customer placeholders
//! aurora unmanaged-checkout L123 2 49.99 USD
//!
//! # Full customer with address
//! aurora unmanaged-checkout L123 1 120 USD a@b.com Jane Doe 555-0100 \
//!     "1 Main St" "" Springfield IL 62701 US --client-order-id PO-7
//! ```
//!
//! Customer fields are positional and optional: anything after the last one
//! supplied is treated as absent.

use aurora_client::{ApiError, AuroraClient};
use aurora_core::{CheckoutOrder, CurrencyCode, CustomerDetails, ListingId, OrderLine};
use clap::Args;
use rust_decimal::Decimal;
use tracing::warn;

/// Arguments shared by both checkout commands.
#[derive(Args, Debug)]
pub struct CheckoutArgs {
    /// Listing to buy
    pub listing_id: ListingId,

    /// Number of tickets (forwarded as-is)
    #[arg(allow_negative_numbers = true)]
    pub quantity: i32,

    /// Unit price, e.g. 49.99
    #[arg(allow_negative_numbers = true)]
    pub price: Decimal,

    /// Currency code, e.g. USD
    pub currency: CurrencyCode,

    /// Customer email (default: dev@example.com)
    pub email: Option<String>,

    /// Customer first name (default: First)
    pub first_name: Option<String>,

    /// Customer last name (default: Last)
    pub last_name: Option<String>,

    /// Customer phone number
    pub phone: Option<String>,

    /// Address line 1; the address is sent only when this is non-blank
    pub address1: Option<String>,

    /// Address line 2 (default: empty)
    pub address2: Option<String>,

    /// City
    pub city: Option<String>,

    /// Region or state
    pub region: Option<String>,

    /// Postal or ZIP code
    pub postal: Option<String>,

    /// Country code
    pub country: Option<String>,

    /// Client order identifier attached to the checkout
    #[arg(long)]
    pub client_order_id: Option<String>,
}

impl CheckoutArgs {
    /// Build the order both flows submit.
    #[must_use]
    pub fn into_order(self) -> CheckoutOrder {
        let line = OrderLine::new(self.listing_id, self.quantity, self.price, self.currency);
        let details = CustomerDetails {
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            address1: self.address1,
            address2: self.address2,
            city: self.city,
            region: self.region,
            postal_code: self.postal,
            country: self.country,
        };

        let order = CheckoutOrder::new(line, details).with_client_order_id(self.client_order_id);
        if let Some(address) = &order.customer().address {
            let missing = address.missing_fields();
            if !missing.is_empty() {
                warn!(
                    missing = ?missing,
                    "Address is incomplete; sending it without these fields"
                );
            }
        }
        order
    }
}

/// Check out through a server-managed cart.
///
/// # Errors
///
/// Returns the first failing call's error.
pub async fn managed(client: &AuroraClient, args: CheckoutArgs) -> Result<String, ApiError> {
    let order = args.into_order();
    client.managed_checkout(&order).await
}

/// Check out with the cart embedded in the request.
///
/// # Errors
///
/// Returns error if the checkout call fails.
pub async fn unmanaged(client: &AuroraClient, args: CheckoutArgs) -> Result<String, ApiError> {
    let order = args.into_order();
    client.unmanaged_checkout(&order).await
}
