//! Integration tests for the Aurora client.
//!
//! Tests run the real [`AuroraClient`] against a local `wiremock` server, so
//! no token or network access is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p aurora-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog` - event search, tickets and autocomplete requests
//! - `checkout` - managed and unmanaged checkout flows

#![cfg_attr(not(test), forbid(unsafe_code))]

use aurora_client::{ApiConfig, AuroraClient};
use aurora_core::{CheckoutOrder, CurrencyCode, CustomerDetails, ListingId, OrderLine};
use rust_decimal::Decimal;
use secrecy::SecretString;
use wiremock::MockServer;

/// Token the test client sends.
pub const TEST_TOKEN: &str = "test-token";

/// Build a client pointed at a mock server.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client_for(server: &MockServer) -> AuroraClient {
    let config = ApiConfig::new(server.uri(), SecretString::from(TEST_TOKEN));
    AuroraClient::new(&config).expect("client builds for mock server")
}

/// The order from the quick-start example: 2 x L123 at 49.99 USD.
#[must_use]
pub fn sample_order(details: CustomerDetails) -> CheckoutOrder {
    let line = OrderLine::new(
        ListingId::new("L123"),
        2,
        Decimal::new(4999, 2),
        CurrencyCode::new("USD"),
    );
    CheckoutOrder::new(line, details)
}

/// Customer details with only the name and email supplied.
#[must_use]
pub fn jane_doe() -> CustomerDetails {
    CustomerDetails {
        email: Some("a@b.com".to_string()),
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        ..CustomerDetails::default()
    }
}
