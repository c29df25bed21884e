//! Integration tests for the checkout flows.
//!
//! Each test mounts the marketplace endpoints on a local mock server and
//! drives the real client through them.

#![allow(clippy::unwrap_used)]

use aurora_client::{ACCEPT, ApiError};
use aurora_core::CustomerDetails;
use aurora_integration_tests::{TEST_TOKEN, client_for, jane_doe, sample_order};
use serde_json::json;
use wiremock::matchers::{bearer_token, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Managed checkout
// ============================================================================

async fn mount_create_cart(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/Cart"))
        .and(body_json(json!({"items": []})))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_managed_checkout_runs_three_calls_in_order() {
    let server = MockServer::start().await;

    mount_create_cart(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"id": "cart-1"})),
    )
    .await;

    Mock::given(method("POST"))
        .and(path("/Cart/cart-1/Items"))
        .and(body_json(json!({
            "listingId": "L123",
            "quantity": 2,
            "currencyType": "USD",
            "price": 49.99
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/Cart/cart-1/Checkout"))
        .and(body_json(json!({
            "customer": {"firstName": "Jane", "lastName": "Doe", "email": "a@b.com"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"orderId":"o-9"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client
        .managed_checkout(&sample_order(jane_doe()))
        .await
        .unwrap();

    assert_eq!(body, r#"{"orderId":"o-9"}"#);

    let paths: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|req| req.url.path().to_string())
        .collect();
    assert_eq!(
        paths,
        vec!["/Cart", "/Cart/cart-1/Items", "/Cart/cart-1/Checkout"]
    );
}

#[tokio::test]
async fn test_managed_checkout_stops_when_add_item_fails() {
    let server = MockServer::start().await;

    mount_create_cart(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"id": "cart-2"})),
    )
    .await;

    Mock::given(method("POST"))
        .and(path("/Cart/cart-2/Items"))
        .respond_with(ResponseTemplate::new(409).set_body_string("listing sold out"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/Cart/cart-2/Checkout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .managed_checkout(&sample_order(jane_doe()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert!(err.to_string().contains("listing sold out"));
}

#[tokio::test]
async fn test_managed_checkout_stops_when_create_cart_fails() {
    let server = MockServer::start().await;

    mount_create_cart(
        &server,
        ResponseTemplate::new(500).set_body_string("cart service down"),
    )
    .await;

    let client = client_for(&server);
    let err = client
        .managed_checkout(&sample_order(jane_doe()))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Api { status: 500, .. }));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_managed_checkout_without_cart_id_aborts() {
    let server = MockServer::start().await;

    mount_create_cart(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})),
    )
    .await;

    let client = client_for(&server);
    let err = client
        .managed_checkout(&sample_order(jane_doe()))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::MissingCartId(_)));
    assert!(err.to_string().contains("No cart id returned"));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_managed_checkout_with_blank_cart_id_aborts() {
    let server = MockServer::start().await;

    mount_create_cart(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"id": ""})),
    )
    .await;

    let client = client_for(&server);
    let err = client
        .managed_checkout(&sample_order(jane_doe()))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::MissingCartId(_)));
}

#[tokio::test]
async fn test_cart_states_expose_cart_id() {
    let server = MockServer::start().await;

    mount_create_cart(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"id": "cart-3"})),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/Cart/cart-3/Items"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let order = sample_order(jane_doe());

    let created = client.create_cart().await.unwrap();
    assert_eq!(created.id().as_str(), "cart-3");

    let filled = created.add_item(order.line()).await.unwrap();
    assert_eq!(filled.id().as_str(), "cart-3");
}

// ============================================================================
// Unmanaged checkout
// ============================================================================

#[tokio::test]
async fn test_unmanaged_checkout_is_a_single_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Cart/Checkout"))
        .and(body_json(json!({
            "customer": {"firstName": "First", "lastName": "Last", "email": "dev@example.com"},
            "shoppingCart": {"items": [
                {"listingId": "L123", "quantity": 2, "currencyType": "USD", "price": 49.99}
            ]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("accepted"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client
        .unmanaged_checkout(&sample_order(CustomerDetails::default()))
        .await
        .unwrap();

    assert_eq!(body, "accepted");
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unmanaged_checkout_sends_address_and_client_order_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Cart/Checkout"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let details = CustomerDetails {
        phone: Some("555-0100".to_string()),
        address1: Some("1 Main St".to_string()),
        city: Some("Springfield".to_string()),
        region: Some("IL".to_string()),
        postal_code: Some("62701".to_string()),
        country: Some("US".to_string()),
        ..jane_doe()
    };
    let order = sample_order(details).with_client_order_id(Some("PO-7".to_string()));

    let client = client_for(&server);
    client.unmanaged_checkout(&order).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests.first().unwrap().body).unwrap();
    assert_eq!(
        sent["customer"],
        json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "a@b.com",
            "phoneNumber": "555-0100",
            "address": {
                "address1": "1 Main St",
                "address2": "",
                "city": "Springfield",
                "region": "IL",
                "postalCode": "62701",
                "country": "US"
            }
        })
    );
    assert_eq!(sent["clientOrderIdentifier"], "PO-7");
}

#[tokio::test]
async fn test_unmanaged_checkout_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Cart/Checkout"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .unmanaged_checkout(&sample_order(jane_doe()))
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("404"));
    assert!(message.contains("not found"));
}

// ============================================================================
// Request headers
// ============================================================================

#[tokio::test]
async fn test_checkout_requests_carry_auth_accept_and_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Cart/Checkout"))
        .and(bearer_token(TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .unmanaged_checkout(&sample_order(jane_doe()))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = requests.first().unwrap();
    assert_eq!(
        request.headers.get("accept").unwrap().to_str().unwrap(),
        ACCEPT
    );
    assert!(
        request
            .headers
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );
}
