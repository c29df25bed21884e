//! Request and response shapes for the two checkout flows.
//!
//! # Managed checkout
//!
//! The server keeps the cart. Three calls, strictly in order:
//!
//! 1. `POST /Cart` with [`CreateCartRequest`], answered by a
//!    [`CreatedCartResponse`] carrying the cart ID
//! 2. `POST /Cart/{cartId}/Items` with the [`OrderLine`]
//! 3. `POST /Cart/{cartId}/Checkout` with a [`CartCheckoutRequest`]
//!
//! # Unmanaged checkout
//!
//! The client keeps the cart and submits it inline in a single
//! `POST /Cart/Checkout` with a [`CheckoutRequest`].

use serde::{Deserialize, Serialize};

use super::customer::{Customer, CustomerDetails};
use super::id::CartId;
use super::order::OrderLine;

/// Body of the cart-creation call. Always an empty item list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateCartRequest {
    items: Vec<OrderLine>,
}

/// The part of the cart-creation response the managed flow needs.
///
/// Every other field in the response is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedCartResponse {
    pub id: CartId,
}

/// Body of the cart-specific checkout call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCheckoutRequest {
    pub customer: Customer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_identifier: Option<String>,
}

/// Body of the inline checkout call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub customer: Customer,
    pub shopping_cart: ShoppingCart,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_identifier: Option<String>,
}

/// Cart embedded in a [`CheckoutRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingCart {
    pub items: Vec<OrderLine>,
}

/// Everything either checkout flow needs: one order line and the customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOrder {
    line: OrderLine,
    customer: Customer,
    client_order_id: Option<String>,
}

impl CheckoutOrder {
    /// Create an order from an order line and caller-supplied customer
    /// details. Customer defaults are applied here.
    #[must_use]
    pub fn new(line: OrderLine, details: CustomerDetails) -> Self {
        Self {
            line,
            customer: details.build(),
            client_order_id: None,
        }
    }

    /// Attach a client order identifier. Blank values are ignored.
    #[must_use]
    pub fn with_client_order_id(mut self, id: Option<String>) -> Self {
        self.client_order_id = id.filter(|id| !id.trim().is_empty());
        self
    }

    #[must_use]
    pub const fn line(&self) -> &OrderLine {
        &self.line
    }

    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Body for `POST /Cart/{cartId}/Checkout`.
    #[must_use]
    pub fn cart_checkout_request(&self) -> CartCheckoutRequest {
        CartCheckoutRequest {
            customer: self.customer.clone(),
            client_order_identifier: self.client_order_id.clone(),
        }
    }

    /// Body for `POST /Cart/Checkout`.
    #[must_use]
    pub fn inline_checkout_request(&self) -> CheckoutRequest {
        CheckoutRequest {
            customer: self.customer.clone(),
            shopping_cart: ShoppingCart {
                items: vec![self.line.clone()],
            },
            client_order_identifier: self.client_order_id.clone(),
        }
    }
}
