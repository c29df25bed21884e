//! Managed and unmanaged checkout flows.
//!
//! The managed flow walks a server-side cart through
//! `NoCart -> CartCreated -> ItemAdded -> CheckedOut`. Each state is its own
//! type and every transition consumes the previous one, so a cart cannot be
//! checked out before its item is added, or twice. A failure at any step
//! aborts the flow; a cart that was already created is left on the server.

use aurora_core::{
    CartCheckoutRequest, CartId, CheckoutOrder, CreateCartRequest, CreatedCartResponse, OrderLine,
};
use tracing::{info, instrument};

use crate::client::AuroraClient;
use crate::error::ApiError;

/// Cart creation endpoint.
pub const CART_PATH: &str = "/Cart";

/// Inline (unmanaged) checkout endpoint.
pub const INLINE_CHECKOUT_PATH: &str = "/Cart/Checkout";

impl AuroraClient {
    /// Create an empty server-side cart.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the API answers with status >= 400,
    /// or the response does not carry a cart ID.
    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<CreatedCart<'_>, ApiError> {
        let body = self.post(CART_PATH, &CreateCartRequest::default()).await?;

        let response: CreatedCartResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::MissingCartId(format!("{e}: {body}")))?;
        if response.id.as_str().trim().is_empty() {
            return Err(ApiError::MissingCartId(body));
        }

        info!(cart_id = %response.id, "Cart created");
        Ok(CreatedCart {
            client: self,
            id: response.id,
        })
    }

    /// Check out through a server-managed cart: create the cart, add the
    /// order line, then submit the customer.
    ///
    /// Returns the raw body of the checkout response.
    ///
    /// # Errors
    ///
    /// Returns the first error from any of the three calls; later calls are
    /// not made.
    #[instrument(skip(self, order), fields(listing_id = %order.line().listing_id()))]
    pub async fn managed_checkout(&self, order: &CheckoutOrder) -> Result<String, ApiError> {
        self.create_cart()
            .await?
            .add_item(order.line())
            .await?
            .checkout(&order.cart_checkout_request())
            .await
    }

    /// Check out with the whole cart embedded in a single request. No cart is
    /// created on the server.
    ///
    /// Returns the raw body of the checkout response.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API answers with status >= 400.
    #[instrument(skip(self, order), fields(listing_id = %order.line().listing_id()))]
    pub async fn unmanaged_checkout(&self, order: &CheckoutOrder) -> Result<String, ApiError> {
        let body = self
            .post(INLINE_CHECKOUT_PATH, &order.inline_checkout_request())
            .await?;
        info!("Checkout submitted");
        Ok(body)
    }
}

/// A server-side cart that exists but holds no items yet.
#[derive(Debug)]
pub struct CreatedCart<'client> {
    client: &'client AuroraClient,
    id: CartId,
}

impl<'client> CreatedCart<'client> {
    /// The server-assigned cart ID.
    #[must_use]
    pub const fn id(&self) -> &CartId {
        &self.id
    }

    /// Add the order line to the cart.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API answers with status >= 400.
    #[instrument(skip(self, line), fields(cart_id = %self.id))]
    pub async fn add_item(self, line: &OrderLine) -> Result<FilledCart<'client>, ApiError> {
        self.client.post(&items_path(&self.id), line).await?;
        info!(listing_id = %line.listing_id(), quantity = line.quantity(), "Item added to cart");
        Ok(FilledCart {
            client: self.client,
            id: self.id,
        })
    }
}

/// A server-side cart holding its order line, ready for checkout.
#[derive(Debug)]
pub struct FilledCart<'client> {
    client: &'client AuroraClient,
    id: CartId,
}

impl FilledCart<'_> {
    /// The server-assigned cart ID.
    #[must_use]
    pub const fn id(&self) -> &CartId {
        &self.id
    }

    /// Submit checkout for this cart. The cart is consumed.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API answers with status >= 400.
    #[instrument(skip(self, request), fields(cart_id = %self.id))]
    pub async fn checkout(self, request: &CartCheckoutRequest) -> Result<String, ApiError> {
        let body = self.client.post(&checkout_path(&self.id), request).await?;
        info!("Checkout submitted");
        Ok(body)
    }
}

/// Path for adding an item to a cart.
#[must_use]
pub fn items_path(cart_id: &CartId) -> String {
    format!("{CART_PATH}/{cart_id}/Items")
}

/// Path for checking out a cart.
#[must_use]
pub fn checkout_path(cart_id: &CartId) -> String {
    format!("{CART_PATH}/{cart_id}/Checkout")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_paths() {
        let id = CartId::new("c-1");
        assert_eq!(items_path(&id), "/Cart/c-1/Items");
        assert_eq!(checkout_path(&id), "/Cart/c-1/Checkout");
    }

    #[test]
    fn test_inline_checkout_is_not_cart_specific() {
        assert_eq!(INLINE_CHECKOUT_PATH, "/Cart/Checkout");
        assert_eq!(CART_PATH, "/Cart");
    }
}
