//! Core types for the Aurora marketplace examples.
//!
//! This module provides type-safe wrappers for marketplace concepts and the
//! request/response shapes of the checkout endpoints.

pub mod checkout;
pub mod customer;
pub mod id;
pub mod order;
pub mod price;

pub use checkout::{
    CartCheckoutRequest, CheckoutOrder, CheckoutRequest, CreateCartRequest, CreatedCartResponse,
    ShoppingCart,
};
pub use customer::{
    Address, Customer, CustomerDetails, DEFAULT_EMAIL, DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME,
};
pub use id::*;
pub use order::OrderLine;
pub use price::CurrencyCode;
