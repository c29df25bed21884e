//! Command implementations.

pub mod checkout;
