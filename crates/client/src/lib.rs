//! Aurora Client - marketplace API call executor and flows.
//!
//! Provides:
//! - [`ApiConfig`] loaded from `ENV` / `TOKEN`
//! - [`AuroraClient`], which attaches the bearer token and accept headers,
//!   sends requests and maps status >= 400 to [`ApiError::Api`]
//! - Catalog queries (event search, event tickets, autocomplete)
//! - Managed and unmanaged checkout flows
//!
//! # Example
//!
//! ```rust,no_run
//! use aurora_client::{ApiConfig, AuroraClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig::from_env()?;
//! let client = AuroraClient::new(&config)?;
//! let body = client.query_events("Chiefs").await?;
//! # let _ = body;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
mod client;
pub mod config;
mod error;

pub use checkout::{CreatedCart, FilledCart};
pub use client::{ACCEPT, AuroraClient};
pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
