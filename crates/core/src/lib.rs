//! Aurora Core - Shared types library.
//!
//! This crate provides the types used by the Aurora marketplace examples:
//! - `client` - API call executor, catalog queries and checkout flows
//! - `cli` - The `aurora` command-line tool
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Building a
//! checkout request is pure data transformation and is tested here without a
//! network.
//!
//! # Modules
//!
//! - [`types`] - Identifiers, order lines, customers and checkout payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
