//! MediGrove Core - Shared domain library.
//!
//! This crate provides the domain model and pure logic used by the
//! MediGrove storefront:
//! - [`catalog`] - The fixed product catalog
//! - [`cart`] - The cart state machine
//! - [`search`] - Catalog filtering
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//!
//! # Architecture
//!
//! The core crate contains only types and logic - no I/O, no HTTP, no
//! template rendering. Everything here is synchronous and side-effect free,
//! which keeps it trivially testable and usable from any frontend.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod search;
pub mod types;

pub use cart::{Cart, CartError, CartLine};
pub use catalog::{Catalog, Product};
pub use search::{CatalogFilter, filter_catalog};
pub use types::*;
