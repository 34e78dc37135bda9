//! Vitrine Core - Pricing, catalog and session types.
//!
//! This crate holds everything in the storefront that is not presentation:
//! - `pricing` - Discount rounding, original-price recovery, currency
//!   conversion and formatting
//! - `catalog` - Product records as served by the catalog API and the view
//!   values screens render from them
//! - `session` - Explicit authentication state and navigation routes
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no logging. Exchange rates are always supplied by the caller.
//!
//! # Modules
//!
//! - [`types`] - Currency, locale, money, discount and exchange-rate types
//! - [`pricing`] - The pricing calculator and [`PriceQuote`]
//! - [`catalog`] - Product records, categories and display views
//! - [`session`] - Session state machine and routes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod error;
pub mod pricing;
pub mod session;
pub mod types;

pub use error::PricingError;
pub use pricing::PriceQuote;
pub use types::*;
